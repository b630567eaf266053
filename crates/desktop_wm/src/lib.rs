pub mod chrome;
pub mod click;
pub mod config;
pub mod error;
pub mod model;
pub mod reducer;
pub mod runtime;
pub mod shell;
pub mod taskbar;
pub mod window_manager;

pub use config::WindowManagerConfig;
pub use error::{ConfigError, ConfigResult};
pub use model::*;
pub use reducer::{reduce_windows, WindowAction, WindowEffect};
pub use runtime::{WindowController, WindowManager, WindowStackUpdate};
