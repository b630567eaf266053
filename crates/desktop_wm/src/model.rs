use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stacking value the registry counts up from when no config overrides it.
pub const DEFAULT_BASE_Z_INDEX: u64 = 100;
pub const DEFAULT_WINDOW_WIDTH: i32 = 420;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;

/// External handle for a window; unique among the windows currently open.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    pub fn resized_to(self, w: i32, h: i32) -> Self {
        Self { w, h, ..self }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 48,
            y: 48,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// One open window. `z_index` and `is_focused` are owned by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub rect: WindowRect,
    pub z_index: u64,
    pub is_focused: bool,
    pub minimized: bool,
    pub maximized: bool,
    /// Identity of the hosted app; never inspected by the registry.
    pub app: String,
    /// App-specific state needed to re-render the hosted content.
    pub payload: Value,
}

/// Caller-supplied description of a window to open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub id: WindowId,
    pub title: String,
    pub rect: WindowRect,
    pub minimized: bool,
    pub maximized: bool,
    pub app: String,
    pub payload: Value,
}

impl OpenWindowRequest {
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rect: WindowRect::default(),
            minimized: false,
            maximized: false,
            app: String::new(),
            payload: Value::Null,
        }
    }

    pub fn with_rect(mut self, rect: WindowRect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_app(mut self, app: impl Into<String>, payload: Value) -> Self {
        self.app = app.into();
        self.payload = payload;
        self
    }

    pub fn minimized(mut self, minimized: bool) -> Self {
        self.minimized = minimized;
        self
    }

    pub fn maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }

    pub(crate) fn into_record(self) -> WindowRecord {
        WindowRecord {
            id: self.id,
            title: self.title,
            rect: self.rect,
            z_index: 0,
            is_focused: false,
            minimized: self.minimized,
            maximized: self.maximized,
            app: self.app,
            payload: self.payload,
        }
    }
}

/// Registry state: every open window plus the z-index high-water mark.
///
/// Record order is open order; paint order comes from `z_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowStack {
    pub windows: Vec<WindowRecord>,
    pub top_z_index: u64,
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::with_base_z_index(DEFAULT_BASE_Z_INDEX)
    }
}

impl WindowStack {
    pub fn with_base_z_index(base_z_index: u64) -> Self {
        Self {
            windows: Vec::new(),
            top_z_index: base_z_index,
        }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn contains(&self, window_id: &WindowId) -> bool {
        self.window(window_id).is_some()
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn focused_window(&self) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.is_focused)
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.focused_window().map(|w| &w.id)
    }

    /// Visible windows in paint order (lowest z-index first).
    pub fn stacking_order(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    pub fn minimized_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.minimized)
    }
}
