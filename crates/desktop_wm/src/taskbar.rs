//! Taskbar-facing helpers built on the window controller.

use std::rc::Rc;

use serde::Serialize;

use crate::{
    model::{WindowId, WindowStack},
    runtime::WindowController,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One taskbar button.
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub minimized: bool,
    pub focused: bool,
}

/// Builds taskbar buttons in open order.
pub fn taskbar_entries(stack: &WindowStack) -> Vec<TaskbarEntry> {
    stack
        .windows
        .iter()
        .map(|w| TaskbarEntry {
            id: w.id.clone(),
            title: w.title.clone(),
            minimized: w.minimized,
            focused: w.is_focused,
        })
        .collect()
}

/// What a taskbar button click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarToggle {
    Restored,
    Minimized,
    Focused,
    /// The window was already gone.
    Ignored,
}

/// Applies taskbar button semantics: restore a minimized window, minimize the focused one,
/// otherwise focus it.
pub fn toggle_taskbar_window(
    controller: &WindowController,
    window_id: &WindowId,
) -> (TaskbarToggle, Rc<WindowStack>) {
    let stack = controller.snapshot();
    let flags = stack.window(window_id).map(|w| (w.minimized, w.is_focused));
    let Some((minimized, focused)) = flags else {
        return (TaskbarToggle::Ignored, stack);
    };

    if minimized {
        (TaskbarToggle::Restored, controller.restore(window_id))
    } else if focused {
        (TaskbarToggle::Minimized, controller.minimize(window_id))
    } else {
        (TaskbarToggle::Focused, controller.focus(window_id))
    }
}
