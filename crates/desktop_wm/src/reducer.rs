//! Reducer actions, side-effect intents, and transition logic for the window registry.

use crate::{
    model::{OpenWindowRequest, WindowId, WindowRect, WindowStack},
    window_manager::{find_window_mut, focus_window_internal},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_windows`] to mutate a [`WindowStack`].
pub enum WindowAction {
    /// Open a window, or surface the existing one carrying the same id.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle the maximized flag of a window.
    MaximizeWindow {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Un-minimize, focus and raise a window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Move a window's top-left corner.
    UpdatePosition {
        /// Window being moved.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Replace a window's whole rectangle in one transition.
    UpdateRect {
        /// Window being moved and resized.
        window_id: WindowId,
        /// New geometry.
        rect: WindowRect,
    },
    /// Resize a window.
    UpdateSize {
        /// Window being resized.
        window_id: WindowId,
        /// New width.
        w: i32,
        /// New height.
        h: i32,
    },
}

impl WindowAction {
    /// Window the action targets.
    pub fn window_id(&self) -> &WindowId {
        match self {
            Self::OpenWindow(req) => &req.id,
            Self::CloseWindow { window_id }
            | Self::FocusWindow { window_id }
            | Self::MinimizeWindow { window_id }
            | Self::MaximizeWindow { window_id }
            | Self::RestoreWindow { window_id }
            | Self::UpdatePosition { window_id, .. }
            | Self::UpdateRect { window_id, .. }
            | Self::UpdateSize { window_id, .. } => window_id,
        }
    }

    /// Short label used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenWindow(_) => "open",
            Self::CloseWindow { .. } => "close",
            Self::FocusWindow { .. } => "focus",
            Self::MinimizeWindow { .. } => "minimize",
            Self::MaximizeWindow { .. } => "maximize",
            Self::RestoreWindow { .. } => "restore",
            Self::UpdatePosition { .. } => "update_position",
            Self::UpdateRect { .. } => "update_rect",
            Self::UpdateSize { .. } => "update_size",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_windows`] for the host UI to execute.
pub enum WindowEffect {
    /// A new record was added to the registry.
    WindowOpened(WindowId),
    /// A record was removed from the registry.
    WindowClosed(WindowId),
    /// Move keyboard focus into the newly focused window's content.
    FocusWindowInput(WindowId),
}

/// Applies a [`WindowAction`] to the registry state and collects resulting side effects.
///
/// Every action is total: one that names a window not present in `stack` leaves it untouched
/// and returns no effects.
pub fn reduce_windows(stack: &mut WindowStack, action: WindowAction) -> Vec<WindowEffect> {
    let mut effects = Vec::new();
    match action {
        WindowAction::OpenWindow(req) => {
            let window_id = req.id.clone();
            if !stack.contains(&window_id) {
                stack.windows.push(req.into_record());
                effects.push(WindowEffect::WindowOpened(window_id.clone()));
            }
            focus_window_internal(stack, &window_id);
            effects.push(WindowEffect::FocusWindowInput(window_id));
        }
        WindowAction::CloseWindow { window_id } => {
            let before_len = stack.windows.len();
            stack.windows.retain(|w| w.id != window_id);
            if stack.windows.len() != before_len {
                effects.push(WindowEffect::WindowClosed(window_id));
            }
        }
        WindowAction::FocusWindow { window_id } | WindowAction::RestoreWindow { window_id } => {
            if focus_window_internal(stack, &window_id) {
                effects.push(WindowEffect::FocusWindowInput(window_id));
            }
        }
        WindowAction::MinimizeWindow { window_id } => {
            if let Some(window) = find_window_mut(stack, &window_id) {
                window.minimized = true;
                window.is_focused = false;
            }
        }
        WindowAction::MaximizeWindow { window_id } => {
            if let Some(window) = find_window_mut(stack, &window_id) {
                window.maximized = !window.maximized;
            }
        }
        WindowAction::UpdatePosition { window_id, x, y } => {
            if let Some(window) = find_window_mut(stack, &window_id) {
                window.rect = window.rect.moved_to(x, y);
            }
        }
        WindowAction::UpdateRect { window_id, rect } => {
            if let Some(window) = find_window_mut(stack, &window_id) {
                window.rect = rect;
            }
        }
        WindowAction::UpdateSize { window_id, w, h } => {
            if let Some(window) = find_window_mut(stack, &window_id) {
                window.rect = window.rect.resized_to(w, h);
            }
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::stack_invariants_hold;

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    fn open(stack: &mut WindowStack, raw: &str) -> Vec<WindowEffect> {
        reduce_windows(
            stack,
            WindowAction::OpenWindow(
                OpenWindowRequest::new(raw, raw).with_rect(WindowRect::new(0, 0, 400, 300)),
            ),
        )
    }

    fn window<'a>(stack: &'a WindowStack, raw: &str) -> &'a crate::model::WindowRecord {
        stack.window(&id(raw)).expect("window")
    }

    #[test]
    fn open_window_focuses_new_window_and_raises_it() {
        let mut stack = WindowStack::default();

        let effects = open(&mut stack, "a");
        assert_eq!(
            effects,
            vec![
                WindowEffect::WindowOpened(id("a")),
                WindowEffect::FocusWindowInput(id("a")),
            ]
        );
        open(&mut stack, "b");

        assert_eq!(stack.len(), 2);
        assert_eq!(window(&stack, "a").z_index, 101);
        assert!(!window(&stack, "a").is_focused);
        assert_eq!(window(&stack, "b").z_index, 102);
        assert_eq!(stack.focused_window_id(), Some(&id("b")));
    }

    #[test]
    fn focus_raises_previously_opened_window() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");
        open(&mut stack, "b");

        reduce_windows(&mut stack, WindowAction::FocusWindow { window_id: id("a") });

        assert_eq!(window(&stack, "a").z_index, 103);
        assert!(window(&stack, "a").is_focused);
        assert!(!window(&stack, "b").is_focused);
        assert_eq!(window(&stack, "b").z_index, 102);
    }

    #[test]
    fn refocusing_focused_top_window_still_issues_fresh_z_index() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");

        reduce_windows(&mut stack, WindowAction::FocusWindow { window_id: id("a") });

        assert_eq!(window(&stack, "a").z_index, 102);
        assert_eq!(stack.top_z_index, 102);
    }

    #[test]
    fn focusing_minimized_window_unminimizes_it() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");
        open(&mut stack, "b");
        reduce_windows(&mut stack, WindowAction::MinimizeWindow { window_id: id("a") });

        let effects = reduce_windows(&mut stack, WindowAction::FocusWindow { window_id: id("a") });

        assert_eq!(effects, vec![WindowEffect::FocusWindowInput(id("a"))]);
        let record = window(&stack, "a");
        assert!(!record.minimized);
        assert!(record.is_focused);
        assert_eq!(record.z_index, 103);
        assert!(!window(&stack, "b").is_focused);
        assert!(stack_invariants_hold(&stack));
    }

    #[test]
    fn update_rect_replaces_geometry_in_one_transition() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");

        reduce_windows(
            &mut stack,
            WindowAction::UpdateRect {
                window_id: id("a"),
                rect: WindowRect::new(10, 20, 500, 350),
            },
        );

        let record = window(&stack, "a");
        assert_eq!(record.rect, WindowRect::new(10, 20, 500, 350));
        assert_eq!(record.z_index, 101);
        assert!(record.is_focused);
    }

    #[test]
    fn reopening_minimized_window_restores_instead_of_duplicating() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");
        reduce_windows(&mut stack, WindowAction::MinimizeWindow { window_id: id("a") });

        let effects = open(&mut stack, "a");

        assert_eq!(effects, vec![WindowEffect::FocusWindowInput(id("a"))]);
        assert_eq!(stack.len(), 1);
        let record = window(&stack, "a");
        assert!(!record.minimized);
        assert!(record.is_focused);
        assert_eq!(record.z_index, 102);
    }

    #[test]
    fn reopening_visible_window_keeps_its_geometry() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");
        reduce_windows(
            &mut stack,
            WindowAction::UpdatePosition {
                window_id: id("a"),
                x: 70,
                y: 90,
            },
        );
        open(&mut stack, "b");

        reduce_windows(
            &mut stack,
            WindowAction::OpenWindow(
                OpenWindowRequest::new("a", "ignored").with_rect(WindowRect::new(1, 2, 3, 4)),
            ),
        );

        let record = window(&stack, "a");
        assert_eq!(record.rect, WindowRect::new(70, 90, 400, 300));
        assert_eq!(record.title, "a");
        assert!(record.is_focused);
        assert_eq!(record.z_index, 103);
    }

    #[test]
    fn opening_with_minimized_flag_still_lands_focused() {
        let mut stack = WindowStack::default();
        reduce_windows(
            &mut stack,
            WindowAction::OpenWindow(OpenWindowRequest::new("a", "A").minimized(true)),
        );

        let record = window(&stack, "a");
        assert!(!record.minimized);
        assert!(record.is_focused);
        assert!(stack_invariants_hold(&stack));
    }

    #[test]
    fn minimize_clears_focus_and_leaves_others_alone() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");
        open(&mut stack, "b");
        let b_before = window(&stack, "b").clone();

        reduce_windows(&mut stack, WindowAction::MinimizeWindow { window_id: id("a") });

        assert!(window(&stack, "a").minimized);
        assert!(!window(&stack, "a").is_focused);
        assert_eq!(window(&stack, "b"), &b_before);
    }

    #[test]
    fn minimizing_focused_window_leaves_no_focus() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");
        open(&mut stack, "b");

        reduce_windows(&mut stack, WindowAction::MinimizeWindow { window_id: id("b") });

        assert_eq!(stack.focused_window_id(), None);
    }

    #[test]
    fn maximize_toggles_without_touching_focus_or_stack() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");
        open(&mut stack, "b");

        reduce_windows(&mut stack, WindowAction::MaximizeWindow { window_id: id("a") });
        assert!(window(&stack, "a").maximized);
        assert!(!window(&stack, "a").is_focused);
        assert_eq!(window(&stack, "a").z_index, 101);
        assert_eq!(stack.top_z_index, 102);

        reduce_windows(&mut stack, WindowAction::MaximizeWindow { window_id: id("a") });
        assert!(!window(&stack, "a").maximized);
    }

    #[test]
    fn restore_unminimizes_and_keeps_maximized_flag() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");
        reduce_windows(&mut stack, WindowAction::MaximizeWindow { window_id: id("a") });
        reduce_windows(&mut stack, WindowAction::MinimizeWindow { window_id: id("a") });
        open(&mut stack, "b");

        reduce_windows(&mut stack, WindowAction::RestoreWindow { window_id: id("a") });

        let record = window(&stack, "a");
        assert!(!record.minimized);
        assert!(record.maximized);
        assert!(record.is_focused);
        assert_eq!(record.z_index, 103);
        assert!(!window(&stack, "b").is_focused);
    }

    #[test]
    fn close_drops_record_without_refocusing() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");
        open(&mut stack, "b");

        let effects = reduce_windows(&mut stack, WindowAction::CloseWindow { window_id: id("b") });

        assert_eq!(effects, vec![WindowEffect::WindowClosed(id("b"))]);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.focused_window_id(), None);
        assert_eq!(stack.top_z_index, 102);
    }

    #[test]
    fn geometry_updates_do_not_touch_stack_or_focus() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");

        reduce_windows(
            &mut stack,
            WindowAction::UpdatePosition {
                window_id: id("a"),
                x: 50,
                y: 80,
            },
        );
        reduce_windows(
            &mut stack,
            WindowAction::UpdateSize {
                window_id: id("a"),
                w: 640,
                h: 480,
            },
        );

        let record = window(&stack, "a");
        assert_eq!(record.rect, WindowRect::new(50, 80, 640, 480));
        assert_eq!(record.z_index, 101);
        assert!(record.is_focused);
    }

    #[test]
    fn actions_on_unknown_window_are_silent_noops() {
        let mut stack = WindowStack::default();
        open(&mut stack, "a");
        let before = stack.clone();

        for action in [
            WindowAction::CloseWindow { window_id: id("x") },
            WindowAction::FocusWindow { window_id: id("x") },
            WindowAction::MinimizeWindow { window_id: id("x") },
            WindowAction::MaximizeWindow { window_id: id("x") },
            WindowAction::RestoreWindow { window_id: id("x") },
            WindowAction::UpdatePosition {
                window_id: id("x"),
                x: 1,
                y: 1,
            },
            WindowAction::UpdateSize {
                window_id: id("x"),
                w: 1,
                h: 1,
            },
            WindowAction::UpdateRect {
                window_id: id("x"),
                rect: WindowRect::default(),
            },
        ] {
            assert!(reduce_windows(&mut stack, action).is_empty());
        }

        assert_eq!(stack, before);
    }
}
