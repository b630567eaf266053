//! Session-scoped owner of the window registry.
//!
//! [`WindowManager`] is the single writer of window state. Each mutation runs the reducer against
//! a copy of the current [`WindowStack`] and commits a new `Rc` only when something changed, so
//! consumers can compare snapshots with `Rc::ptr_eq` to decide whether to re-render. Consumers
//! hold a [`WindowController`] handed to them explicitly and may [`subscribe`] to receive every
//! committed snapshot.
//!
//! [`subscribe`]: WindowController::subscribe

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    config::WindowManagerConfig,
    model::{OpenWindowRequest, WindowId, WindowRect, WindowStack},
    reducer::{reduce_windows, WindowAction, WindowEffect},
    window_manager::stack_invariants_hold,
};

#[derive(Debug, Clone, PartialEq)]
/// A committed registry change delivered to subscribers.
pub struct WindowStackUpdate {
    /// Snapshot after the change.
    pub stack: Rc<WindowStack>,
    /// Effects emitted by the transition that produced `stack`.
    pub effects: Vec<WindowEffect>,
}

#[derive(Debug)]
/// Owned registry state plus its change subscribers.
pub struct WindowManager {
    stack: Rc<WindowStack>,
    subscribers: Vec<UnboundedSender<WindowStackUpdate>>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(&WindowManagerConfig::default())
    }
}

impl WindowManager {
    pub fn new(config: &WindowManagerConfig) -> Self {
        Self {
            stack: Rc::new(WindowStack::with_base_z_index(config.base_z_index)),
            subscribers: Vec::new(),
        }
    }

    /// Current immutable snapshot.
    pub fn snapshot(&self) -> Rc<WindowStack> {
        Rc::clone(&self.stack)
    }

    pub fn top_z_index(&self) -> u64 {
        self.stack.top_z_index
    }

    /// Registers a subscriber that receives every committed [`WindowStackUpdate`].
    ///
    /// Dropping the receiver unsubscribes; the sender is pruned on the next commit.
    pub fn subscribe(&mut self) -> UnboundedReceiver<WindowStackUpdate> {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Applies `action` and returns the resulting snapshot.
    ///
    /// Actions naming an unknown window return the previous snapshot unchanged (pointer-equal)
    /// and notify nobody.
    pub fn dispatch(&mut self, action: WindowAction) -> Rc<WindowStack> {
        let name = action.name();
        let window_id = action.window_id().clone();
        let is_open = matches!(action, WindowAction::OpenWindow(_));
        if !is_open && !self.stack.contains(&window_id) {
            tracing::trace!(action = name, %window_id, "ignoring action for unknown window");
            return self.snapshot();
        }

        let mut next = (*self.stack).clone();
        let effects = reduce_windows(&mut next, action);
        if next == *self.stack {
            tracing::trace!(action = name, %window_id, "action left registry unchanged");
            return self.snapshot();
        }
        debug_assert!(stack_invariants_hold(&next), "window registry invariant broken by {name}");

        self.stack = Rc::new(next);
        tracing::debug!(
            action = name,
            %window_id,
            top_z_index = self.stack.top_z_index,
            windows = self.stack.len(),
            "window registry updated"
        );
        self.notify(effects);
        self.snapshot()
    }

    fn notify(&mut self, effects: Vec<WindowEffect>) {
        if self.subscribers.is_empty() {
            return;
        }
        let update = WindowStackUpdate {
            stack: Rc::clone(&self.stack),
            effects,
        };
        let before = self.subscribers.len();
        self.subscribers
            .retain(|tx| tx.unbounded_send(update.clone()).is_ok());
        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            tracing::warn!(dropped, "pruned closed window registry subscribers");
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Cloneable capability handle to one session's [`WindowManager`].
///
/// Every operation runs to completion before returning, in call order. Handles are confined to
/// the thread that created them.
///
/// # Panics
///
/// Operations panic if invoked while another operation on the same registry is still on the
/// stack (re-entrant dispatch), since that would observe a half-applied transition.
pub struct WindowController {
    inner: Rc<RefCell<WindowManager>>,
}

impl WindowController {
    pub fn new(config: &WindowManagerConfig) -> Self {
        Self::from_manager(WindowManager::new(config))
    }

    pub fn from_manager(manager: WindowManager) -> Self {
        Self {
            inner: Rc::new(RefCell::new(manager)),
        }
    }

    /// Dispatches a reducer action through the shared registry.
    pub fn dispatch_action(&self, action: WindowAction) -> Rc<WindowStack> {
        self.inner.borrow_mut().dispatch(action)
    }

    pub fn snapshot(&self) -> Rc<WindowStack> {
        self.inner.borrow().snapshot()
    }

    pub fn top_z_index(&self) -> u64 {
        self.inner.borrow().top_z_index()
    }

    pub fn subscribe(&self) -> UnboundedReceiver<WindowStackUpdate> {
        self.inner.borrow_mut().subscribe()
    }

    /// Opens a window, or brings the window already carrying `req.id` to the front (restoring
    /// it when minimized).
    pub fn open(&self, req: OpenWindowRequest) -> Rc<WindowStack> {
        self.dispatch_action(WindowAction::OpenWindow(req))
    }

    /// Removes a window. Focus is not handed to another window.
    pub fn close(&self, window_id: &WindowId) -> Rc<WindowStack> {
        self.dispatch_action(WindowAction::CloseWindow {
            window_id: window_id.clone(),
        })
    }

    pub fn minimize(&self, window_id: &WindowId) -> Rc<WindowStack> {
        self.dispatch_action(WindowAction::MinimizeWindow {
            window_id: window_id.clone(),
        })
    }

    /// Toggles the maximized flag.
    pub fn maximize(&self, window_id: &WindowId) -> Rc<WindowStack> {
        self.dispatch_action(WindowAction::MaximizeWindow {
            window_id: window_id.clone(),
        })
    }

    pub fn restore(&self, window_id: &WindowId) -> Rc<WindowStack> {
        self.dispatch_action(WindowAction::RestoreWindow {
            window_id: window_id.clone(),
        })
    }

    pub fn focus(&self, window_id: &WindowId) -> Rc<WindowStack> {
        self.dispatch_action(WindowAction::FocusWindow {
            window_id: window_id.clone(),
        })
    }

    pub fn update_position(&self, window_id: &WindowId, x: i32, y: i32) -> Rc<WindowStack> {
        self.dispatch_action(WindowAction::UpdatePosition {
            window_id: window_id.clone(),
            x,
            y,
        })
    }

    pub fn update_size(&self, window_id: &WindowId, w: i32, h: i32) -> Rc<WindowStack> {
        self.dispatch_action(WindowAction::UpdateSize {
            window_id: window_id.clone(),
            w,
            h,
        })
    }

    /// Moves and resizes a window in a single commit.
    pub fn set_rect(&self, window_id: &WindowId, rect: WindowRect) -> Rc<WindowStack> {
        self.dispatch_action(WindowAction::UpdateRect {
            window_id: window_id.clone(),
            rect,
        })
    }
}
