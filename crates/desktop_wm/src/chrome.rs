//! Pointer-driven move and resize sessions for window chrome.
//!
//! Sessions record where the pointer and window started and translate later pointer positions
//! into `update_position` / `set_rect` calls, one commit per pointer event. Beginning a session
//! focuses the window.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::{
    model::{WindowId, WindowRect, WindowStack},
    runtime::WindowController,
};

/// Minimum width a resize gesture may shrink a window to.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Minimum height a resize gesture may shrink a window to.
pub const MIN_WINDOW_HEIGHT: i32 = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Gesture {
    Move,
    Resize(ResizeEdge),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeSession {
    window_id: WindowId,
    gesture: Gesture,
    pointer_start: PointerPosition,
    rect_start: WindowRect,
}

impl ChromeSession {
    /// Starts dragging the title bar of `window_id`. Returns `None` for unknown or maximized
    /// windows.
    pub fn begin_move(
        controller: &WindowController,
        window_id: &WindowId,
        pointer: PointerPosition,
    ) -> Option<Self> {
        Self::begin(controller, window_id, Gesture::Move, pointer)
    }

    /// Starts dragging a border of `window_id`. Returns `None` for unknown or maximized
    /// windows.
    pub fn begin_resize(
        controller: &WindowController,
        window_id: &WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> Option<Self> {
        Self::begin(controller, window_id, Gesture::Resize(edge), pointer)
    }

    fn begin(
        controller: &WindowController,
        window_id: &WindowId,
        gesture: Gesture,
        pointer: PointerPosition,
    ) -> Option<Self> {
        let window = controller.snapshot().window(window_id)?.clone();
        if window.maximized {
            return None;
        }
        if !window.is_focused {
            controller.focus(window_id);
        }
        Some(Self {
            window_id: window.id,
            gesture,
            pointer_start: pointer,
            rect_start: window.rect,
        })
    }

    pub fn window_id(&self) -> &WindowId {
        &self.window_id
    }

    /// Applies the current pointer position to the window's geometry.
    pub fn update(&self, controller: &WindowController, pointer: PointerPosition) -> Rc<WindowStack> {
        let dx = pointer.x - self.pointer_start.x;
        let dy = pointer.y - self.pointer_start.y;
        match self.gesture {
            Gesture::Move => controller.update_position(
                &self.window_id,
                self.rect_start.x + dx,
                self.rect_start.y + dy,
            ),
            Gesture::Resize(edge) => controller.set_rect(
                &self.window_id,
                resize_rect(self.rect_start, edge, dx, dy),
            ),
        }
    }
}

/// Applies resize deltas for a given edge/corner drag, keeping the opposite edge anchored when
/// the minimum size is reached.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let (grow_left, grow_right, grow_top, grow_bottom) = match edge {
        ResizeEdge::North => (false, false, true, false),
        ResizeEdge::South => (false, false, false, true),
        ResizeEdge::East => (false, true, false, false),
        ResizeEdge::West => (true, false, false, false),
        ResizeEdge::NorthEast => (false, true, true, false),
        ResizeEdge::NorthWest => (true, false, true, false),
        ResizeEdge::SouthEast => (false, true, false, true),
        ResizeEdge::SouthWest => (true, false, false, true),
    };

    let mut rect = start;
    if grow_right {
        rect.w = (start.w + dx).max(MIN_WINDOW_WIDTH);
    }
    if grow_left {
        rect.w = (start.w - dx).max(MIN_WINDOW_WIDTH);
        rect.x = start.x + start.w - rect.w;
    }
    if grow_bottom {
        rect.h = (start.h + dy).max(MIN_WINDOW_HEIGHT);
    }
    if grow_top {
        rect.h = (start.h - dy).max(MIN_WINDOW_HEIGHT);
        rect.y = start.y + start.h - rect.h;
    }
    rect
}
