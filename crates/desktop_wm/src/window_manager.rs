//! Shared window-manager transition helpers used by the window reducer.

use crate::model::{WindowId, WindowRecord, WindowStack};

/// Issues the next stacking value. Every call returns a value strictly greater than any
/// previously issued by this stack.
///
/// # Panics
///
/// Panics once the `u64` stacking space is exhausted, since reusing a value would break the
/// stacking order.
pub fn allocate_z_index(stack: &mut WindowStack) -> u64 {
    stack.top_z_index = stack
        .top_z_index
        .checked_add(1)
        .expect("window z-index space exhausted");
    stack.top_z_index
}

/// Focuses and raises `window_id`: un-minimizes it, assigns a fresh top z-index and clears
/// focus on every other window in the same pass.
///
/// Returns `false` (leaving `stack` untouched) when the window is not present.
pub fn focus_window_internal(stack: &mut WindowStack, window_id: &WindowId) -> bool {
    if !stack.contains(window_id) {
        return false;
    }

    let z_index = allocate_z_index(stack);
    for window in &mut stack.windows {
        if &window.id == window_id {
            window.z_index = z_index;
            window.is_focused = true;
            window.minimized = false;
        } else {
            window.is_focused = false;
        }
    }
    true
}

pub fn find_window_mut<'a>(
    stack: &'a mut WindowStack,
    window_id: &WindowId,
) -> Option<&'a mut WindowRecord> {
    stack.windows.iter_mut().find(|w| &w.id == window_id)
}

/// Checks the registry invariants: unique ids, at most one focused window, no focused
/// minimized window, and no z-index above the high-water mark.
pub fn stack_invariants_hold(stack: &WindowStack) -> bool {
    let mut seen = std::collections::HashSet::new();
    let unique = stack.windows.iter().all(|w| seen.insert(&w.id));
    let focused = stack.windows.iter().filter(|w| w.is_focused).count();
    let minimized_unfocused = stack.windows.iter().all(|w| !(w.minimized && w.is_focused));
    let bounded = stack.windows.iter().all(|w| w.z_index <= stack.top_z_index);
    unique && focused <= 1 && minimized_unfocused && bounded
}
