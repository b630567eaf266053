//! Single- versus double-click disambiguation for desktop icons.
//!
//! A click on a target arms a timer; a second click on the same target before the deadline is a
//! double click, otherwise the pending click resolves as a single click once the deadline passes
//! (observed through [`ClickDisambiguator::poll`]) or another target is clicked. Time is passed
//! in by the caller.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickState<T> {
    Idle,
    AwaitingSecondClick { target: T, deadline: Instant },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome<T> {
    Single(T),
    Double(T),
}

#[derive(Debug, Clone)]
pub struct ClickDisambiguator<T> {
    window: Duration,
    state: ClickState<T>,
}

impl<T: PartialEq> ClickDisambiguator<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: ClickState::Idle,
        }
    }

    pub fn state(&self) -> &ClickState<T> {
        &self.state
    }

    /// When the pending click resolves, if one is pending.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.state {
            ClickState::Idle => None,
            ClickState::AwaitingSecondClick { deadline, .. } => Some(*deadline),
        }
    }

    /// Feeds a click and returns whatever outcome it resolves.
    ///
    /// A click that does not complete a double click may still flush the previously pending
    /// click as [`ClickOutcome::Single`] before arming a new wait.
    pub fn on_click(&mut self, target: T, now: Instant) -> Option<ClickOutcome<T>> {
        match std::mem::replace(&mut self.state, ClickState::Idle) {
            ClickState::AwaitingSecondClick {
                target: pending,
                deadline,
            } if pending == target && now < deadline => Some(ClickOutcome::Double(target)),
            ClickState::AwaitingSecondClick {
                target: pending, ..
            } => {
                self.arm(target, now);
                Some(ClickOutcome::Single(pending))
            }
            ClickState::Idle => {
                self.arm(target, now);
                None
            }
        }
    }

    /// Resolves a pending click as single once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<ClickOutcome<T>> {
        let expired = matches!(
            &self.state,
            ClickState::AwaitingSecondClick { deadline, .. } if now >= *deadline
        );
        if !expired {
            return None;
        }
        match std::mem::replace(&mut self.state, ClickState::Idle) {
            ClickState::AwaitingSecondClick { target, .. } => Some(ClickOutcome::Single(target)),
            ClickState::Idle => None,
        }
    }

    fn arm(&mut self, target: T, now: Instant) {
        self.state = ClickState::AwaitingSecondClick {
            target,
            deadline: now + self.window,
        };
    }
}
