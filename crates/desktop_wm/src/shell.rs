//! Desktop shell: icons that open windows on double click.

use std::rc::Rc;
use std::time::Instant;

use crate::{
    click::{ClickDisambiguator, ClickOutcome},
    config::WindowManagerConfig,
    model::{OpenWindowRequest, WindowStack},
    runtime::WindowController,
};

#[derive(Debug, Clone, PartialEq)]
/// A desktop icon and the window it launches.
pub struct DesktopIcon {
    pub id: String,
    pub label: String,
    pub request: OpenWindowRequest,
}

impl DesktopIcon {
    pub fn new(id: impl Into<String>, label: impl Into<String>, request: OpenWindowRequest) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            request,
        }
    }
}

#[derive(Debug)]
pub struct DesktopShell {
    controller: WindowController,
    icons: Vec<DesktopIcon>,
    clicks: ClickDisambiguator<String>,
    selected_icon: Option<String>,
}

impl DesktopShell {
    pub fn new(
        controller: WindowController,
        icons: Vec<DesktopIcon>,
        config: &WindowManagerConfig,
    ) -> Self {
        Self {
            controller,
            icons,
            clicks: ClickDisambiguator::new(config.double_click_window()),
            selected_icon: None,
        }
    }

    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    pub fn selected_icon(&self) -> Option<&str> {
        self.selected_icon.as_deref()
    }

    pub fn controller(&self) -> &WindowController {
        &self.controller
    }

    /// When the shell next needs [`tick`](Self::tick) to resolve a pending click.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.clicks.deadline()
    }

    /// Handles a pointer click on an icon. Returns the new snapshot when a window was opened.
    pub fn click_icon(&mut self, icon_id: &str, now: Instant) -> Option<Rc<WindowStack>> {
        if !self.icons.iter().any(|icon| icon.id == icon_id) {
            tracing::warn!(icon_id, "click on unknown desktop icon");
            return None;
        }
        let outcome = self.clicks.on_click(icon_id.to_string(), now)?;
        self.apply(outcome)
    }

    /// Resolves a pending single click once its timer has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<Rc<WindowStack>> {
        let outcome = self.clicks.poll(now)?;
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: ClickOutcome<String>) -> Option<Rc<WindowStack>> {
        match outcome {
            ClickOutcome::Single(icon_id) => {
                self.selected_icon = Some(icon_id);
                None
            }
            ClickOutcome::Double(icon_id) => {
                let request = self
                    .icons
                    .iter()
                    .find(|icon| icon.id == icon_id)
                    .map(|icon| icon.request.clone())?;
                tracing::debug!(
                    icon_id = %icon_id,
                    window_id = %request.id,
                    "launching from desktop icon"
                );
                self.selected_icon = Some(icon_id);
                Some(self.controller.open(request))
            }
        }
    }
}
