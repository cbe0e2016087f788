//! Presentation-layer view state
//!
//! All UI chrome state (mobile menu, open dropdown, lightbox image, login
//! modal, scroll flag) lives in one serializable value. Events produce a new
//! state; nothing else mutates it.

use serde::{Deserialize, Serialize};

/// Scroll offset (pixels) past which the navigation bar is compacted
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub menu_open: bool,
    /// Title of the navigation group whose dropdown is shown
    pub active_dropdown: Option<String>,
    /// Gallery image shown in the lightbox
    pub selected_image: Option<String>,
    pub login_open: bool,
    pub scrolled: bool,
}

/// Discrete transitions of the view state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViewEvent {
    ToggleMenu,
    /// Same title closes the dropdown; any other title switches to it
    ToggleDropdown(String),
    OpenLogin,
    CloseLogin,
    /// A verified login dismisses the modal
    LoginSucceeded,
    SelectImage(String),
    CloseImage,
    Scrolled(f64),
}

impl ViewState {
    pub fn apply(&self, event: &ViewEvent) -> Self {
        self.apply_with(event, DEFAULT_SCROLL_THRESHOLD)
    }

    pub fn apply_with(&self, event: &ViewEvent, scroll_threshold: f64) -> Self {
        let mut next = self.clone();
        match event {
            ViewEvent::ToggleMenu => next.menu_open = !self.menu_open,
            ViewEvent::ToggleDropdown(title) => {
                next.active_dropdown = if self.active_dropdown.as_deref() == Some(title.as_str()) {
                    None
                } else {
                    Some(title.clone())
                };
            }
            ViewEvent::OpenLogin => {
                next.menu_open = false;
                next.login_open = true;
            }
            ViewEvent::CloseLogin | ViewEvent::LoginSucceeded => next.login_open = false,
            ViewEvent::SelectImage(url) => next.selected_image = Some(url.clone()),
            ViewEvent::CloseImage => next.selected_image = None,
            ViewEvent::Scrolled(offset) => next.scrolled = *offset > scroll_threshold,
        }
        next
    }

    /// Apply a sequence of events in order
    pub fn replay<'a, I>(&self, events: I) -> Self
    where
        I: IntoIterator<Item = &'a ViewEvent>,
    {
        events.into_iter().fold(self.clone(), |state, event| state.apply(event))
    }
}
