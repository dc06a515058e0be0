use folio_protocol::{DomCommand, Target};

use crate::outbox::Outbox;
use crate::schedule::TaskKey;

const ACTIVE: &str = "active";
const OPEN_ANIMATION: &str = "slideDown 0.3s ease-out forwards";
const CLOSE_ANIMATION: &str = "slideUp 0.3s ease-out forwards";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
    /// Exit animation running; becomes `Closed` when the settle task fires.
    Closing,
}

/// Mobile navigation drawer.
///
/// ```text
/// Closed --open/toggle--> Open --close/toggle--> Closing --settle--> Closed
///                          ^                        |
///                          +-------open/toggle------+
/// ```
///
/// Body scrolling is locked on entering `Open` and released on reaching
/// `Closed`.
#[derive(Debug, Clone)]
pub struct MobileMenu {
    state: MenuState,
    enabled: bool,
    close_ms: f64,
}

impl MobileMenu {
    /// A disabled menu (page without toggle or menu element) ignores every
    /// request.
    pub fn new(enabled: bool, close_ms: f64) -> Self {
        Self {
            state: MenuState::Closed,
            enabled,
            close_ms,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Toggle button: close when open, otherwise open. A toggle during the
    /// exit animation reopens.
    pub fn toggle(&mut self, out: &mut Outbox<'_>) {
        match self.state {
            MenuState::Open => {
                self.close(out);
            }
            MenuState::Closed | MenuState::Closing => self.open(out),
        }
    }

    pub fn open(&mut self, out: &mut Outbox<'_>) {
        if !self.enabled || self.state == MenuState::Open {
            return;
        }
        if self.state == MenuState::Closing {
            out.cancel(TaskKey::MenuSettle);
            tracing::debug!("menu reopened during close animation");
        }
        self.state = MenuState::Open;
        out.push(DomCommand::add_class(Target::NavMenu, ACTIVE));
        out.push(DomCommand::style(Target::NavMenu, "animation", OPEN_ANIMATION));
        out.push(DomCommand::add_class(Target::MenuToggle, ACTIVE));
        out.push(DomCommand::style(Target::Body, "overflow", "hidden"));
    }

    /// Start the exit animation. Returns `false` (and does nothing) unless
    /// the menu is open.
    pub fn close(&mut self, out: &mut Outbox<'_>) -> bool {
        if !self.enabled || self.state != MenuState::Open {
            return false;
        }
        self.state = MenuState::Closing;
        out.push(DomCommand::style(Target::NavMenu, "animation", CLOSE_ANIMATION));
        out.push(DomCommand::remove_class(Target::MenuToggle, ACTIVE));
        out.after(self.close_ms, TaskKey::MenuSettle);
        true
    }

    /// The exit animation finished.
    pub fn settle(&mut self, out: &mut Outbox<'_>) {
        if self.state != MenuState::Closing {
            return;
        }
        self.state = MenuState::Closed;
        out.push(DomCommand::remove_class(Target::NavMenu, ACTIVE));
        out.push(DomCommand::clear_style(Target::NavMenu, "animation"));
        out.push(DomCommand::clear_style(Target::Body, "overflow"));
    }
}
