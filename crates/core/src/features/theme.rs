use folio_protocol::{ColorScheme, DomCommand, Target};

use crate::outbox::Outbox;
use crate::schedule::TaskKey;

pub const STORAGE_KEY: &str = "portfolio-theme";
const SCHEME_ATTRIBUTE: &str = "data-color-scheme";
const BODY_TRANSITION: &str = "all 0.5s ease";

/// Dark/light switch persisted under [`STORAGE_KEY`].
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    enabled: bool,
    scheme: ColorScheme,
    transition_ms: f64,
}

impl ThemeToggle {
    pub fn new(enabled: bool, transition_ms: f64) -> Self {
        Self {
            enabled,
            scheme: ColorScheme::default(),
            transition_ms,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Apply the stored preference, or the default scheme when nothing
    /// usable was stored. Pages without a toggle keep their markup as is.
    pub fn start(&mut self, stored: Option<&str>, out: &mut Outbox<'_>) {
        if !self.enabled {
            return;
        }
        self.scheme = stored.and_then(ColorScheme::parse).unwrap_or_default();
        self.apply(out);
    }

    /// Flip the scheme and restyle the page.
    pub fn toggle(&mut self, out: &mut Outbox<'_>) {
        if !self.enabled {
            return;
        }
        self.scheme = self.scheme.toggled();
        tracing::debug!(scheme = self.scheme.as_str(), "theme toggled");
        self.apply(out);
    }

    /// Persist the current scheme.
    pub fn persist(&self, out: &mut Outbox<'_>) {
        if !self.enabled {
            return;
        }
        out.push(DomCommand::StorePreference {
            key: STORAGE_KEY.into(),
            value: self.scheme.as_str().into(),
        });
    }

    pub fn end_transition(&self, out: &mut Outbox<'_>) {
        out.push(DomCommand::clear_style(Target::Body, "transition"));
    }

    fn apply(&self, out: &mut Outbox<'_>) {
        out.push(DomCommand::SetAttribute {
            target: Target::Root,
            name: SCHEME_ATTRIBUTE.into(),
            value: self.scheme.as_str().into(),
        });
        out.push(DomCommand::SetClassName {
            target: Target::ThemeIcon,
            class_name: self.scheme.icon_class().into(),
        });
        out.push(DomCommand::style(Target::Body, "transition", BODY_TRANSITION));
        out.after(self.transition_ms, TaskKey::ThemeTransitionEnd);
    }
}
