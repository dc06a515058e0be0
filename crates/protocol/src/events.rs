use serde::{Deserialize, Serialize};

use crate::target::{FormField, ObserverKind, Target};
use crate::types::{Point, PointerInfo};

/// A browser notification, reduced to the data the core needs.
///
/// Hosts translate DOM events into these; the core never inspects live
/// elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageEvent {
    /// `window` scrolled; `scroll_y` is `window.scrollY`.
    Scroll { scroll_y: f64 },

    Resize { width: f64, height: f64 },

    /// `window` `load` fired, or had already fired when the host started.
    WindowLoaded,

    /// One `IntersectionObserver` callback batch, entries in callback order.
    Intersections {
        observer: ObserverKind,
        entries: Vec<IntersectionEntry>,
    },

    /// An in-page anchor was clicked. Default navigation has already been
    /// prevented by the host.
    LinkClicked {
        source: Target,
        href: String,
        pointer: PointerInfo,
    },

    MenuToggleClicked { pointer: PointerInfo },

    ThemeToggleClicked { pointer: PointerInfo },

    /// A `.btn`, `.social-link` or `.project-link` was clicked.
    ElementClicked { source: Target, pointer: PointerInfo },

    /// Any click that bubbled to the document.
    DocumentClicked { inside_nav: bool },

    /// `KeyboardEvent.key`
    KeyDown { key: String },

    MouseDown,

    MouseMove { position: Point },

    PointerEnter { target: Target },

    PointerLeave { target: Target },

    FieldInput { field: FormField, value: String },

    FieldBlur { field: FormField, value: String },

    FieldFocus { field: FormField },

    FormSubmitted { values: FormValues },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub target: Target,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn entering(target: Target) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }

    pub fn leaving(target: Target) -> Self {
        Self {
            target,
            is_intersecting: false,
        }
    }
}

/// Snapshot of the contact form inputs at submit time. Fields the page does
/// not contain are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FormValues {
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Subject => self.subject.as_deref(),
            FormField::Message => self.message.as_deref(),
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = Some(value.into());
    }
}
