use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::target::{ObserverKind, Target};

/// Text carried by commands. Most of it is static (class names, CSS
/// properties), the rest is computed per event.
pub type Text = Cow<'static, str>;

/// A single, stateless DOM mutation.
///
/// The core emits a `Vec<DomCommand>` for each event or timer. Hosts apply
/// the list sequentially and each command carries all the data it needs.
/// Commands aimed at a target the host never found are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DomCommand {
    AddClass { target: Target, class: Text },

    RemoveClass { target: Target, class: Text },

    /// Set an inline style property. An empty value removes it.
    SetStyle {
        target: Target,
        property: Text,
        value: Text,
    },

    SetAttribute {
        target: Target,
        name: Text,
        value: Text,
    },

    /// Replace `className`.
    SetClassName { target: Target, class_name: Text },

    SetText { target: Target, text: Text },

    AppendText { target: Target, text: Text },

    SetInnerHtml { target: Target, html: Text },

    SetDisabled { target: Target, disabled: bool },

    /// Create an element, register it under `target` and append it to
    /// `parent`.
    Spawn {
        target: Target,
        parent: Target,
        tag: Text,
        class: Text,
        css: Option<Text>,
        html: Option<Text>,
    },

    /// Detach an element and forget it.
    Remove { target: Target },

    /// `window.scrollTo`.
    ScrollTo { top: f64, smooth: bool },

    /// Start an intersection observer over every element of `observer`'s
    /// family.
    Observe {
        observer: ObserverKind,
        threshold: f64,
        root_margin: Text,
    },

    /// Stop observing one element.
    Unobserve {
        observer: ObserverKind,
        target: Target,
    },

    /// Persist a key in `localStorage`.
    StorePreference { key: Text, value: Text },

    /// `form.reset()` on the contact form.
    ResetForm,

    /// Append a `<style>` element to `<head>` unless one with `id` exists.
    InjectStyles { id: Text, css: Text },
}

impl DomCommand {
    /// The element the command mutates, if it addresses one.
    pub fn target(&self) -> Option<Target> {
        match self {
            DomCommand::AddClass { target, .. }
            | DomCommand::RemoveClass { target, .. }
            | DomCommand::SetStyle { target, .. }
            | DomCommand::SetAttribute { target, .. }
            | DomCommand::SetClassName { target, .. }
            | DomCommand::SetText { target, .. }
            | DomCommand::AppendText { target, .. }
            | DomCommand::SetInnerHtml { target, .. }
            | DomCommand::SetDisabled { target, .. }
            | DomCommand::Spawn { target, .. }
            | DomCommand::Remove { target }
            | DomCommand::Unobserve { target, .. } => Some(*target),
            DomCommand::ResetForm => Some(Target::ContactForm),
            DomCommand::InjectStyles { .. } => Some(Target::DynamicStyles),
            DomCommand::ScrollTo { .. }
            | DomCommand::Observe { .. }
            | DomCommand::StorePreference { .. } => None,
        }
    }

    pub fn add_class(target: Target, class: impl Into<Text>) -> Self {
        DomCommand::AddClass {
            target,
            class: class.into(),
        }
    }

    pub fn remove_class(target: Target, class: impl Into<Text>) -> Self {
        DomCommand::RemoveClass {
            target,
            class: class.into(),
        }
    }

    pub fn style(target: Target, property: impl Into<Text>, value: impl Into<Text>) -> Self {
        DomCommand::SetStyle {
            target,
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn clear_style(target: Target, property: impl Into<Text>) -> Self {
        DomCommand::SetStyle {
            target,
            property: property.into(),
            value: Cow::Borrowed(""),
        }
    }

    pub fn text(target: Target, text: impl Into<Text>) -> Self {
        DomCommand::SetText {
            target,
            text: text.into(),
        }
    }
}
