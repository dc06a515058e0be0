use folio_protocol::{DomCommand, Target};

use super::scroll::ScrollSample;

const SHOWN_TRANSFORM: &str = "translateY(0)";
const HIDDEN_TRANSFORM: &str = "translateY(-100%)";
const OPAQUE_BACKGROUND: &str = "rgba(15, 23, 42, 0.95)";
const TRANSLUCENT_BACKGROUND: &str = "rgba(15, 23, 42, 0.8)";
const OPAQUE_SHADOW: &str = "0 10px 30px rgba(0, 0, 0, 0.3)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPosition {
    Shown,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSurface {
    Translucent,
    Opaque,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    pub position: HeaderPosition,
    pub surface: HeaderSurface,
}

/// Derives the header's look from the latest scroll sample. Stateless: the
/// two decisions depend on nothing but the sample.
#[derive(Debug, Clone, Copy)]
pub struct HeaderChrome {
    hide_after: f64,
    opaque_after: f64,
}

impl HeaderChrome {
    pub fn new(hide_after: f64, opaque_after: f64) -> Self {
        Self {
            hide_after,
            opaque_after,
        }
    }

    pub fn evaluate(&self, sample: ScrollSample) -> HeaderState {
        let position = if sample.delta > 0.0 && sample.offset > self.hide_after {
            HeaderPosition::Hidden
        } else {
            HeaderPosition::Shown
        };
        let surface = if sample.offset > self.opaque_after {
            HeaderSurface::Opaque
        } else {
            HeaderSurface::Translucent
        };
        HeaderState { position, surface }
    }

    /// Inline styles for `state`. Both decisions are always written.
    pub fn commands(state: HeaderState) -> [DomCommand; 3] {
        let transform = match state.position {
            HeaderPosition::Shown => SHOWN_TRANSFORM,
            HeaderPosition::Hidden => HIDDEN_TRANSFORM,
        };
        let (background, shadow) = match state.surface {
            HeaderSurface::Opaque => (OPAQUE_BACKGROUND, OPAQUE_SHADOW),
            HeaderSurface::Translucent => (TRANSLUCENT_BACKGROUND, "none"),
        };
        [
            DomCommand::style(Target::Header, "transform", transform),
            DomCommand::style(Target::Header, "background", background),
            DomCommand::style(Target::Header, "box-shadow", shadow),
        ]
    }
}
