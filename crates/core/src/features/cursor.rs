use folio_protocol::{DomCommand, Point, Target};

use crate::outbox::Outbox;
use crate::schedule::TaskKey;

/// Ring-and-dot cursor that replaces the pointer on wide viewports.
#[derive(Debug, Clone)]
pub struct CustomCursor {
    created: bool,
    min_width: f64,
    settle_ms: f64,
}

impl CustomCursor {
    pub fn new(min_width: f64, settle_ms: f64) -> Self {
        Self {
            created: false,
            min_width,
            settle_ms,
        }
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Create the cursor elements if the viewport is wide enough. Never
    /// creates a second pair.
    pub fn maybe_create(&mut self, viewport_width: f64, out: &mut Outbox<'_>) {
        if self.created || viewport_width <= self.min_width {
            return;
        }
        self.created = true;
        for (target, class) in [(Target::Cursor, "custom-cursor"), (Target::CursorDot, "cursor-dot")] {
            out.push(DomCommand::Spawn {
                target,
                parent: Target::Body,
                tag: "div".into(),
                class: class.into(),
                css: None,
                html: None,
            });
        }
        tracing::debug!(viewport_width, "custom cursor created");
    }

    pub fn on_move(&self, position: Point, out: &mut Outbox<'_>) {
        if !self.created {
            return;
        }
        let left = super::px(position.x);
        let top = super::px(position.y);
        for target in [Target::Cursor, Target::CursorDot] {
            out.push(DomCommand::style(target, "left", left.clone()));
            out.push(DomCommand::style(target, "top", top.clone()));
        }
    }

    pub fn on_hover(&self, entering: bool, out: &mut Outbox<'_>) {
        if !self.created {
            return;
        }
        out.push(if entering {
            DomCommand::add_class(Target::Cursor, "cursor-hover")
        } else {
            DomCommand::remove_class(Target::Cursor, "cursor-hover")
        });
    }

    /// Debounce a resize burst; the page rechecks the width when
    /// [`TaskKey::ResizeSettled`] fires.
    pub fn on_resize(&self, out: &mut Outbox<'_>) {
        out.after(self.settle_ms, TaskKey::ResizeSettled);
    }
}
