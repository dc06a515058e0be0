use folio_protocol::{DomCommand, PointerInfo, Target};

use crate::outbox::Outbox;
use crate::schedule::TaskKey;

/// Click feedback: a circle that grows out of the click point inside the
/// clicked element and is removed once its animation ends.
#[derive(Debug, Clone)]
pub struct Ripples {
    next_id: u64,
    live: Vec<u64>,
    duration_ms: f64,
}

impl Ripples {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            next_id: 0,
            live: Vec::new(),
            duration_ms,
        }
    }

    pub fn live(&self) -> &[u64] {
        &self.live
    }

    /// Spawn a ripple in `host` centered on the click. Returns its id.
    pub fn spawn(&mut self, host: Target, pointer: PointerInfo, out: &mut Outbox<'_>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let rect = pointer.rect;
        let size = rect.w.max(rect.h);
        let x = pointer.click.x - rect.x - size / 2.0;
        let y = pointer.click.y - rect.y - size / 2.0;
        let css = format!(
            "width: {}; height: {}; left: {}; top: {};",
            super::px(size),
            super::px(size),
            super::px(x),
            super::px(y)
        );

        out.push(DomCommand::Spawn {
            target: Target::Ripple(id),
            parent: host,
            tag: "span".into(),
            class: "ripple".into(),
            css: Some(css.into()),
            html: None,
        });
        out.after(self.duration_ms, TaskKey::RippleExpire(id));
        self.live.push(id);
        id
    }

    pub fn expire(&mut self, id: u64, out: &mut Outbox<'_>) {
        if let Some(pos) = self.live.iter().position(|&r| r == id) {
            self.live.swap_remove(pos);
            out.push(DomCommand::Remove {
                target: Target::Ripple(id),
            });
        }
    }
}
