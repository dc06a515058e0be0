use folio_protocol::{DomCommand, IntersectionEntry, ObserverKind, Target};

use crate::outbox::Outbox;

/// `1 - (1 - t)^3`, clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy)]
struct Run {
    index: usize,
    target: i64,
    start_ms: f64,
    shown: Option<i64>,
}

/// Stat counters that count up from zero the first time they scroll into
/// view. Driven by animation frames while any run is active.
#[derive(Debug, Clone)]
pub struct Counters {
    targets: Vec<Option<i64>>,
    started: Vec<bool>,
    runs: Vec<Run>,
    duration_ms: f64,
    threshold: f64,
}

impl Counters {
    pub fn new(targets: Vec<Option<i64>>, duration_ms: f64, threshold: f64) -> Self {
        let started = vec![false; targets.len()];
        Self {
            targets,
            started,
            runs: Vec::new(),
            duration_ms,
            threshold,
        }
    }

    pub fn start(&self, out: &mut Outbox<'_>) {
        if self.targets.is_empty() {
            return;
        }
        out.push(DomCommand::Observe {
            observer: ObserverKind::Counters,
            threshold: self.threshold,
            root_margin: "0px".into(),
        });
    }

    /// Whether the host should keep requesting animation frames.
    pub fn wants_frame(&self) -> bool {
        !self.runs.is_empty()
    }

    pub fn on_intersections(&mut self, entries: &[IntersectionEntry], out: &mut Outbox<'_>) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Target::Counter(index) = entry.target else {
                continue;
            };
            let Some(started) = self.started.get_mut(index) else {
                tracing::debug!(index, "intersection for unknown counter");
                continue;
            };
            if *started {
                continue;
            }
            *started = true;
            out.push(DomCommand::Unobserve {
                observer: ObserverKind::Counters,
                target: entry.target,
            });
            match self.targets[index] {
                Some(target) => self.runs.push(Run {
                    index,
                    target,
                    start_ms: out.now_ms(),
                    shown: None,
                }),
                None => tracing::warn!(index, "counter has no numeric data-target"),
            }
        }
    }

    /// Advance every running counter to `now_ms`.
    pub fn frame(&mut self, out: &mut Outbox<'_>) {
        let now = out.now_ms();
        let duration = self.duration_ms;
        self.runs.retain_mut(|run| {
            let progress = if duration > 0.0 {
                ((now - run.start_ms) / duration).min(1.0)
            } else {
                1.0
            };
            let target = Target::Counter(run.index);
            if progress >= 1.0 {
                out.push(DomCommand::text(target, run.target.to_string()));
                out.push(DomCommand::style(target, "animation", "pulse 0.5s ease-out"));
                return false;
            }
            let current = (ease_out_cubic(progress) * run.target as f64).floor() as i64;
            if run.shown != Some(current) {
                run.shown = Some(current);
                out.push(DomCommand::text(target, current.to_string()));
            }
            true
        });
    }
}
