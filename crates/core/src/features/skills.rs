use folio_protocol::{DomCommand, IntersectionEntry, ObserverKind, Target};

use crate::outbox::Outbox;
use crate::schedule::TaskKey;

const CARD_PULSE: &str = "skillCardPulse 0.6s ease-out 0.5s";
const GLOW: &str = "0 0 20px rgba(99, 102, 241, 0.6)";

/// Skill progress bars: fill to their `data-width` shortly after first
/// becoming visible, then glow.
#[derive(Debug, Clone)]
pub struct SkillBars {
    widths: Vec<String>,
    seen: Vec<bool>,
    threshold: f64,
    fill_delay_ms: f64,
    glow_delay_ms: f64,
}

impl SkillBars {
    pub fn new(widths: Vec<String>, threshold: f64, fill_delay_ms: f64, glow_delay_ms: f64) -> Self {
        let seen = vec![false; widths.len()];
        Self {
            widths,
            seen,
            threshold,
            fill_delay_ms,
            glow_delay_ms,
        }
    }

    pub fn start(&self, out: &mut Outbox<'_>) {
        if self.widths.is_empty() {
            return;
        }
        out.push(DomCommand::Observe {
            observer: ObserverKind::SkillBars,
            threshold: self.threshold,
            root_margin: "0px".into(),
        });
    }

    pub fn on_intersections(&mut self, entries: &[IntersectionEntry], out: &mut Outbox<'_>) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Target::SkillBar(index) = entry.target else {
                continue;
            };
            let Some(seen) = self.seen.get_mut(index) else {
                tracing::debug!(index, "intersection for unknown skill bar");
                continue;
            };
            if std::mem::replace(seen, true) {
                continue;
            }
            out.push(DomCommand::Unobserve {
                observer: ObserverKind::SkillBars,
                target: entry.target,
            });
            out.after(self.fill_delay_ms, TaskKey::SkillFill(index));
        }
    }

    pub fn fill(&self, index: usize, out: &mut Outbox<'_>) {
        let Some(width) = self.widths.get(index) else {
            return;
        };
        out.push(DomCommand::style(
            Target::SkillBar(index),
            "width",
            format!("{}%", width.trim()),
        ));
        out.push(DomCommand::style(
            Target::SkillBarCard(index),
            "animation",
            CARD_PULSE,
        ));
        out.after(self.glow_delay_ms, TaskKey::SkillGlow(index));
    }

    pub fn glow(&self, index: usize, out: &mut Outbox<'_>) {
        if index < self.widths.len() {
            out.push(DomCommand::style(Target::SkillBar(index), "box-shadow", GLOW));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Scheduler;

    #[test]
    fn fill_then_glow() {
        let mut s = Scheduler::new();
        let mut bars = SkillBars::new(vec!["90".into(), "75".into()], 0.3, 200.0, 500.0);

        let mut out = Outbox::new(1000.0, &mut s);
        bars.on_intersections(
            &[
                IntersectionEntry::leaving(Target::SkillBar(0)),
                IntersectionEntry::entering(Target::SkillBar(1)),
            ],
            &mut out,
        );
        assert_eq!(
            out.into_commands(),
            vec![DomCommand::Unobserve {
                observer: ObserverKind::SkillBars,
                target: Target::SkillBar(1),
            }]
        );
        assert_eq!(s.due_at(TaskKey::SkillFill(1)), Some(1200.0));
        assert!(!s.is_pending(TaskKey::SkillFill(0)));

        let mut out = Outbox::new(1200.0, &mut s);
        bars.fill(1, &mut out);
        let cmds = out.into_commands();
        assert_eq!(cmds[0], DomCommand::style(Target::SkillBar(1), "width", "75%"));
        assert_eq!(
            cmds[1],
            DomCommand::style(Target::SkillBarCard(1), "animation", CARD_PULSE)
        );
        assert_eq!(s.due_at(TaskKey::SkillGlow(1)), Some(1700.0));
    }

    #[test]
    fn each_bar_fills_once() {
        let mut s = Scheduler::new();
        let mut bars = SkillBars::new(vec!["90".into()], 0.3, 200.0, 500.0);
        let mut out = Outbox::new(0.0, &mut s);
        bars.on_intersections(&[IntersectionEntry::entering(Target::SkillBar(0))], &mut out);
        bars.on_intersections(&[IntersectionEntry::entering(Target::SkillBar(0))], &mut out);
        assert_eq!(out.into_commands().len(), 1);
    }
}
