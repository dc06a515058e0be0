use folio_protocol::{DomCommand, Target};

use crate::config::LoadingConfig;
use crate::outbox::Outbox;
use crate::random::RandomSource;
use crate::schedule::TaskKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// The page has no loading screen.
    Absent,
    Showing,
    /// Fade-out running.
    Hiding,
    Done,
}

/// Timed intro overlay with floating particles.
#[derive(Debug, Clone)]
pub struct LoadingScreen {
    phase: LoadingPhase,
    config: LoadingConfig,
}

impl LoadingScreen {
    pub fn new(present: bool, config: LoadingConfig) -> Self {
        Self {
            phase: if present {
                LoadingPhase::Showing
            } else {
                LoadingPhase::Absent
            },
            config,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn start(&mut self, rng: &mut dyn RandomSource, out: &mut Outbox<'_>) {
        if self.phase != LoadingPhase::Showing {
            return;
        }
        for i in 0..self.config.particle_count {
            let left = rng.next_unit() * 100.0;
            let top = rng.next_unit() * 100.0;
            let duration = 2.0 + rng.next_unit() * 3.0;
            let delay = rng.next_unit() * 2.0;
            let css = format!(
                "position: absolute; width: 4px; height: 4px; \
                 background: rgba(255, 255, 255, 0.6); border-radius: 50%; \
                 left: {left:.2}%; top: {top:.2}%; \
                 animation: loadingFloat {duration:.2}s ease-in-out infinite; \
                 animation-delay: {delay:.2}s;"
            );
            out.push(DomCommand::Spawn {
                target: Target::LoadingParticle(i),
                parent: Target::LoadingScreen,
                tag: "div".into(),
                class: "loading-particle".into(),
                css: Some(css.into()),
                html: None,
            });
        }
        out.after(self.config.hide_after_ms, TaskKey::LoadingHide);
    }

    pub fn on_hide(&mut self, out: &mut Outbox<'_>) {
        if self.phase != LoadingPhase::Showing {
            return;
        }
        self.phase = LoadingPhase::Hiding;
        out.push(DomCommand::add_class(Target::LoadingScreen, "hidden"));
        out.push(DomCommand::add_class(Target::Body, "loaded"));
        out.after(self.config.remove_after_ms, TaskKey::LoadingRemove);
    }

    /// Remove the overlay. Returns `true` once, when the page should start
    /// its main animations.
    pub fn on_remove(&mut self, out: &mut Outbox<'_>) -> bool {
        if self.phase != LoadingPhase::Hiding {
            return false;
        }
        self.phase = LoadingPhase::Done;
        out.push(DomCommand::Remove {
            target: Target::LoadingScreen,
        });
        tracing::debug!("loading screen removed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;
    use crate::schedule::Scheduler;

    #[test]
    fn full_sequence() {
        let mut s = Scheduler::new();
        let mut rng = SequenceRandom::constant(0.5);
        let mut screen = LoadingScreen::new(true, LoadingConfig::default());

        let mut out = Outbox::new(0.0, &mut s);
        screen.start(&mut rng, &mut out);
        let cmds = out.into_commands();
        assert_eq!(cmds.len(), 20);
        let DomCommand::Spawn { css: Some(css), .. } = &cmds[0] else {
            unreachable!("particles are spawned");
        };
        assert!(css.contains("left: 50.00%"));
        assert!(css.contains("loadingFloat 3.50s"));
        assert_eq!(s.due_at(TaskKey::LoadingHide), Some(2000.0));

        let mut out = Outbox::new(2000.0, &mut s);
        screen.on_hide(&mut out);
        assert_eq!(screen.phase(), LoadingPhase::Hiding);
        assert_eq!(s.due_at(TaskKey::LoadingRemove), Some(2500.0));

        let mut out = Outbox::new(2500.0, &mut s);
        assert!(screen.on_remove(&mut out));
        assert!(!screen.on_remove(&mut out));
        assert_eq!(screen.phase(), LoadingPhase::Done);
    }

    #[test]
    fn absent_screen_does_nothing() {
        let mut s = Scheduler::new();
        let mut screen = LoadingScreen::new(false, LoadingConfig::default());
        let mut out = Outbox::new(0.0, &mut s);
        screen.start(&mut SequenceRandom::default(), &mut out);
        assert!(out.into_commands().is_empty());
        assert!(s.is_empty());
    }
}
