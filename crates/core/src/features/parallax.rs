use folio_protocol::{DomCommand, Target};

use crate::config::AnimationConfig;
use crate::outbox::Outbox;

/// Scroll-linked drift of the hero background and its particles.
#[derive(Debug, Clone)]
pub struct Parallax {
    has_hero: bool,
    particles: usize,
    active: bool,
    hero_rate: f64,
    particle_base: f64,
    particle_step: f64,
}

impl Parallax {
    pub fn new(has_hero: bool, particles: usize, config: &AnimationConfig) -> Self {
        Self {
            has_hero,
            particles,
            active: false,
            hero_rate: config.parallax_hero_rate,
            particle_base: config.parallax_particle_base,
            particle_step: config.parallax_particle_step,
        }
    }

    /// Start following scroll. A page with nothing to move stays inactive.
    pub fn activate(&mut self) {
        self.active = self.has_hero || self.particles > 0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn on_scroll(&self, scroll_y: f64, viewport_height: f64, out: &mut Outbox<'_>) {
        if !self.active {
            return;
        }
        if self.has_hero && scroll_y < viewport_height {
            out.push(DomCommand::style(
                Target::HeroBackground,
                "transform",
                format!("translateY({})", super::px(scroll_y * self.hero_rate)),
            ));
        }
        for i in 0..self.particles {
            let speed = self.particle_base + i as f64 * self.particle_step;
            out.push(DomCommand::style(
                Target::Particle(i),
                "transform",
                format!("translateY({})", super::px(scroll_y * speed)),
            ));
        }
    }
}
