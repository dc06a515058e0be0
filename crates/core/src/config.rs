//! Tunables for every timed or threshold-driven behavior on the page.
//!
//! Defaults reproduce the stock page exactly. A host may override any subset
//! with a JSON object; missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub nav: NavConfig,
    pub loading: LoadingConfig,
    pub animation: AnimationConfig,
    pub form: FormConfig,
}

/// Navigation core: smooth scroll, scroll spy, header chrome, mobile menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// Fixed header height subtracted from smooth-scroll targets.
    pub header_height: f64,
    /// The header hides on downward scrolls past this offset.
    pub hide_after: f64,
    /// The header turns opaque past this offset.
    pub opaque_after: f64,
    /// Fraction of a section that must sit inside the spy band.
    pub spy_threshold: f64,
    /// Spy band inset from the viewport top, in pixels.
    pub spy_top_inset: f64,
    /// Spy band inset from the viewport bottom, as a fraction of its height.
    pub spy_bottom_inset_ratio: f64,
    pub menu_close_ms: f64,
    pub rehighlight_ms: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_height: 80.0,
            hide_after: 100.0,
            opaque_after: 50.0,
            spy_threshold: 0.3,
            spy_top_inset: 80.0,
            spy_bottom_inset_ratio: 0.6,
            menu_close_ms: 300.0,
            rehighlight_ms: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadingConfig {
    pub particle_count: usize,
    pub hide_after_ms: f64,
    pub remove_after_ms: f64,
    pub typing_start_ms: f64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            particle_count: 20,
            hide_after_ms: 2000.0,
            remove_after_ms: 500.0,
            typing_start_ms: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationConfig {
    pub counter_duration_ms: f64,
    pub counter_threshold: f64,
    pub skill_threshold: f64,
    pub skill_fill_delay_ms: f64,
    pub skill_glow_delay_ms: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_inset: f64,
    /// Per-element transition delay step, in seconds.
    pub reveal_stagger_s: f64,
    pub theme_transition_ms: f64,
    pub ripple_ms: f64,
    /// The custom cursor only exists on viewports wider than this.
    pub cursor_min_width: f64,
    pub resize_settle_ms: f64,
    pub parallax_hero_rate: f64,
    pub parallax_particle_base: f64,
    pub parallax_particle_step: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000.0,
            counter_threshold: 0.5,
            skill_threshold: 0.3,
            skill_fill_delay_ms: 200.0,
            skill_glow_delay_ms: 500.0,
            reveal_threshold: 0.1,
            reveal_bottom_inset: 100.0,
            reveal_stagger_s: 0.1,
            theme_transition_ms: 500.0,
            ripple_ms: 600.0,
            cursor_min_width: 768.0,
            resize_settle_ms: 250.0,
            parallax_hero_rate: -0.5,
            parallax_particle_base: 0.2,
            parallax_particle_step: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    pub sending_ms: f64,
    pub reset_after_ms: f64,
    pub shake_ms: f64,
    pub success_show_ms: f64,
    pub success_hide_ms: f64,
    pub success_remove_ms: f64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            sending_ms: 2000.0,
            reset_after_ms: 3000.0,
            shake_ms: 500.0,
            success_show_ms: 100.0,
            success_hide_ms: 4000.0,
            success_remove_ms: 300.0,
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no timer or threshold can work with.
    pub fn validate(&self) -> Result<(), FolioError> {
        let non_negative = [
            ("nav.headerHeight", self.nav.header_height),
            ("nav.hideAfter", self.nav.hide_after),
            ("nav.opaqueAfter", self.nav.opaque_after),
            ("nav.spyTopInset", self.nav.spy_top_inset),
            ("nav.menuCloseMs", self.nav.menu_close_ms),
            ("nav.rehighlightMs", self.nav.rehighlight_ms),
            ("loading.hideAfterMs", self.loading.hide_after_ms),
            ("loading.removeAfterMs", self.loading.remove_after_ms),
            ("loading.typingStartMs", self.loading.typing_start_ms),
            ("animation.counterDurationMs", self.animation.counter_duration_ms),
            ("animation.skillFillDelayMs", self.animation.skill_fill_delay_ms),
            ("animation.skillGlowDelayMs", self.animation.skill_glow_delay_ms),
            ("animation.revealBottomInset", self.animation.reveal_bottom_inset),
            ("animation.revealStaggerS", self.animation.reveal_stagger_s),
            ("animation.themeTransitionMs", self.animation.theme_transition_ms),
            ("animation.rippleMs", self.animation.ripple_ms),
            ("animation.cursorMinWidth", self.animation.cursor_min_width),
            ("animation.resizeSettleMs", self.animation.resize_settle_ms),
            ("form.sendingMs", self.form.sending_ms),
            ("form.resetAfterMs", self.form.reset_after_ms),
            ("form.shakeMs", self.form.shake_ms),
            ("form.successShowMs", self.form.success_show_ms),
            ("form.successHideMs", self.form.success_hide_ms),
            ("form.successRemoveMs", self.form.success_remove_ms),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FolioError::InvalidConfig {
                    field,
                    reason: format!("must be a finite, non-negative number (got {value})"),
                });
            }
        }

        let ratios = [
            ("nav.spyThreshold", self.nav.spy_threshold),
            ("nav.spyBottomInsetRatio", self.nav.spy_bottom_inset_ratio),
            ("animation.counterThreshold", self.animation.counter_threshold),
            ("animation.skillThreshold", self.animation.skill_threshold),
            ("animation.revealThreshold", self.animation.reveal_threshold),
        ];
        for (field, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(FolioError::InvalidConfig {
                    field,
                    reason: format!("must be within 0..=1 (got {value})"),
                });
            }
        }

        let rates = [
            ("animation.parallaxHeroRate", self.animation.parallax_hero_rate),
            ("animation.parallaxParticleBase", self.animation.parallax_particle_base),
            ("animation.parallaxParticleStep", self.animation.parallax_particle_step),
        ];
        for (field, value) in rates {
            if !value.is_finite() {
                return Err(FolioError::InvalidConfig {
                    field,
                    reason: format!("must be finite (got {value})"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PageConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"nav":{"headerHeight":64}}"#)
            .unwrap_or_else(|_| PageConfig::default());
        assert_eq!(config.nav.header_height, 64.0);
        assert_eq!(config.nav.menu_close_ms, 300.0);
        assert_eq!(config.loading.particle_count, 20);
    }

    #[test]
    fn rejects_negative_delay() {
        let err = PageConfig::from_json(r#"{"nav":{"menuCloseMs":-1}}"#);
        assert!(matches!(
            err,
            Err(FolioError::InvalidConfig {
                field: "nav.menuCloseMs",
                ..
            })
        ));
    }

    #[test]
    fn rejects_threshold_above_one() {
        let err = PageConfig::from_json(r#"{"nav":{"spyThreshold":1.5}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            PageConfig::from_json("{nav"),
            Err(FolioError::ConfigJson(_))
        ));
    }
}
