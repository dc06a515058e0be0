//! Page features outside the navigation core. Each one owns its state,
//! reacts to a narrow slice of events and talks to the rest of the page only
//! through the outbox.

pub mod counters;
pub mod cursor;
pub mod form;
pub mod hover;
pub mod loading;
pub mod parallax;
pub mod reveal;
pub mod ripple;
pub mod skills;
pub mod styles;
pub mod theme;
pub mod typing;

pub use counters::Counters;
pub use cursor::CustomCursor;
pub use form::{ContactForm, SubmitPhase};
pub use loading::{LoadingPhase, LoadingScreen};
pub use parallax::Parallax;
pub use reveal::Reveal;
pub use ripple::Ripples;
pub use skills::SkillBars;
pub use theme::ThemeToggle;
pub use typing::Typewriter;

/// Format a CSS length, trimming float noise such as `30.000000000000004`.
pub(crate) fn px(value: f64) -> String {
    format!("{}px", round3(value))
}

/// Format a CSS duration in seconds.
pub(crate) fn secs(value: f64) -> String {
    format!("{}s", round3(value))
}

fn round3(value: f64) -> f64 {
    // `+ 0.0` folds negative zero.
    (value * 1000.0).round() / 1000.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_numbers_are_trimmed() {
        assert_eq!(px(100.0 * (0.2 + 0.1)), "30px");
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(-12.5), "-12.5px");
        assert_eq!(secs(3.0 * 0.1), "0.3s");
    }
}
