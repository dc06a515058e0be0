use folio_protocol::{DomCommand, Target};

use crate::outbox::Outbox;
use crate::random::RandomSource;
use crate::schedule::TaskKey;

pub const TAGLINE: &str =
    "INTERESTED IN PROBLEM SOLVING. ALWAYS EAGER TO LEARN AND BECOME BETTER.";

const SPACE_DELAY_MS: f64 = 100.0;
const MIN_DELAY_MS: f64 = 30.0;
const JITTER_MS: f64 = 70.0;

/// Types the hero tagline one character at a time with jittered speed.
#[derive(Debug, Clone)]
pub struct Typewriter {
    enabled: bool,
    chars: Vec<char>,
    index: usize,
    start_delay_ms: f64,
    finished: bool,
}

impl Typewriter {
    pub fn new(enabled: bool, text: &str, start_delay_ms: f64) -> Self {
        Self {
            enabled,
            chars: text.chars().collect(),
            index: 0,
            start_delay_ms,
            finished: false,
        }
    }

    pub fn typed(&self) -> String {
        self.chars[..self.index].iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn start(&mut self, out: &mut Outbox<'_>) {
        if !self.enabled {
            return;
        }
        self.index = 0;
        self.finished = false;
        out.push(DomCommand::text(Target::TypedText, ""));
        out.after(self.start_delay_ms, TaskKey::TypeNext);
    }

    pub fn on_tick(&mut self, rng: &mut dyn RandomSource, out: &mut Outbox<'_>) {
        if !self.enabled || self.finished {
            return;
        }
        let Some(&c) = self.chars.get(self.index) else {
            self.finished = true;
            out.push(DomCommand::style(
                Target::TypingCursor,
                "animation",
                "blink 1s infinite",
            ));
            return;
        };
        out.push(DomCommand::AppendText {
            target: Target::TypedText,
            text: c.to_string().into(),
        });
        self.index += 1;

        let delay = if self.chars.get(self.index) == Some(&' ') {
            SPACE_DELAY_MS
        } else {
            MIN_DELAY_MS + rng.next_unit() * JITTER_MS
        };
        out.after(delay, TaskKey::TypeNext);
    }
}
