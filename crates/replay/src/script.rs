//! Replay scripts: a page description plus a timeline of events.

use anyhow::{Context, Result, bail};
use folio_core::{Page, PageConfig, PageLayout, SequenceRandom, StartupContext, StaticGeometry};
use folio_protocol::{DomCommand, PageEvent};
use serde::{Deserialize, Serialize};

/// Input document. Everything but `steps` is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    #[serde(default)]
    pub config: PageConfig,
    #[serde(default = "PageLayout::portfolio")]
    pub layout: PageLayout,
    #[serde(default)]
    pub geometry: StaticGeometry,
    /// Values for the jitter source, cycled. Empty means a constant `0.5`.
    #[serde(default)]
    pub random: Vec<f64>,
    #[serde(default)]
    pub stored_theme: Option<String>,
    pub steps: Vec<Step>,
    /// Keep running timers until this time after the last step.
    #[serde(default)]
    pub until: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Milliseconds since page load.
    pub at: f64,
    pub event: PageEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Origin {
    Start,
    Timers,
    Event,
}

/// One batch of commands, as a host would have applied it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub at: f64,
    pub origin: Origin,
    pub commands: Vec<DomCommand>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parsing replay script")
    }

    /// Run the whole timeline. Scroll events and scroll requests both move
    /// the static geometry; a smooth scroll lands at once.
    pub fn run(self) -> Result<Vec<Record>> {
        let Script {
            config,
            layout,
            mut geometry,
            random,
            stored_theme,
            steps,
            until,
        } = self;

        let mut page = Page::new(config, &layout, Box::new(SequenceRandom::new(random)))
            .context("building page")?;
        let mut records = Vec::new();
        let commands = page.start(&StartupContext {
            now_ms: 0.0,
            scroll_y: geometry.scroll_y,
            viewport: geometry.viewport,
            stored_theme,
        });
        geometry.follow(&commands);
        push(&mut records, 0.0, Origin::Start, commands);

        let mut clock = 0.0;
        for (i, step) in steps.into_iter().enumerate() {
            if step.at < clock {
                bail!("step {i} at {}ms goes back in time (previous {clock}ms)", step.at);
            }
            clock = step.at;
            let commands = page.advance_to(step.at, &geometry);
            geometry.follow(&commands);
            push(&mut records, step.at, Origin::Timers, commands);

            tracing::debug!(at = step.at, event = ?step.event, "step");
            if let PageEvent::Scroll { scroll_y } = step.event {
                geometry.set_scroll_y(scroll_y);
            }
            let commands = page.handle(&step.event, &geometry, step.at);
            geometry.follow(&commands);
            push(&mut records, step.at, Origin::Event, commands);
        }

        if let Some(until) = until.filter(|&u| u > clock) {
            let commands = page.advance_to(until, &geometry);
            geometry.follow(&commands);
            push(&mut records, until, Origin::Timers, commands);
        }

        tracing::info!(
            records = records.len(),
            pending = page.pending_tasks(),
            active = ?page.nav().active_section(),
            "replay finished"
        );
        Ok(records)
    }
}

fn push(records: &mut Vec<Record>, at: f64, origin: Origin, commands: Vec<DomCommand>) {
    if !commands.is_empty() {
        records.push(Record {
            at,
            origin,
            commands,
        });
    }
}
