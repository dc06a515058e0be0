//! DOM-free controller for the folio portfolio page.
//!
//! Hosts feed [`PageEvent`]s and timer ticks into a [`Page`] and apply the
//! [`DomCommand`]s it returns. Nothing here touches a browser API, so every
//! behavior is testable natively against [`StaticGeometry`].

pub mod config;
pub mod error;
pub mod features;
pub mod geometry;
pub mod layout;
pub mod nav;
pub mod outbox;
pub mod page;
pub mod random;
pub mod schedule;

pub use config::PageConfig;
pub use error::FolioError;
pub use geometry::{PageGeometry, SectionBox, StaticGeometry};
pub use layout::PageLayout;
pub use page::{Page, StartupContext};
pub use random::{RandomSource, SequenceRandom};
pub use schedule::{Scheduler, TaskKey};

pub use folio_protocol::{DomCommand, PageEvent};
