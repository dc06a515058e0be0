pub mod commands;
pub mod events;
pub mod section_id;
pub mod target;
pub mod theme;
pub mod types;

pub use commands::{DomCommand, Text};
pub use events::{FormValues, IntersectionEntry, PageEvent};
pub use section_id::SectionId;
pub use target::{FormField, ObserverKind, RevealKind, Target};
pub use theme::ColorScheme;
pub use types::{Point, PointerInfo, Rect, Size};
