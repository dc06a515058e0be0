pub mod controller;
pub mod dispatch;
pub mod header;
pub mod highlight;
pub mod menu;
pub mod scroll;
pub mod spy;

pub use controller::NavController;
pub use dispatch::{ScrollRequest, SmoothScroll, Unresolved};
pub use header::{HeaderChrome, HeaderPosition, HeaderState, HeaderSurface};
pub use highlight::NavHighlighter;
pub use menu::{MenuState, MobileMenu};
pub use scroll::{ScrollSample, ScrollTracker};
pub use spy::{ObservationBand, SectionSpy};
