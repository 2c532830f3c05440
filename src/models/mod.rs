pub mod metrics;
pub mod odds;
pub mod slate;

pub use metrics::TeamMetrics;
pub use odds::GameOdds;
pub use slate::{SlateBreakdown, SlateEntry, Tier};
