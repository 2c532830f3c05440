pub mod classifier;
pub mod divergence;
pub mod slate_builder;
pub mod thresholds;

pub use classifier::SlateClassifier;
pub use slate_builder::build_breakdown;
pub use thresholds::Thresholds;
