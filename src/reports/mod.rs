//! Reports for Campus Planner

pub mod spending;
pub mod study;

pub use spending::{CategorySpend, SpendingReport};
pub use study::StudyOverview;
