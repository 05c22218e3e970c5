//! The two validator instances built on the shared engine.

pub mod architecture;
pub mod brief;

pub use architecture::{ArchitectureReport, ArchitectureValidator, ArchitectureVerdict};
pub use brief::{BriefReport, BriefValidator, BriefVerdict};
