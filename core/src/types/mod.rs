//! Core type definitions for slide metadata
//!
//! - [`SlideMetadata`]: the immutable per-slide record
//! - [`SideOfHead`]: anatomical side enumeration
//! - [`RegionOfInterest`]: optional rectangular annotation

mod enums;
mod record;
mod roi;

pub use enums::SideOfHead;
pub use record::SlideMetadata;
pub use roi::{Point, RegionOfInterest};
