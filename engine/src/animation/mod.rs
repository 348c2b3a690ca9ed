//! Animation Module
//!
//! Easing curves and the declarative keyframe timeline used for marketing
//! content and door swings.

pub mod easing;
pub mod timeline;

pub use easing::Easing;
pub use timeline::{Segment, Timeline};
