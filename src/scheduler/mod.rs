//! Change detection and render scheduling for one target element

pub mod ancestor;
pub mod dimensions;
pub mod engine;

pub use ancestor::{find_animated_ancestor, MotionProfile, StyleInspector};
pub use dimensions::{DimensionCache, Dimensions};
pub use engine::{FrameRequest, RenderScheduler};
