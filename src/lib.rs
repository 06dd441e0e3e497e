//! Pixel-by-pixel color matching of a user drawing against a reference region.
//!
//! [`compare::compare`] is the core: it classifies every drawn pixel as
//! matching (blue) or missing (red) within a Euclidean RGB tolerance and
//! counts the results. The other modules feed it canvases and show what
//! it returns.

pub mod color;
pub mod compare;
pub mod draw;
pub mod error;
pub mod report;
pub mod scene;
pub mod session;
pub mod types;

pub use color::{Rgb, hex_to_rgb, rgb_to_hex};
pub use compare::{Comparison, ImageComparison, MatchCounts, Similarity, compare, compare_images};
pub use error::Error;
