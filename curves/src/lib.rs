//!
//! # lp_curves
//!
//! Geometry used by the Live Pictures editor: coordinates, cubic bezier curves, paths and the
//! smoothing that turns raw pointer samples into a curve.
//!

#![warn(bare_trait_objects)]

pub mod bezier;

mod coordinate;
mod path;
mod smooth;

pub use self::coordinate::*;
pub use self::path::*;
pub use self::smooth::*;

pub use self::bezier::{BezierCurve, Curve};
