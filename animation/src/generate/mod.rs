//!
//! # Frame generators
//!
//! Generators produce whole sequences of frames, for example from a simple physics simulation.
//!

mod bouncing_ball;

pub use self::bouncing_ball::*;
