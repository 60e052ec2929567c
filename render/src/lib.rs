//!
//! Renders Live Pictures frames to bitmaps, and bitmaps to animated GIFs
//!
//! Strokes are drawn by flattening their smoothed paths and stamping round dabs along them. Each frame is
//! drawn on its own transparent layer, which is then composited over the background (and the onion skin,
//! if there is one).
//!

mod error;
mod stamp;
mod raster;
mod gif_export;

pub use self::error::*;
pub use self::raster::*;
pub use self::gif_export::*;
