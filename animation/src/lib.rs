//!
//! Library for describing and editing Live Pictures animations
//!
//! An animation is a list of frames. Each frame keeps the strokes and shapes drawn on it in an undo history,
//! and the `EditorState` applies the user's actions to the frames.
//!
#![warn(bare_trait_objects)]

mod color;
mod error;
mod shape;
mod stroke;
mod frame;
mod config;
pub mod brushes;
pub mod undo;
pub mod generate;
pub mod editor;
pub mod serializer;

pub use self::color::*;
pub use self::error::*;
pub use self::shape::*;
pub use self::stroke::*;
pub use self::frame::*;
pub use self::config::*;
pub use self::brushes::*;
pub use self::undo::*;
pub use self::generate::*;
pub use self::editor::*;
pub use self::serializer::*;
