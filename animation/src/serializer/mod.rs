//!
//! The serializer converts an editor's animation to and from a project file
//!
//! Projects are stored as JSON. Every frame is saved with its complete history, so anything that could be
//! undone before a project was saved can still be undone after it is loaded again.
//!

mod project;

pub use self::project::*;
