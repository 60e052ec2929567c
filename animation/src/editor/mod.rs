//!
//! # The editor state
//!
//! `EditorState` holds everything the editor is showing: the frame list, the selected frame and
//! tool settings, the stroke being drawn and the playback state. It is changed only by dispatching
//! `EditorAction`s, which return the `EditorEvent`s describing what changed.
//!

mod input;
mod playback;
mod editor_action;
mod editor_event;
mod editor_state;
#[cfg(test)] mod tests;

pub use self::input::*;
pub use self::playback::*;
pub use self::editor_action::*;
pub use self::editor_event::*;
pub use self::editor_state::*;
