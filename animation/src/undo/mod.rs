//!
//! # The undo subsystem
//!
//! Every frame keeps its own history of drawing actions, with a cursor marking how many of them are
//! currently applied. Undo and redo move the cursor; drawing something new discards anything that
//! could have been redone.
//!

mod frame_history;

pub use self::frame_history::*;
