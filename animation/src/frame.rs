use crate::undo::*;
use crate::stroke::*;

use serde::{Serialize, Deserialize};
use uuid::Uuid;

use std::fmt;

///
/// Uniquely identifies a frame, independently of its position in the animation
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FrameId(Uuid);

impl FrameId {
    ///
    /// Generates a new, unique frame ID
    ///
    pub fn new() -> FrameId {
        FrameId(Uuid::new_v4())
    }
}

impl Default for FrameId {
    fn default() -> FrameId {
        FrameId::new()
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// A single frame of the animation, with its own undo history
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Frame {
    id:         FrameId,
    history:    FrameHistory,
}

impl Default for Frame {
    fn default() -> Frame {
        Frame::new()
    }
}

impl Frame {
    ///
    /// Creates a new blank frame
    ///
    pub fn new() -> Frame {
        Frame {
            id:         FrameId::new(),
            history:    FrameHistory::new()
        }
    }

    ///
    /// Creates a frame where the specified actions have already been drawn
    ///
    pub fn with_actions(actions: Vec<DrawAction>) -> Frame {
        Frame {
            id:         FrameId::new(),
            history:    FrameHistory::with_actions(actions)
        }
    }

    #[inline]
    pub fn id(&self) -> FrameId {
        self.id
    }

    #[inline]
    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    #[inline]
    pub fn history_mut(&mut self) -> &mut FrameHistory {
        &mut self.history
    }

    ///
    /// The actions that draw this frame as it currently appears
    ///
    pub fn visible_actions(&self) -> impl '_+Iterator<Item=&DrawAction> {
        self.history.visible_actions()
    }

    ///
    /// True if nothing is drawn on this frame
    ///
    pub fn is_blank(&self) -> bool {
        self.history.is_blank()
    }

    ///
    /// Creates a copy of this frame with a new ID
    ///
    /// The copy contains the drawing as it currently appears: anything that was undone in this frame is not copied.
    ///
    pub fn duplicate(&self) -> Frame {
        Frame {
            id:         FrameId::new(),
            history:    self.history.duplicate_visible()
        }
    }
}
