use crate::stroke::*;

use serde::{Serialize, Deserialize};

///
/// The drawing actions for a single frame, along with the undo/redo position
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(from = "HistoryData", into = "HistoryData")]
pub struct FrameHistory {
    /// Actions that have fallen off the start of the history: always drawn, can no longer be undone
    baseline: Vec<DrawAction>,

    /// The undoable actions, oldest first
    actions: Vec<DrawAction>,

    /// The number of actions (from the start of `actions`) that are currently applied
    applied: usize,

    /// The maximum number of undoable actions, if there is one
    limit: Option<usize>,
}

///
/// Serialized form of the frame history (the limit comes from the editor configuration and is not stored)
///
#[derive(Clone, Serialize, Deserialize)]
struct HistoryData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    baseline:   Vec<DrawAction>,
    actions:    Vec<DrawAction>,

    /// Cursor into `actions`, -1 when nothing is applied
    position:   isize,
}

impl From<HistoryData> for FrameHistory {
    fn from(data: HistoryData) -> FrameHistory {
        // Clamp the position so a damaged file can't break the cursor invariant
        let applied = (data.position + 1).clamp(0, data.actions.len() as isize) as usize;

        FrameHistory {
            baseline:   data.baseline,
            actions:    data.actions,
            applied:    applied,
            limit:      None
        }
    }
}

impl From<FrameHistory> for HistoryData {
    fn from(history: FrameHistory) -> HistoryData {
        let position = history.current_history_position();

        HistoryData {
            baseline:   history.baseline,
            actions:    history.actions,
            position:   position
        }
    }
}

impl Default for FrameHistory {
    fn default() -> FrameHistory {
        FrameHistory::new()
    }
}

impl FrameHistory {
    ///
    /// Creates a new empty history
    ///
    pub fn new() -> FrameHistory {
        FrameHistory {
            baseline:   vec![],
            actions:    vec![],
            applied:    0,
            limit:      None
        }
    }

    ///
    /// Creates a history where all of the specified actions are applied
    ///
    pub fn with_actions(actions: Vec<DrawAction>) -> FrameHistory {
        let applied = actions.len();

        FrameHistory {
            baseline:   vec![],
            actions:    actions,
            applied:    applied,
            limit:      None
        }
    }

    ///
    /// Sets the maximum number of actions that can be undone
    ///
    /// If there are already more actions than this, the oldest applied ones are moved into the baseline
    /// and the redo list is shortened to fit.
    ///
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.enforce_limit();
    }

    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    ///
    /// Adds a new action to this history
    ///
    /// Anything that could be redone is discarded, and the new action becomes the current position.
    ///
    pub fn push(&mut self, action: DrawAction) {
        self.actions.truncate(self.applied);
        self.actions.push(action);
        self.applied = self.actions.len();

        self.enforce_limit();
    }

    ///
    /// Moves the cursor back by one action. Returns false if there was nothing to undo.
    ///
    pub fn undo(&mut self) -> bool {
        if self.applied > 0 {
            self.applied -= 1;
            true
        } else {
            false
        }
    }

    ///
    /// Re-applies the most recently undone action. Returns false if there was nothing to redo.
    ///
    pub fn redo(&mut self) -> bool {
        if self.applied < self.actions.len() {
            self.applied += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.applied < self.actions.len()
    }

    ///
    /// The index of the most recently applied action, or -1 if nothing is applied
    ///
    /// This is always in the range `-1..=len()-1`.
    ///
    #[inline]
    pub fn current_history_position(&self) -> isize {
        self.applied as isize - 1
    }

    ///
    /// The number of actions in the undo history (applied or not)
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.baseline.is_empty()
    }

    ///
    /// The actions in the undo history, including any that have been undone
    ///
    #[inline]
    pub fn actions(&self) -> &[DrawAction] {
        &self.actions
    }

    ///
    /// The actions that make up the drawing as it currently appears
    ///
    pub fn visible_actions(&self) -> impl '_+Iterator<Item=&DrawAction> {
        self.baseline.iter().chain(self.actions[0..self.applied].iter())
    }

    ///
    /// True if nothing would be drawn by this history
    ///
    pub fn is_blank(&self) -> bool {
        self.baseline.is_empty() && self.applied == 0
    }

    ///
    /// Creates a new history containing the drawing as it currently appears, with nothing left to redo
    ///
    pub fn duplicate_visible(&self) -> FrameHistory {
        FrameHistory {
            baseline:   self.baseline.clone(),
            actions:    self.actions[0..self.applied].to_vec(),
            applied:    self.applied,
            limit:      self.limit
        }
    }

    ///
    /// Removes every action from this history
    ///
    pub fn clear(&mut self) {
        self.baseline.clear();
        self.actions.clear();
        self.applied = 0;
    }

    ///
    /// Moves actions from the start of the history to the baseline until the history fits in the limit
    ///
    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.actions.len() > limit {
                // The oldest applied actions are always drawn but can no longer be undone
                let excess = (self.actions.len() - limit).min(self.applied);

                self.baseline.extend(self.actions.drain(0..excess));
                self.applied -= excess;

                // Whatever still doesn't fit is at the far end of the redo list
                self.actions.truncate(limit);
            }
        }
    }
}
