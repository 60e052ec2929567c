use lp_animation::*;

use std::sync::*;

///
/// Represents the state of a command stream
///
#[derive(Clone, Debug)]
pub struct CommandState(Arc<StateValue>);

///
/// The internal value of a command state
///
#[derive(Clone, Debug)]
struct StateValue {
    /// The configuration used for new animations
    config: EditorConfig,

    /// The animation being edited
    editor: EditorState,
}

impl CommandState {
    ///
    /// Creates a new command state with the default settings
    ///
    pub fn new() -> CommandState {
        CommandState::with_config(EditorConfig::default())
    }

    ///
    /// Creates a new command state with a blank animation using the specified configuration
    ///
    pub fn with_config(config: EditorConfig) -> CommandState {
        let config = config.validated();

        CommandState(Arc::new(StateValue {
            editor: EditorState::new(config.clone()),
            config: config,
        }))
    }

    ///
    /// The configuration used by this state
    ///
    pub fn config(&self) -> &EditorConfig {
        &self.0.config
    }

    ///
    /// The animation being edited
    ///
    pub fn editor(&self) -> &EditorState {
        &self.0.editor
    }

    ///
    /// Retrieves the editor for changing
    ///
    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut Arc::make_mut(&mut self.0).editor
    }

    ///
    /// Returns a new state with an updated configuration, keeping the frames that are being edited
    ///
    pub fn set_config(&self, config: EditorConfig) -> CommandState {
        let config = config.validated();
        let frames = self.0.editor.frames().to_vec();

        CommandState(Arc::new(StateValue {
            editor: EditorState::with_frames(config.clone(), frames),
            config: config,
        }))
    }

    ///
    /// Returns a new state editing a different animation
    ///
    pub fn set_editor(&self, editor: EditorState) -> CommandState {
        CommandState(Arc::new(StateValue {
            config: self.0.config.clone(),
            editor: editor,
        }))
    }
}

impl Default for CommandState {
    fn default() -> CommandState {
        CommandState::new()
    }
}
