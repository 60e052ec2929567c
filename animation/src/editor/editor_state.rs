use super::input::*;
use super::playback::*;
use super::editor_event::*;
use super::editor_action::*;
use crate::frame::*;
use crate::shape::*;
use crate::color::*;
use crate::stroke::*;
use crate::config::*;
use crate::brushes::*;
use crate::generate::*;

use lp_curves::*;

use log::*;

///
/// The state of the animation editor
///
#[derive(Clone, Debug)]
pub struct EditorState {
    config:             EditorConfig,

    /// The frames in the animation (never empty)
    frames:             Vec<Frame>,

    /// Index into `frames` of the frame being edited
    current_frame:      usize,

    tool:               Tool,
    color:              Color,
    width:              f32,

    /// The stroke the user is drawing right now, if there is one
    stroke:             Option<Stroke>,

    is_playing:         bool,
    playback_fps:       u32,
    onion_skin:         bool,
}

impl EditorState {
    ///
    /// Creates an editor with a single blank frame
    ///
    pub fn new(config: EditorConfig) -> EditorState {
        let config = config.validated();

        let mut state = EditorState {
            frames:             vec![],
            current_frame:      0,
            tool:               Tool::default(),
            color:              config.default_color,
            width:              config.default_width,
            stroke:             None,
            is_playing:         false,
            playback_fps:       config.default_fps,
            onion_skin:         config.onion_skin,
            config:             config,
        };
        state.frames.push(state.blank_frame());

        state
    }

    ///
    /// Creates an editor for an existing set of frames
    ///
    /// An empty list of frames is replaced by a single blank frame.
    ///
    pub fn with_frames(config: EditorConfig, frames: Vec<Frame>) -> EditorState {
        let mut state = EditorState::new(config);

        if !frames.is_empty() {
            state.frames = frames;

            let limit = state.config.history_limit;
            state.frames.iter_mut().for_each(|frame| frame.history_mut().set_limit(limit));
        }

        state
    }

    #[inline] pub fn config(&self) -> &EditorConfig { &self.config }
    #[inline] pub fn canvas_size(&self) -> CanvasSize { self.config.canvas }
    #[inline] pub fn frames(&self) -> &[Frame] { &self.frames }
    #[inline] pub fn current_frame_index(&self) -> usize { self.current_frame }
    #[inline] pub fn current_frame(&self) -> &Frame { &self.frames[self.current_frame] }
    #[inline] pub fn tool(&self) -> Tool { self.tool }
    #[inline] pub fn color(&self) -> Color { self.color }
    #[inline] pub fn width(&self) -> f32 { self.width }
    #[inline] pub fn stroke_in_progress(&self) -> Option<&Stroke> { self.stroke.as_ref() }
    #[inline] pub fn is_playing(&self) -> bool { self.is_playing }
    #[inline] pub fn playback_fps(&self) -> u32 { self.playback_fps }
    #[inline] pub fn onion_skin(&self) -> bool { self.onion_skin }

    ///
    /// The clock that decides which frame to show during playback
    ///
    pub fn playback_clock(&self) -> PlaybackClock {
        PlaybackClock::new(self.playback_fps)
    }

    ///
    /// The frame to draw faded beneath the current frame, if onion skinning is on and there is one
    ///
    pub fn onion_skin_frame(&self) -> Option<&Frame> {
        if self.onion_skin && !self.is_playing && self.current_frame > 0 {
            self.frames.get(self.current_frame - 1)
        } else {
            None
        }
    }

    ///
    /// Updates the editor state with an action, returning a description of what changed
    ///
    pub fn dispatch(&mut self, action: EditorAction) -> Vec<EditorEvent> {
        use self::EditorAction::*;

        trace!("Dispatching {:?}", action);

        if self.is_playing && Self::edits_animation(&action) {
            return vec![EditorEvent::Ignored(IgnoredAction::WhilePlaying)];
        }

        let events = match action {
            SelectTool(tool)            => self.select_tool(tool),
            ChangeColor(color)          => self.change_color(color),
            ChangeWidth(width)          => self.change_width(width),

            BeginStroke(point)          => self.begin_stroke(point),
            ExtendStroke(point)         => self.extend_stroke(point),
            FinishStroke                => self.finish_stroke(),
            CancelStroke                => self.cancel_stroke(),
            PlaceShape { center, size, scale, rotation } => self.place_shape(center, size, scale, rotation),

            Undo                        => self.undo(),
            Redo                        => self.redo(),

            AddFrame                    => self.add_frame(),
            DuplicateFrame              => self.duplicate_frame(),
            DeleteFrame                 => self.delete_frame(),
            DeleteAllFrames             => self.delete_all_frames(),
            SelectFrame(index)          => self.select_frame(index),
            GenerateFrames { count }    => self.generate_frames(&count),

            SetPlaybackSpeed { fps }    => self.set_playback_speed(&fps),
            SetOnionSkin(onion_skin)    => { self.onion_skin = onion_skin; vec![EditorEvent::OnionSkinChanged(onion_skin)] }
            StartPlayback               => self.start_playback(),
            StopPlayback                => self.stop_playback(),
            SaveAsGif                   => vec![EditorEvent::ExportRequested { fps: self.playback_fps }],
        };

        debug_assert!(!self.frames.is_empty());
        debug_assert!(self.current_frame < self.frames.len());

        events
    }

    ///
    /// True if an action changes the frames, which is not allowed during playback
    ///
    fn edits_animation(action: &EditorAction) -> bool {
        use self::EditorAction::*;

        match action {
            BeginStroke(_) | ExtendStroke(_) | FinishStroke | PlaceShape { .. } |
            Undo | Redo |
            AddFrame | DuplicateFrame | DeleteFrame | DeleteAllFrames | SelectFrame(_) | GenerateFrames { .. }  => true,

            SelectTool(_) | ChangeColor(_) | ChangeWidth(_) | CancelStroke |
            SetPlaybackSpeed { .. } | SetOnionSkin(_) | StartPlayback | StopPlayback | SaveAsGif                => false,
        }
    }

    ///
    /// Creates a new blank frame using the configured history limit
    ///
    fn blank_frame(&self) -> Frame {
        let mut frame = Frame::new();
        frame.history_mut().set_limit(self.config.history_limit);

        frame
    }

    fn select_tool(&mut self, tool: Tool) -> Vec<EditorEvent> {
        let mut events = self.cancel_stroke_if_drawing();

        self.tool = tool;
        events.push(EditorEvent::ToolChanged(tool));

        events
    }

    fn change_color(&mut self, color: Color) -> Vec<EditorEvent> {
        self.color = color;
        vec![EditorEvent::ColorChanged(color)]
    }

    fn change_width(&mut self, width: f32) -> Vec<EditorEvent> {
        if !width.is_finite() {
            return vec![EditorEvent::Ignored(IgnoredAction::InvalidWidth)];
        }

        self.width = width.clamp(self.config.min_width, self.config.max_width);
        vec![EditorEvent::WidthChanged(self.width)]
    }

    fn begin_stroke(&mut self, point: Coord2) -> Vec<EditorEvent> {
        let style = match self.tool.stroke_style(self.color, self.width) {
            Some(style) => style,
            None        => { return vec![EditorEvent::Ignored(IgnoredAction::NotAStrokeTool)]; }
        };

        // A new stroke replaces any that was somehow left unfinished
        let mut stroke = Stroke::new(style);
        stroke.add_point(point);
        self.stroke = Some(stroke);

        vec![EditorEvent::StrokeChanged]
    }

    fn extend_stroke(&mut self, point: Coord2) -> Vec<EditorEvent> {
        match self.stroke.as_mut() {
            Some(stroke)    => { stroke.add_point(point); vec![EditorEvent::StrokeChanged] }
            None            => vec![EditorEvent::Ignored(IgnoredAction::NoStrokeInProgress)]
        }
    }

    fn finish_stroke(&mut self) -> Vec<EditorEvent> {
        match self.stroke.take() {
            Some(stroke) if !stroke.points.is_empty() => {
                debug!("Adding stroke with {} points to frame {}", stroke.points.len(), self.current_frame);

                self.frames[self.current_frame].history_mut().push(DrawAction::Stroke(stroke));
                vec![EditorEvent::StrokeChanged, EditorEvent::FrameChanged(self.current_frame)]
            }

            Some(_empty)    => vec![EditorEvent::StrokeChanged],
            None            => vec![EditorEvent::Ignored(IgnoredAction::NoStrokeInProgress)]
        }
    }

    fn cancel_stroke(&mut self) -> Vec<EditorEvent> {
        match self.stroke.take() {
            Some(_) => vec![EditorEvent::StrokeChanged],
            None    => vec![EditorEvent::Ignored(IgnoredAction::NoStrokeInProgress)]
        }
    }

    ///
    /// Abandons the stroke in progress, returning the events to send if there was one
    ///
    fn cancel_stroke_if_drawing(&mut self) -> Vec<EditorEvent> {
        if self.stroke.take().is_some() {
            vec![EditorEvent::StrokeChanged]
        } else {
            vec![]
        }
    }

    fn place_shape(&mut self, center: Coord2, size: Option<f32>, scale: Option<f32>, rotation: Option<f32>) -> Vec<EditorEvent> {
        let kind = match self.tool.shape_kind() {
            Some(kind)  => kind,
            None        => { return vec![EditorEvent::Ignored(IgnoredAction::NotAShapeTool)]; }
        };

        let params = ShapeParams::new(center, size.unwrap_or(self.config.default_shape_size), self.color)
            .with_scale(scale.unwrap_or(1.0))
            .with_rotation(rotation.unwrap_or(0.0));
        let shape = PlacedShape { kind: kind, params: params, width: self.width };

        debug!("Placing {:?} at {:?} on frame {}", kind, center, self.current_frame);
        self.frames[self.current_frame].history_mut().push(DrawAction::Shape(shape));

        vec![EditorEvent::FrameChanged(self.current_frame)]
    }

    fn undo(&mut self) -> Vec<EditorEvent> {
        let mut events = self.cancel_stroke_if_drawing();

        if self.frames[self.current_frame].history_mut().undo() {
            events.push(EditorEvent::FrameChanged(self.current_frame));
        } else {
            events.push(EditorEvent::Ignored(IgnoredAction::NothingToUndo));
        }

        events
    }

    fn redo(&mut self) -> Vec<EditorEvent> {
        let mut events = self.cancel_stroke_if_drawing();

        if self.frames[self.current_frame].history_mut().redo() {
            events.push(EditorEvent::FrameChanged(self.current_frame));
        } else {
            events.push(EditorEvent::Ignored(IgnoredAction::NothingToRedo));
        }

        events
    }

    ///
    /// Inserts a frame after the current one and selects it
    ///
    fn insert_after_current(&mut self, frame: Frame) -> Vec<EditorEvent> {
        let mut events  = self.cancel_stroke_if_drawing();
        let index       = self.current_frame + 1;

        self.frames.insert(index, frame);
        self.current_frame = index;

        events.extend(vec![EditorEvent::FramesChanged, EditorEvent::FrameSelected(index)]);
        events
    }

    fn add_frame(&mut self) -> Vec<EditorEvent> {
        let frame = self.blank_frame();
        self.insert_after_current(frame)
    }

    fn duplicate_frame(&mut self) -> Vec<EditorEvent> {
        let frame = self.frames[self.current_frame].duplicate();
        self.insert_after_current(frame)
    }

    fn delete_frame(&mut self) -> Vec<EditorEvent> {
        let mut events = self.cancel_stroke_if_drawing();

        if self.frames.len() <= 1 {
            // The animation always has a frame: deleting the last one leaves a blank canvas
            self.frames         = vec![self.blank_frame()];
            self.current_frame  = 0;
        } else {
            self.frames.remove(self.current_frame);
            self.current_frame = self.current_frame.saturating_sub(1);
        }

        events.extend(vec![EditorEvent::FramesChanged, EditorEvent::FrameSelected(self.current_frame)]);
        events
    }

    fn delete_all_frames(&mut self) -> Vec<EditorEvent> {
        let mut events = self.cancel_stroke_if_drawing();

        self.frames         = vec![self.blank_frame()];
        self.current_frame  = 0;

        events.extend(vec![EditorEvent::FramesChanged, EditorEvent::FrameSelected(0)]);
        events
    }

    fn select_frame(&mut self, index: usize) -> Vec<EditorEvent> {
        if index >= self.frames.len() {
            return vec![EditorEvent::Ignored(IgnoredAction::NoSuchFrame(index))];
        }

        let mut events = self.cancel_stroke_if_drawing();
        self.current_frame = index;
        events.push(EditorEvent::FrameSelected(index));

        events
    }

    ///
    /// Generates bouncing ball frames after the existing frames
    ///
    /// If the animation is just a single blank frame, the generated frames replace it.
    ///
    fn generate_frames(&mut self, count: &str) -> Vec<EditorEvent> {
        let count = match parse_frame_count(count, self.config.max_generated_frames) {
            Some(count) => count,
            None        => { return vec![EditorEvent::Ignored(IgnoredAction::InvalidFrameCount(count.to_string()))]; }
        };

        info!("Generating {} bouncing ball frames", count);

        let mut events  = self.cancel_stroke_if_drawing();
        let limit       = self.config.history_limit;
        let mut frames  = generate_bouncing_ball_frames(self.config.ball, self.config.canvas, count, self.color, self.width);
        frames.iter_mut().for_each(|frame| frame.history_mut().set_limit(limit));

        let first_generated = if self.frames.len() == 1 && self.frames[0].is_blank() {
            self.frames = frames;
            0
        } else {
            let first = self.frames.len();
            self.frames.extend(frames);
            first
        };

        self.current_frame = first_generated;

        events.extend(vec![EditorEvent::FramesChanged, EditorEvent::FrameSelected(first_generated)]);
        events
    }

    fn set_playback_speed(&mut self, fps: &str) -> Vec<EditorEvent> {
        match parse_playback_speed(fps) {
            Some(fps)   => { self.playback_fps = fps; vec![EditorEvent::PlaybackSpeedChanged(fps)] }
            None        => vec![EditorEvent::Ignored(IgnoredAction::InvalidPlaybackSpeed(fps.to_string()))]
        }
    }

    fn start_playback(&mut self) -> Vec<EditorEvent> {
        if self.is_playing {
            return vec![EditorEvent::Ignored(IgnoredAction::AlreadyPlaying)];
        }

        let mut events = self.cancel_stroke_if_drawing();
        self.is_playing = true;
        events.push(EditorEvent::PlaybackStarted { fps: self.playback_fps });

        events
    }

    fn stop_playback(&mut self) -> Vec<EditorEvent> {
        if !self.is_playing {
            return vec![EditorEvent::Ignored(IgnoredAction::NotPlaying)];
        }

        self.is_playing = false;
        vec![EditorEvent::PlaybackStopped]
    }
}
