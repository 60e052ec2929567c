use super::*;
use crate::color::*;
use crate::shape::*;
use crate::stroke::*;
use crate::config::*;
use crate::brushes::*;

use lp_curves::*;

fn editor() -> EditorState {
    EditorState::new(EditorConfig::default())
}

fn draw_line(editor: &mut EditorState, from: Coord2, to: Coord2) -> Vec<EditorEvent> {
    editor.dispatch(EditorAction::BeginStroke(from));
    editor.dispatch(EditorAction::ExtendStroke((from + to) * 0.5));
    editor.dispatch(EditorAction::ExtendStroke(to));
    editor.dispatch(EditorAction::FinishStroke)
}

fn place_square(editor: &mut EditorState) -> Vec<EditorEvent> {
    editor.dispatch(EditorAction::SelectTool(Tool::Shape(ShapeKind::Square)));
    editor.dispatch(EditorAction::PlaceShape { center: Coord2(100.0, 100.0), size: None, scale: None, rotation: None })
}

fn visible_count(editor: &EditorState) -> usize {
    editor.current_frame().visible_actions().count()
}

#[test]
fn new_editor_has_one_blank_frame() {
    let editor = editor();

    assert!(editor.frames().len() == 1);
    assert!(editor.current_frame_index() == 0);
    assert!(editor.current_frame().is_blank());
    assert!(editor.tool() == Tool::Pencil);
    assert!(editor.color() == EditorConfig::default().default_color);
    assert!(!editor.is_playing());
}

#[test]
fn finished_stroke_is_added_to_current_frame() {
    let mut editor  = editor();
    let events      = draw_line(&mut editor, Coord2(10.0, 10.0), Coord2(50.0, 50.0));

    assert!(events.contains(&EditorEvent::FrameChanged(0)));
    assert!(editor.stroke_in_progress().is_none());
    assert!(visible_count(&editor) == 1);

    match editor.current_frame().visible_actions().next() {
        Some(DrawAction::Stroke(stroke))    => {
            assert!(stroke.points.len() == 3);
            assert!(stroke.style.color == editor.color());
        }
        _                                   => assert!(false)
    };
}

#[test]
fn stroke_is_in_progress_until_finished() {
    let mut editor = editor();

    editor.dispatch(EditorAction::BeginStroke(Coord2(1.0, 1.0)));
    editor.dispatch(EditorAction::ExtendStroke(Coord2(2.0, 2.0)));

    assert!(editor.stroke_in_progress().map(|stroke| stroke.points.len()) == Some(2));
    assert!(editor.current_frame().is_blank());
}

#[test]
fn extend_without_begin_is_ignored() {
    let mut editor = editor();

    assert!(editor.dispatch(EditorAction::ExtendStroke(Coord2(2.0, 2.0))) == vec![EditorEvent::Ignored(IgnoredAction::NoStrokeInProgress)]);
    assert!(editor.dispatch(EditorAction::FinishStroke) == vec![EditorEvent::Ignored(IgnoredAction::NoStrokeInProgress)]);
}

#[test]
fn cancelled_stroke_is_not_added() {
    let mut editor = editor();

    editor.dispatch(EditorAction::BeginStroke(Coord2(1.0, 1.0)));
    editor.dispatch(EditorAction::ExtendStroke(Coord2(20.0, 2.0)));
    editor.dispatch(EditorAction::CancelStroke);

    assert!(editor.stroke_in_progress().is_none());
    assert!(editor.current_frame().is_blank());
}

#[test]
fn single_tap_makes_a_dot() {
    let mut editor = editor();

    editor.dispatch(EditorAction::BeginStroke(Coord2(4.0, 4.0)));
    editor.dispatch(EditorAction::FinishStroke);

    match editor.current_frame().visible_actions().next() {
        Some(DrawAction::Stroke(stroke))    => assert!(stroke.is_dot()),
        _                                   => assert!(false)
    };
}

#[test]
fn shape_tool_cannot_draw_strokes() {
    let mut editor = editor();

    editor.dispatch(EditorAction::SelectTool(Tool::Shape(ShapeKind::Circle)));

    assert!(editor.dispatch(EditorAction::BeginStroke(Coord2(1.0, 1.0))) == vec![EditorEvent::Ignored(IgnoredAction::NotAStrokeTool)]);
}

#[test]
fn pencil_cannot_place_shapes() {
    let mut editor = editor();
    let events      = editor.dispatch(EditorAction::PlaceShape { center: Coord2(1.0, 1.0), size: None, scale: None, rotation: None });

    assert!(events == vec![EditorEvent::Ignored(IgnoredAction::NotAShapeTool)]);
    assert!(editor.current_frame().is_blank());
}

#[test]
fn placed_shape_uses_defaults() {
    let mut editor  = editor();
    let events      = place_square(&mut editor);

    assert!(events == vec![EditorEvent::FrameChanged(0)]);

    match editor.current_frame().visible_actions().next() {
        Some(DrawAction::Shape(shape))  => {
            assert!(shape.kind == ShapeKind::Square);
            assert!(shape.params.size == editor.config().default_shape_size);
            assert!(shape.params.scale == 1.0);
            assert!(shape.params.rotation == 0.0);
            assert!(shape.width == editor.width());
        }
        _                               => assert!(false)
    };
}

#[test]
fn eraser_strokes_erase() {
    let mut editor = editor();

    editor.dispatch(EditorAction::SelectTool(Tool::Eraser));
    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));

    match editor.current_frame().visible_actions().next() {
        Some(DrawAction::Stroke(stroke))    => assert!(stroke.style.drawing_style == DrawingStyle::Erase),
        _                                   => assert!(false)
    };
}

#[test]
fn width_is_clamped() {
    let mut editor  = editor();
    let max_width   = editor.config().max_width;
    let min_width   = editor.config().min_width;

    assert!(editor.dispatch(EditorAction::ChangeWidth(10000.0)) == vec![EditorEvent::WidthChanged(max_width)]);
    assert!(editor.dispatch(EditorAction::ChangeWidth(-3.0)) == vec![EditorEvent::WidthChanged(min_width)]);
    assert!(editor.dispatch(EditorAction::ChangeWidth(f32::NAN)) == vec![EditorEvent::Ignored(IgnoredAction::InvalidWidth)]);
    assert!(editor.width() == min_width);
}

#[test]
fn color_change_applies_to_new_strokes() {
    let mut editor = editor();

    editor.dispatch(EditorAction::ChangeColor(Color::RED));
    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));

    match editor.current_frame().visible_actions().next() {
        Some(DrawAction::Stroke(stroke))    => assert!(stroke.style.color == Color::RED),
        _                                   => assert!(false)
    };
}

#[test]
fn undo_and_redo_in_current_frame() {
    let mut editor = editor();

    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    draw_line(&mut editor, Coord2(0.0, 5.0), Coord2(10.0, 5.0));

    assert!(editor.dispatch(EditorAction::Undo) == vec![EditorEvent::FrameChanged(0)]);
    assert!(visible_count(&editor) == 1);
    assert!(editor.current_frame().history().current_history_position() == 0);

    assert!(editor.dispatch(EditorAction::Redo) == vec![EditorEvent::FrameChanged(0)]);
    assert!(visible_count(&editor) == 2);

    assert!(editor.dispatch(EditorAction::Redo) == vec![EditorEvent::Ignored(IgnoredAction::NothingToRedo)]);
}

#[test]
fn undo_on_blank_frame_is_ignored() {
    let mut editor = editor();

    assert!(editor.dispatch(EditorAction::Undo) == vec![EditorEvent::Ignored(IgnoredAction::NothingToUndo)]);
    assert!(editor.current_frame().history().current_history_position() == -1);
}

#[test]
fn undo_cancels_stroke_in_progress() {
    let mut editor = editor();

    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    editor.dispatch(EditorAction::BeginStroke(Coord2(3.0, 3.0)));

    let events = editor.dispatch(EditorAction::Undo);

    assert!(events == vec![EditorEvent::StrokeChanged, EditorEvent::FrameChanged(0)]);
    assert!(editor.stroke_in_progress().is_none());
    assert!(editor.current_frame().is_blank());
}

#[test]
fn drawing_after_undo_discards_redo() {
    let mut editor = editor();

    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    editor.dispatch(EditorAction::Undo);
    draw_line(&mut editor, Coord2(0.0, 5.0), Coord2(10.0, 5.0));

    assert!(!editor.current_frame().history().can_redo());
    assert!(editor.current_frame().history().len() == 1);
}

#[test]
fn history_is_per_frame() {
    let mut editor = editor();

    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    editor.dispatch(EditorAction::AddFrame);

    assert!(editor.dispatch(EditorAction::Undo) == vec![EditorEvent::Ignored(IgnoredAction::NothingToUndo)]);

    editor.dispatch(EditorAction::SelectFrame(0));
    assert!(editor.dispatch(EditorAction::Undo) == vec![EditorEvent::FrameChanged(0)]);
}

#[test]
fn history_limit_comes_from_config() {
    let config      = EditorConfig { history_limit: Some(2), ..EditorConfig::default() };
    let mut editor  = EditorState::new(config);

    for offset in 0..5 {
        let y = offset as f32;
        draw_line(&mut editor, Coord2(0.0, y), Coord2(10.0, y));
    }

    assert!(editor.current_frame().history().len() == 2);
    assert!(visible_count(&editor) == 5);

    editor.dispatch(EditorAction::Undo);
    editor.dispatch(EditorAction::Undo);
    assert!(editor.dispatch(EditorAction::Undo) == vec![EditorEvent::Ignored(IgnoredAction::NothingToUndo)]);
    assert!(visible_count(&editor) == 3);
}

#[test]
fn add_frame_inserts_after_current_and_selects() {
    let mut editor = editor();

    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let first_id = editor.current_frame().id();

    let events = editor.dispatch(EditorAction::AddFrame);

    assert!(events == vec![EditorEvent::FramesChanged, EditorEvent::FrameSelected(1)]);
    assert!(editor.frames().len() == 2);
    assert!(editor.current_frame_index() == 1);
    assert!(editor.current_frame().is_blank());
    assert!(editor.frames()[0].id() == first_id);

    editor.dispatch(EditorAction::SelectFrame(0));
    editor.dispatch(EditorAction::AddFrame);
    assert!(editor.current_frame_index() == 1);
    assert!(editor.frames().len() == 3);
}

#[test]
fn duplicate_copies_visible_drawing() {
    let mut editor = editor();

    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    draw_line(&mut editor, Coord2(0.0, 5.0), Coord2(10.0, 5.0));
    editor.dispatch(EditorAction::Undo);

    editor.dispatch(EditorAction::DuplicateFrame);

    assert!(editor.frames().len() == 2);
    assert!(editor.current_frame_index() == 1);
    assert!(visible_count(&editor) == 1);
    assert!(!editor.current_frame().history().can_redo());
    assert!(editor.frames()[0].id() != editor.frames()[1].id());

    // Editing the copy leaves the original alone
    draw_line(&mut editor, Coord2(0.0, 9.0), Coord2(10.0, 9.0));
    assert!(editor.frames()[0].visible_actions().count() == 1);
    assert!(editor.frames()[0].history().can_redo());
}

#[test]
fn delete_frame_selects_previous() {
    let mut editor = editor();

    editor.dispatch(EditorAction::AddFrame);
    editor.dispatch(EditorAction::AddFrame);
    let remaining = editor.frames()[1].id();

    let events = editor.dispatch(EditorAction::DeleteFrame);

    assert!(events == vec![EditorEvent::FramesChanged, EditorEvent::FrameSelected(1)]);
    assert!(editor.frames().len() == 2);
    assert!(editor.current_frame().id() == remaining);

    editor.dispatch(EditorAction::SelectFrame(0));
    editor.dispatch(EditorAction::DeleteFrame);
    assert!(editor.frames().len() == 1);
    assert!(editor.current_frame_index() == 0);
}

#[test]
fn deleting_only_frame_leaves_blank_frame() {
    let mut editor = editor();

    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let old_id = editor.current_frame().id();

    editor.dispatch(EditorAction::DeleteFrame);

    assert!(editor.frames().len() == 1);
    assert!(editor.current_frame().is_blank());
    assert!(editor.current_frame().id() != old_id);
}

#[test]
fn delete_all_frames_leaves_one_blank_frame() {
    let mut editor = editor();

    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    editor.dispatch(EditorAction::DuplicateFrame);
    editor.dispatch(EditorAction::DuplicateFrame);

    let events = editor.dispatch(EditorAction::DeleteAllFrames);

    assert!(events == vec![EditorEvent::FramesChanged, EditorEvent::FrameSelected(0)]);
    assert!(editor.frames().len() == 1);
    assert!(editor.current_frame_index() == 0);
    assert!(editor.current_frame().is_blank());
}

#[test]
fn select_missing_frame_is_ignored() {
    let mut editor = editor();

    assert!(editor.dispatch(EditorAction::SelectFrame(3)) == vec![EditorEvent::Ignored(IgnoredAction::NoSuchFrame(3))]);
    assert!(editor.current_frame_index() == 0);
}

#[test]
fn generate_frames_replaces_blank_animation() {
    let mut editor  = editor();
    let events      = editor.dispatch(EditorAction::GenerateFrames { count: "12".to_string() });

    assert!(events == vec![EditorEvent::FramesChanged, EditorEvent::FrameSelected(0)]);
    assert!(editor.frames().len() == 12);
    assert!(editor.frames().iter().all(|frame| frame.visible_actions().count() == 1));
}

#[test]
fn generate_frames_appends_to_drawing() {
    let mut editor = editor();

    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let events = editor.dispatch(EditorAction::GenerateFrames { count: " 3 ".to_string() });

    assert!(events == vec![EditorEvent::FramesChanged, EditorEvent::FrameSelected(1)]);
    assert!(editor.frames().len() == 4);
    assert!(editor.current_frame_index() == 1);
}

#[test]
fn invalid_frame_counts_are_ignored() {
    let mut editor  = editor();
    let too_many    = (editor.config().max_generated_frames + 1).to_string();

    for count in vec!["", "0", "-4", "abc", "2.5", too_many.as_str()] {
        let events = editor.dispatch(EditorAction::GenerateFrames { count: count.to_string() });

        assert!(events == vec![EditorEvent::Ignored(IgnoredAction::InvalidFrameCount(count.to_string()))]);
    }

    assert!(editor.frames().len() == 1);
}

#[test]
fn playback_speed_is_validated() {
    let mut editor = editor();

    assert!(editor.dispatch(EditorAction::SetPlaybackSpeed { fps: "24".to_string() }) == vec![EditorEvent::PlaybackSpeedChanged(24)]);
    assert!(editor.playback_fps() == 24);

    assert!(editor.dispatch(EditorAction::SetPlaybackSpeed { fps: "0".to_string() }) == vec![EditorEvent::Ignored(IgnoredAction::InvalidPlaybackSpeed("0".to_string()))]);
    assert!(editor.dispatch(EditorAction::SetPlaybackSpeed { fps: "61".to_string() }) == vec![EditorEvent::Ignored(IgnoredAction::InvalidPlaybackSpeed("61".to_string()))]);
    assert!(editor.playback_fps() == 24);
    assert!(editor.playback_clock().fps() == 24);
}

#[test]
fn editing_is_ignored_while_playing() {
    let mut editor = editor();

    assert!(editor.dispatch(EditorAction::StartPlayback) == vec![EditorEvent::PlaybackStarted { fps: editor.playback_fps() }]);
    assert!(editor.is_playing());

    for action in vec![EditorAction::BeginStroke(Coord2(1.0, 1.0)), EditorAction::AddFrame, EditorAction::Undo, EditorAction::DeleteAllFrames, EditorAction::GenerateFrames { count: "4".to_string() }] {
        assert!(editor.dispatch(action) == vec![EditorEvent::Ignored(IgnoredAction::WhilePlaying)]);
    }

    assert!(editor.frames().len() == 1);
    assert!(editor.dispatch(EditorAction::SetPlaybackSpeed { fps: "30".to_string() }) == vec![EditorEvent::PlaybackSpeedChanged(30)]);
    assert!(editor.dispatch(EditorAction::StartPlayback) == vec![EditorEvent::Ignored(IgnoredAction::AlreadyPlaying)]);

    assert!(editor.dispatch(EditorAction::StopPlayback) == vec![EditorEvent::PlaybackStopped]);
    assert!(editor.dispatch(EditorAction::StopPlayback) == vec![EditorEvent::Ignored(IgnoredAction::NotPlaying)]);
    assert!(editor.dispatch(EditorAction::AddFrame) == vec![EditorEvent::FramesChanged, EditorEvent::FrameSelected(1)]);
}

#[test]
fn onion_skin_shows_previous_frame() {
    let mut editor = editor();

    assert!(editor.onion_skin_frame().is_none());

    draw_line(&mut editor, Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    editor.dispatch(EditorAction::AddFrame);

    assert!(editor.onion_skin_frame().map(|frame| frame.id()) == Some(editor.frames()[0].id()));

    editor.dispatch(EditorAction::SetOnionSkin(false));
    assert!(editor.onion_skin_frame().is_none());
}

#[test]
fn save_as_gif_requests_export_at_playback_speed() {
    let mut editor = editor();

    editor.dispatch(EditorAction::SetPlaybackSpeed { fps: "8".to_string() });

    assert!(editor.dispatch(EditorAction::SaveAsGif) == vec![EditorEvent::ExportRequested { fps: 8 }]);
}

#[test]
fn with_frames_applies_history_limit() {
    let config  = EditorConfig { history_limit: Some(1), ..EditorConfig::default() };
    let frames  = vec![crate::frame::Frame::new(), crate::frame::Frame::new()];
    let editor  = EditorState::with_frames(config, frames);

    assert!(editor.frames().len() == 2);
    assert!(editor.frames().iter().all(|frame| frame.history().limit() == Some(1)));
}

#[test]
fn with_no_frames_starts_blank() {
    let editor = EditorState::with_frames(EditorConfig::default(), vec![]);

    assert!(editor.frames().len() == 1);
}
