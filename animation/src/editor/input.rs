use crate::config::*;

///
/// Parses the frame count typed into the 'generate frames' dialog
///
/// Returns None for anything that isn't a whole number between 1 and `max`: the dialog simply ignores
/// input like this.
///
pub fn parse_frame_count(text: &str, max: usize) -> Option<usize> {
    let count = text.trim().parse::<usize>().ok()?;

    if count >= 1 && count <= max {
        Some(count)
    } else {
        None
    }
}

///
/// Parses the playback speed (in frames per second) typed into the playback speed dialog
///
pub fn parse_playback_speed(text: &str) -> Option<u32> {
    let fps = text.trim().parse::<u32>().ok()?;

    if (MIN_FPS..=MAX_FPS).contains(&fps) {
        Some(fps)
    } else {
        None
    }
}
