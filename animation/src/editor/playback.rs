use crate::config::*;

use std::time::Duration;

///
/// Works out which frame should be showing during playback
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PlaybackClock {
    fps: u32,
}

impl PlaybackClock {
    ///
    /// Creates a clock for a playback speed (clamped to the supported range)
    ///
    pub fn new(fps: u32) -> PlaybackClock {
        PlaybackClock { fps: fps.clamp(MIN_FPS, MAX_FPS) }
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    ///
    /// The time each frame is shown for, rounded to the nearest millisecond
    ///
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(((1000 + self.fps/2) / self.fps) as u64)
    }

    ///
    /// The index of the frame to show after a certain amount of playback time, looping back to the start
    ///
    pub fn frame_at(&self, elapsed: Duration, frame_count: usize) -> usize {
        if frame_count == 0 {
            return 0;
        }

        let delay   = self.frame_delay().as_millis().max(1);
        let ticks   = elapsed.as_millis() / delay;

        (ticks % (frame_count as u128)) as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn delay_is_rounded_to_milliseconds() {
        assert!(PlaybackClock::new(10).frame_delay() == Duration::from_millis(100));
        assert!(PlaybackClock::new(12).frame_delay() == Duration::from_millis(83));
        assert!(PlaybackClock::new(60).frame_delay() == Duration::from_millis(17));
    }

    #[test]
    fn speed_is_clamped() {
        assert!(PlaybackClock::new(0).fps() == MIN_FPS);
        assert!(PlaybackClock::new(1000).fps() == MAX_FPS);
    }

    #[test]
    fn playback_loops() {
        let clock = PlaybackClock::new(10);

        assert!(clock.frame_at(Duration::from_millis(0), 3) == 0);
        assert!(clock.frame_at(Duration::from_millis(150), 3) == 1);
        assert!(clock.frame_at(Duration::from_millis(299), 3) == 2);
        assert!(clock.frame_at(Duration::from_millis(300), 3) == 0);
        assert!(clock.frame_at(Duration::from_millis(300), 0) == 0);
    }
}
