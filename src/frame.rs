use std::time::Instant;

pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame number and timing, produced once per redraw.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Infinite iterator over redraws: `frames.next()` at the top of every frame.
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let info = FrameInfo {
            number: self.frame_number,
            time: now.duration_since(self.start_time).as_secs_f32(),
            delta: now.duration_since(self.last_frame_time).as_secs_f32(),
        };

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

/// Frames-per-second averaged over [`FPS_UPDATE_INTERVAL`].
///
/// Reports 0 until the first interval has elapsed.
#[derive(Debug, Default)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame that took `delta` seconds. Returns true when the
    /// reading was refreshed.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed < FPS_UPDATE_INTERVAL {
            return false;
        }

        self.fps = self.frame_count as f32 / self.elapsed;
        log::debug!("FPS: {:.1}", self.fps);
        self.frame_count = 0;
        self.elapsed = 0.0;
        true
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_numbers_increase() {
        let mut frames = FrameIterator::new();
        let a = frames.next().unwrap();
        let b = frames.next().unwrap();
        assert_eq!(a.number, 0);
        assert_eq!(b.number, 1);
        assert!(b.time >= a.time);
        assert!(b.delta >= 0.0);
    }

    #[test]
    fn fps_waits_for_a_full_interval() {
        let mut fps = FpsCounter::new();
        for _ in 0..9 {
            assert!(!fps.tick(0.1));
        }
        assert_eq!(fps.fps(), 0.0);
    }

    #[test]
    fn fps_averages_over_the_interval() {
        let mut fps = FpsCounter::new();
        let mut refreshed = false;
        for _ in 0..60 {
            refreshed = fps.tick(1.0 / 60.0);
        }
        // float accumulation may land just short of 1.0
        if !refreshed {
            assert!(fps.tick(1.0 / 60.0));
        }
        assert!((fps.fps() - 60.0).abs() < 1.5);
    }
}
