//! Playback position bookkeeping: clamping, frame steps and skips.

/// Frame duration assumed when the frame rate is unknown (30 fps).
pub const DEFAULT_FRAME_DURATION: f64 = 1.0 / 30.0;

/// Shortest frame duration accepted from an estimate (60 fps).
pub const MIN_FRAME_DURATION: f64 = 1.0 / 60.0;

/// Media facts and the current position of the video collaborator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playback {
    /// Current position in seconds
    pub current_time: f64,
    /// Media duration, once metadata is known
    pub duration: Option<f64>,
    /// Total decoded frames reported by the media, if any
    pub total_frames: Option<u64>,
}

impl Playback {
    /// Estimated duration of one frame.
    ///
    /// Uses `duration / total_frames` when both are known, never below
    /// [`MIN_FRAME_DURATION`], else [`DEFAULT_FRAME_DURATION`].
    pub fn frame_duration(&self) -> f64 {
        match (self.duration, self.total_frames) {
            (Some(duration), Some(frames)) if frames > 0 && duration > 0.0 => {
                let estimate = duration / frames as f64;
                if estimate.is_finite() && estimate > 0.0 {
                    estimate.max(MIN_FRAME_DURATION)
                } else {
                    DEFAULT_FRAME_DURATION
                }
            }
            _ => DEFAULT_FRAME_DURATION,
        }
    }

    /// Clamp a seek target to `[0, duration]`.
    ///
    /// The upper bound only applies once the duration is known. A non-finite
    /// target keeps the current position.
    pub fn clamp(&self, target: f64) -> f64 {
        if !target.is_finite() {
            return self.current_time;
        }
        let upper = self
            .duration
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(f64::MAX);
        target.min(upper).max(0.0)
    }

    /// Position after stepping `delta` frames.
    pub fn step_target(&self, delta: i32) -> f64 {
        self.clamp(self.current_time + f64::from(delta) * self.frame_duration())
    }

    /// Position after skipping `seconds` (negative rewinds).
    pub fn skip_target(&self, seconds: f64) -> f64 {
        self.clamp(self.current_time + seconds)
    }

    /// Frame index nearest to the current position.
    pub fn current_frame_number(&self) -> Option<u64> {
        let frame = (self.current_time / self.frame_duration()).round();
        if frame.is_finite() && frame >= 0.0 {
            Some(frame as u64)
        } else {
            None
        }
    }
}
