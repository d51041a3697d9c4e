use super::constants::ZOOM_DURATION;
use std::time::Duration;

/// Cubic ease-in-out over `[0, 1]`.
#[inline]
pub fn ease_in_out_cubic(f: f32) -> f32 {
    if f < 0.5 {
        4.0 * f * f * f
    } else {
        1.0 - (-2.0 * f + 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTask {
    pub start_z: f32,
    pub end_z: f32,
    pub started_at: Duration,
}

/// One-shot eased animation of the camera depth, keyed to wall-clock time.
///
/// Holds at most one task: `start` replaces whatever is in flight.
#[derive(Clone, Debug)]
pub struct ZoomAnimator {
    task: Option<ZoomTask>,
    duration: Duration,
}

impl Default for ZoomAnimator {
    fn default() -> Self {
        Self::new(ZOOM_DURATION)
    }
}

impl ZoomAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            task: None,
            duration,
        }
    }

    pub fn start(&mut self, start_z: f32, end_z: f32, now: Duration) {
        if let Some(prev) = self.task.take() {
            log::debug!(
                "[zoom] superseding {:.2}->{:.2} with {:.2}->{:.2}",
                prev.start_z,
                prev.end_z,
                start_z,
                end_z
            );
        }
        self.task = Some(ZoomTask {
            start_z,
            end_z,
            started_at: now,
        });
    }

    pub fn cancel(&mut self) {
        self.task = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    #[inline]
    pub fn target(&self) -> Option<f32> {
        self.task.map(|t| t.end_z)
    }

    /// Depth to apply at `now`, or `None` when idle. The final step yields
    /// `end_z` exactly and retires the task.
    pub fn step(&mut self, now: Duration) -> Option<f32> {
        let task = self.task?;
        let elapsed = now.saturating_sub(task.started_at);
        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        if fraction < 1.0 {
            Some(task.start_z + (task.end_z - task.start_z) * ease_in_out_cubic(fraction))
        } else {
            self.task = None;
            Some(task.end_z)
        }
    }
}
