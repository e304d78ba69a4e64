//! By-value position animation.

use crate::TimingCurve;

/// Slack applied before rounding up the frame count, so that durations which
/// are whole multiples of the frame interval do not gain an extra frame from
/// float noise.
const FRAME_COUNT_SLACK: f64 = 1e-9;

/// Largest tick count a [`Frames`] iterator can cover, leaving room for the
/// final frame in a `usize` length.
const MAX_TICKS: usize = usize::MAX - 1;

/// Moves a value by a fixed amount over a duration, eased by a timing curve.
///
/// The animation runs for `0 <= elapsed <= duration`. Once it is over, the
/// offset either holds at `by_value` (fill forward, the default) or snaps back
/// to zero as if the animation had been removed.
///
/// # Examples
///
/// ```
/// use easewright::{PositionAnimation, Preset};
///
/// let animation = PositionAnimation::new(Preset::EaseInEaseOut.curve(), 300.0, 2.0);
///
/// assert_eq!(animation.offset_at(0.0), 0.0);
/// assert!((animation.offset_at(1.0) - 150.0).abs() < 0.1);
/// assert_eq!(animation.offset_at(2.0), 300.0);
/// assert_eq!(animation.offset_at(5.0), 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionAnimation {
    curve: TimingCurve,
    by_value: f64,
    duration: f64,
    fill_forward: bool,
}

impl PositionAnimation {
    /// Creates an animation that holds its final value when done.
    ///
    /// # Arguments
    ///
    /// * `curve` - Timing function applied to elapsed time
    /// * `by_value` - Total displacement, in drawing units
    /// * `duration` - Length in seconds (negative or non-finite is treated as 0)
    pub fn new(curve: TimingCurve, by_value: f64, duration: f64) -> Self {
        Self {
            curve,
            by_value,
            duration: if duration.is_finite() {
                duration.max(0.0)
            } else {
                0.0
            },
            fill_forward: true,
        }
    }

    /// Sets whether the final value is held after the animation ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use easewright::{PositionAnimation, TimingCurve};
    ///
    /// let animation = PositionAnimation::new(TimingCurve::default(), 100.0, 1.0)
    ///     .with_fill_forward(false);
    /// assert_eq!(animation.offset_at(1.5), 0.0);
    /// ```
    pub fn with_fill_forward(mut self, fill_forward: bool) -> Self {
        self.fill_forward = fill_forward;
        self
    }

    pub fn curve(&self) -> &TimingCurve {
        &self.curve
    }

    pub fn by_value(&self) -> f64 {
        self.by_value
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn fill_forward(&self) -> bool {
        self.fill_forward
    }

    /// Eased progress in the animation at `elapsed` seconds.
    ///
    /// Zero before the start and one from the end on. A zero-length
    /// animation is complete as soon as it starts.
    pub fn progress_at(&self, elapsed: f64) -> f64 {
        if elapsed < 0.0 {
            return 0.0;
        }
        if self.duration == 0.0 {
            return 1.0;
        }
        self.curve.evaluate(elapsed / self.duration)
    }

    /// Returns true once `elapsed` is past the end of the animation.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed > self.duration
    }

    /// Displacement at `elapsed` seconds.
    pub fn offset_at(&self, elapsed: f64) -> f64 {
        if self.is_finished(elapsed) {
            return if self.fill_forward { self.by_value } else { 0.0 };
        }
        self.by_value * self.progress_at(elapsed)
    }

    /// Samples the running animation at a fixed frame rate.
    ///
    /// Frames start at time zero and the last one lands exactly on the end.
    /// A frame rate that is not positive and finite produces only the final
    /// frame. The frame count saturates at `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use easewright::{PositionAnimation, Preset};
    ///
    /// let animation = PositionAnimation::new(Preset::Linear.curve(), 10.0, 1.0);
    /// let frames: Vec<_> = animation.frames(4.0).collect();
    ///
    /// assert_eq!(frames.len(), 5);
    /// assert_eq!(frames[0].offset, 0.0);
    /// assert_eq!(frames[4].time, 1.0);
    /// assert_eq!(frames[4].offset, 10.0);
    /// ```
    pub fn frames(&self, frame_rate: f64) -> Frames {
        let ticks = if frame_rate > 0.0 && frame_rate.is_finite() {
            let exact = self.duration * frame_rate;
            ((exact - FRAME_COUNT_SLACK).ceil().max(0.0) as usize).min(MAX_TICKS)
        } else {
            0
        };

        Frames {
            animation: *self,
            frame_interval: if ticks == 0 { 0.0 } else { frame_rate.recip() },
            next: 0,
            ticks,
        }
    }
}

/// One sampled frame of a [`PositionAnimation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Seconds since the animation started
    pub time: f64,
    /// Eased progress, from 0 to 1 for ordinary curves
    pub progress: f64,
    /// Displacement at this frame
    pub offset: f64,
}

/// Iterator over the frames of a [`PositionAnimation`].
///
/// Created by [`PositionAnimation::frames`].
#[derive(Debug, Clone)]
pub struct Frames {
    animation: PositionAnimation,
    frame_interval: f64,
    next: usize,
    ticks: usize,
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next > self.ticks {
            return None;
        }

        let time = if self.next == self.ticks {
            self.animation.duration
        } else {
            (self.next as f64 * self.frame_interval).min(self.animation.duration)
        };
        self.next += 1;

        let progress = self.animation.progress_at(time);
        Some(Frame {
            time,
            progress,
            offset: self.animation.by_value * progress,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ticks.saturating_add(1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Preset;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_offset_before_during_after() {
        let animation = PositionAnimation::new(Preset::Linear.curve(), 200.0, 2.0);

        assert_eq!(animation.offset_at(-1.0), 0.0);
        assert_eq!(animation.offset_at(0.0), 0.0);
        assert_abs_diff_eq!(animation.offset_at(0.5), 50.0, epsilon = 0.01);
        assert_abs_diff_eq!(animation.offset_at(1.0), 100.0, epsilon = 0.01);
        assert_eq!(animation.offset_at(2.0), 200.0);
        assert_eq!(animation.offset_at(10.0), 200.0);
    }

    #[test]
    fn test_without_fill_forward_snaps_back() {
        let animation =
            PositionAnimation::new(Preset::EaseOut.curve(), 80.0, 1.0).with_fill_forward(false);

        assert_eq!(animation.offset_at(1.0), 80.0);
        assert!(animation.is_finished(1.01));
        assert_eq!(animation.offset_at(1.01), 0.0);
    }

    #[test]
    fn test_negative_by_value_moves_backwards() {
        let animation = PositionAnimation::new(TimingCurve::default(), -50.0, 1.0);
        assert!(animation.offset_at(0.5) < 0.0);
        assert_eq!(animation.offset_at(1.0), -50.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let animation = PositionAnimation::new(TimingCurve::default(), 30.0, -2.0);
        assert_eq!(animation.duration(), 0.0);
        assert_eq!(animation.progress_at(0.0), 1.0);
        assert_eq!(animation.offset_at(0.0), 30.0);

        let frames: Vec<_> = animation.frames(60.0).collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].offset, 30.0);
    }

    #[test]
    fn test_frames_at_sixty_fps() {
        let animation = PositionAnimation::new(Preset::EaseInEaseOut.curve(), 100.0, 1.0);
        let frames = animation.frames(60.0);
        assert_eq!(frames.len(), 61);

        let frames: Vec<_> = frames.collect();
        assert_eq!(frames[0].time, 0.0);
        assert_eq!(frames[0].offset, 0.0);
        assert_eq!(frames[60].time, 1.0);
        assert_eq!(frames[60].offset, 100.0);

        for pair in frames.windows(2) {
            assert!(pair[1].time > pair[0].time);
            assert!(pair[1].offset >= pair[0].offset - 1e-9);
        }
    }

    #[test]
    fn test_frames_do_not_overshoot_duration() {
        let animation = PositionAnimation::new(Preset::Linear.curve(), 1.0, 0.1);
        let frames: Vec<_> = animation.frames(30.0).collect();

        assert_eq!(frames.len(), 4);
        assert_eq!(frames.last().map(|f| f.time), Some(0.1));
        assert!(frames.iter().all(|f| f.time <= 0.1));
    }

    #[test]
    fn test_invalid_frame_rate_yields_final_frame() {
        let animation = PositionAnimation::new(Preset::Linear.curve(), 5.0, 1.0);
        for rate in [0.0, -30.0, f64::NAN] {
            let frames: Vec<_> = animation.frames(rate).collect();
            assert_eq!(frames.len(), 1);
            assert_eq!(frames[0].time, 1.0);
            assert_eq!(frames[0].offset, 5.0);
        }
    }

    #[test]
    fn test_non_finite_duration_completes_immediately() {
        for duration in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let animation = PositionAnimation::new(TimingCurve::default(), 12.0, duration);
            assert_eq!(animation.duration(), 0.0);
            assert_eq!(animation.offset_at(0.0), 12.0);

            let frames = animation.frames(60.0);
            assert_eq!(frames.len(), 1);
            assert_eq!(frames.last().map(|f| f.time), Some(0.0));
        }
    }

    #[test]
    fn test_huge_frame_count_saturates() {
        let animation = PositionAnimation::new(Preset::Linear.curve(), 10.0, 1e300);
        let mut frames = animation.frames(60.0);
        assert_eq!(frames.len(), usize::MAX);

        let first = frames.next().map(|f| f.time);
        assert_eq!(first, Some(0.0));
        assert_eq!(frames.len(), usize::MAX - 1);
    }
}
