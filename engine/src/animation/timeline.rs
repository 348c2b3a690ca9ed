//! Keyframe Timeline
//!
//! A declarative animation timeline: an explicit finite sequence of
//! keyframe segments, each covering a window of a scalar progress axis
//! and applying its eased local progress to a target through a callback.
//!
//! Seeking is stateless with respect to direction: every segment is
//! applied on every seek (segments before their window receive 0, after
//! it 1), so scrubbing backwards restores earlier keyframes exactly.

use crate::animation::easing::Easing;

/// One keyframe segment of a [`Timeline`].
///
/// Covers `[start, end]` of the global progress axis. When the timeline
/// seeks to a global progress `p`, the segment computes its local
/// progress `(p - start) / (end - start)`, clamps it to [0, 1], eases it,
/// and hands it to `apply`.
pub struct Segment<T> {
    /// Global progress where this segment begins.
    pub start: f32,
    /// Global progress where this segment ends. Must be > `start`.
    pub end: f32,
    /// Easing curve applied to the local progress.
    pub easing: Easing,
    /// Writes the eased local progress into the animation target.
    pub apply: fn(&mut T, f32),
}

impl<T> Segment<T> {
    /// Eased local progress of this segment at global progress `p`.
    fn local_progress(&self, p: f32) -> f32 {
        let span = (self.end - self.start).max(f32::EPSILON);
        self.easing.evaluate((p - self.start) / span)
    }
}

/// A finite sequence of keyframe segments driven by a scalar progress.
///
/// The progress axis is [0, 1]; out-of-range seeks clamp. Segments may
/// overlap (later segments are applied after earlier ones) but are
/// typically laid out back to back.
pub struct Timeline<T> {
    segments: Vec<Segment<T>>,
    progress: f32,
}

impl<T> Timeline<T> {
    /// Create a timeline from its keyframe segments.
    pub fn new(segments: Vec<Segment<T>>) -> Self {
        Self {
            segments,
            progress: 0.0,
        }
    }

    /// Current global progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Seek to an absolute global progress and apply every segment to the
    /// target. `progress` is clamped to [0, 1].
    pub fn seek(&mut self, progress: f32, target: &mut T) {
        self.progress = progress.clamp(0.0, 1.0);
        for segment in &self.segments {
            (segment.apply)(target, segment.local_progress(self.progress));
        }
    }

    /// Move the global progress by a signed delta and apply.
    pub fn advance(&mut self, delta: f32, target: &mut T) {
        self.seek(self.progress + delta, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Banner {
        offset: f32,
        fade: f32,
    }

    fn slide(target: &mut Banner, t: f32) {
        target.offset = 10.0 * t;
    }

    fn fade(target: &mut Banner, t: f32) {
        target.fade = t;
    }

    fn two_segment_timeline() -> Timeline<Banner> {
        Timeline::new(vec![
            Segment {
                start: 0.0,
                end: 0.5,
                easing: Easing::Linear,
                apply: slide,
            },
            Segment {
                start: 0.5,
                end: 1.0,
                easing: Easing::Linear,
                apply: fade,
            },
        ])
    }

    #[test]
    fn test_seek_applies_segments_in_window() {
        let mut timeline = two_segment_timeline();
        let mut banner = Banner::default();

        timeline.seek(0.25, &mut banner);
        assert!((banner.offset - 5.0).abs() < 1e-5);
        assert_eq!(banner.fade, 0.0, "second segment not yet started");
    }

    #[test]
    fn test_completed_segments_pinned_at_end() {
        let mut timeline = two_segment_timeline();
        let mut banner = Banner::default();

        timeline.seek(0.75, &mut banner);
        assert!((banner.offset - 10.0).abs() < 1e-5, "first segment done");
        assert!((banner.fade - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_scrub_backwards_restores_state() {
        let mut timeline = two_segment_timeline();
        let mut banner = Banner::default();

        timeline.seek(1.0, &mut banner);
        timeline.seek(0.25, &mut banner);

        let mut fresh = Banner::default();
        let mut fresh_timeline = two_segment_timeline();
        fresh_timeline.seek(0.25, &mut fresh);
        assert_eq!(banner, fresh);
    }

    #[test]
    fn test_progress_clamped() {
        let mut timeline = two_segment_timeline();
        let mut banner = Banner::default();

        timeline.seek(3.0, &mut banner);
        assert_eq!(timeline.progress(), 1.0);
        assert!((banner.offset - 10.0).abs() < 1e-5);
        assert!((banner.fade - 1.0).abs() < 1e-5);

        timeline.seek(-2.0, &mut banner);
        assert_eq!(timeline.progress(), 0.0);
        assert_eq!(banner.offset, 0.0);
        assert_eq!(banner.fade, 0.0);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut timeline = two_segment_timeline();
        let mut banner = Banner::default();

        timeline.advance(0.2, &mut banner);
        timeline.advance(0.2, &mut banner);
        assert!((timeline.progress() - 0.4).abs() < 1e-5);
        assert!((banner.offset - 8.0).abs() < 1e-5);

        timeline.advance(-0.4, &mut banner);
        assert_eq!(timeline.progress(), 0.0);
        assert_eq!(banner.offset, 0.0);
    }

    #[test]
    fn test_monotone_within_segment() {
        let mut timeline = two_segment_timeline();
        let mut banner = Banner::default();

        let mut last = -1.0;
        for i in 0..=10 {
            timeline.seek(i as f32 * 0.05, &mut banner);
            assert!(banner.offset >= last);
            last = banner.offset;
        }
    }

    #[test]
    fn test_eased_segment() {
        let mut timeline = Timeline::new(vec![Segment {
            start: 0.0,
            end: 1.0,
            easing: Easing::QuadraticIn,
            apply: slide,
        }]);
        let mut banner = Banner::default();
        timeline.seek(0.5, &mut banner);
        assert!((banner.offset - 2.5).abs() < 1e-5); // 10 * 0.5^2
    }
}
