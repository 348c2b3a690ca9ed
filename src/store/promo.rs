//! Promo Banner
//!
//! The animated marketing banner hanging over the entrance. Its visual
//! state (vertical offset, scale, opacity) is driven by a keyframe
//! timeline scrubbed with the scroll wheel while the cursor rests on the
//! banner - the storefront's stand-in for a scroll-driven landing page.

use glam::Vec3;

use crate::animation::{Easing, Segment, Timeline};

use crate::store::types::Aabb;

/// Banner half width.
pub const BANNER_HALF_WIDTH: f32 = 2.5;
/// Banner half height.
pub const BANNER_HALF_HEIGHT: f32 = 1.0;
/// Timeline progress per scroll wheel tick.
pub const SCRUB_PER_TICK: f32 = 0.08;

/// Vertical travel of the slide-in, in world units.
const SLIDE_DROP: f32 = 1.5;
/// Scale range of the pop segment.
const SCALE_FROM: f32 = 0.6;
/// Opacity floor before the fade-in completes.
const FADE_FROM: f32 = 0.15;

/// Animated visual state the timeline writes into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromoVisual {
    /// Vertical offset from the resting position (starts raised).
    pub offset_y: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Alpha of the banner quad.
    pub opacity: f32,
}

impl Default for PromoVisual {
    fn default() -> Self {
        // Matches the timeline at progress 0
        Self {
            offset_y: SLIDE_DROP,
            scale: SCALE_FROM,
            opacity: FADE_FROM,
        }
    }
}

fn slide(v: &mut PromoVisual, t: f32) {
    v.offset_y = SLIDE_DROP * (1.0 - t);
}

fn pop(v: &mut PromoVisual, t: f32) {
    v.scale = SCALE_FROM + (1.0 - SCALE_FROM) * t;
}

fn fade(v: &mut PromoVisual, t: f32) {
    v.opacity = FADE_FROM + (1.0 - FADE_FROM) * t;
}

/// Build the marketing sequence: drop in, pop to full size, fade to
/// full opacity. Segments overlap deliberately so the motion reads as one
/// gesture rather than three steps.
fn marketing_timeline() -> Timeline<PromoVisual> {
    Timeline::new(vec![
        Segment {
            start: 0.0,
            end: 0.5,
            easing: Easing::QuadraticOut,
            apply: slide,
        },
        Segment {
            start: 0.2,
            end: 0.8,
            easing: Easing::Smoothstep,
            apply: pop,
        },
        Segment {
            start: 0.4,
            end: 1.0,
            easing: Easing::Linear,
            apply: fade,
        },
    ])
}

/// The promo banner: resting placement plus scroll-driven visual state.
pub struct PromoBanner {
    /// Center of the banner quad at rest (fully revealed).
    pub rest_center: Vec3,
    /// Current animated visual state.
    pub visual: PromoVisual,
    timeline: Timeline<PromoVisual>,
}

impl PromoBanner {
    pub fn new(rest_center: Vec3) -> Self {
        let mut banner = Self {
            rest_center,
            visual: PromoVisual::default(),
            timeline: marketing_timeline(),
        };
        // Pin the visual state to progress 0
        banner.timeline.seek(0.0, &mut banner.visual);
        banner
    }

    /// Scrub the timeline by scroll wheel ticks (positive = reveal).
    pub fn scroll(&mut self, ticks: f32) {
        self.timeline
            .advance(ticks * SCRUB_PER_TICK, &mut self.visual);
    }

    /// Current timeline progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }

    /// Current center of the rendered quad.
    pub fn center(&self) -> Vec3 {
        self.rest_center + Vec3::new(0.0, self.visual.offset_y, 0.0)
    }

    /// Scaled half extents of the rendered quad.
    pub fn half_size(&self) -> (f32, f32) {
        (
            BANNER_HALF_WIDTH * self.visual.scale,
            BANNER_HALF_HEIGHT * self.visual.scale,
        )
    }

    /// Pick volume for scroll routing. Uses the resting placement and full
    /// size so the banner stays hoverable while tucked away.
    pub fn pick_aabb(&self) -> Aabb {
        Aabb::from_center(
            self.rest_center + Vec3::new(0.0, SLIDE_DROP * 0.5, 0.0),
            Vec3::new(BANNER_HALF_WIDTH, BANNER_HALF_HEIGHT + SLIDE_DROP * 0.5, 0.3),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_banner_is_tucked_away() {
        let banner = PromoBanner::new(Vec3::new(0.0, 3.0, 7.0));
        assert_eq!(banner.progress(), 0.0);
        assert_eq!(banner.visual.offset_y, SLIDE_DROP);
        assert_eq!(banner.visual.scale, SCALE_FROM);
        assert_eq!(banner.visual.opacity, FADE_FROM);
    }

    #[test]
    fn test_full_scrub_reveals_banner() {
        let mut banner = PromoBanner::new(Vec3::new(0.0, 3.0, 7.0));
        banner.scroll(1.0 / SCRUB_PER_TICK + 1.0);
        assert_eq!(banner.progress(), 1.0);
        assert!((banner.visual.offset_y).abs() < 1e-5);
        assert!((banner.visual.scale - 1.0).abs() < 1e-5);
        assert!((banner.visual.opacity - 1.0).abs() < 1e-5);
        assert_eq!(banner.center(), banner.rest_center);
    }

    #[test]
    fn test_scrub_back_restores_tucked_state() {
        let mut banner = PromoBanner::new(Vec3::ZERO);
        banner.scroll(20.0);
        banner.scroll(-40.0);
        assert_eq!(banner.progress(), 0.0);
        assert_eq!(banner.visual, PromoVisual::default());
    }

    #[test]
    fn test_partial_scrub_moves_all_tracks_forward() {
        let mut banner = PromoBanner::new(Vec3::ZERO);
        banner.scroll(0.6 / SCRUB_PER_TICK); // progress 0.6: all windows active
        assert!(banner.visual.offset_y < SLIDE_DROP);
        assert!(banner.visual.scale > SCALE_FROM && banner.visual.scale < 1.0);
        assert!(banner.visual.opacity > FADE_FROM && banner.visual.opacity < 1.0);
    }

    #[test]
    fn test_half_size_scales() {
        let mut banner = PromoBanner::new(Vec3::ZERO);
        banner.scroll(100.0);
        let (hw, hh) = banner.half_size();
        assert!((hw - BANNER_HALF_WIDTH).abs() < 1e-5);
        assert!((hh - BANNER_HALF_HEIGHT).abs() < 1e-5);
    }
}
