//! Collision tests and responses for axis-aligned geometry
//!
//! The ball is treated as a point (its center) against blocks and the
//! paddle span, and as a circle against the arena walls. All wall tests
//! look at the *next* position so the ball turns around one frame before it
//! would visually touch the wall.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::config::BouncePolicy;
use crate::consts::MAX_BOUNCE_ANGLE;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict containment: points on the edge are outside
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.x && point.x < self.right() && point.y > self.y && point.y < self.bottom()
    }
}

/// Which vertical boundary the ball is about to cross
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalHit {
    /// Next step stays inside
    None,
    /// Next step goes above the ceiling
    Ceiling,
    /// Next step drops past the floor line (paddle or loss)
    Floor,
}

/// True if the next horizontal step would push the ball into a side wall
pub fn hits_side_wall(pos: Vec2, vel: Vec2, radius: f32, arena_width: f32) -> bool {
    let next_x = pos.x + vel.x;
    next_x > arena_width - radius || next_x < radius
}

/// Classify the next vertical step against ceiling and floor
pub fn vertical_hit(pos: Vec2, vel: Vec2, radius: f32, arena_height: f32) -> VerticalHit {
    let next_y = pos.y + vel.y;
    if next_y < radius {
        VerticalHit::Ceiling
    } else if next_y > arena_height - radius {
        VerticalHit::Floor
    } else {
        VerticalHit::None
    }
}

/// True if `x` lies strictly within the paddle's horizontal span
pub fn over_paddle(x: f32, paddle_x: f32, paddle_width: f32) -> bool {
    x > paddle_x && x < paddle_x + paddle_width
}

/// Offset of `x` from the paddle center, normalized so the edges map to -1/+1
pub fn relative_hit_position(x: f32, paddle_x: f32, paddle_width: f32) -> f32 {
    let half = paddle_width / 2.0;
    (x - (paddle_x + half)) / half
}

/// Outgoing velocity after the ball meets the paddle at horizontal position `x`
pub fn paddle_bounce(
    policy: BouncePolicy,
    vel: Vec2,
    x: f32,
    paddle_x: f32,
    paddle_width: f32,
    speed: f32,
) -> Vec2 {
    match policy {
        BouncePolicy::Simple => Vec2::new(vel.x, -vel.y),
        BouncePolicy::Angled => {
            let angle = relative_hit_position(x, paddle_x, paddle_width) * MAX_BOUNCE_ANGLE;
            Vec2::new(angle.sin() * speed, -angle.cos() * speed)
        }
    }
}

/// Fold a coordinate that overshot `[min, max]` back inside by mirroring it
/// off the boundary it crossed. Returns the new coordinate and whether a
/// reflection happened.
pub fn reflect_into(value: f32, min: f32, max: f32) -> (f32, bool) {
    if value < min {
        ((2.0 * min - value).min(max), true)
    } else if value > max {
        ((2.0 * max - value).max(min), true)
    } else {
        (value, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_rect_contains_is_strict() {
        let rect = Rect::new(0.0, 0.0, 75.0, 20.0);
        assert!(rect.contains_point(Vec2::new(30.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(0.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(75.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(30.0, 20.0)));
        assert!(!rect.contains_point(Vec2::new(30.0, -1.0)));
    }

    #[test]
    fn test_side_wall_uses_next_position() {
        // 398 + 2 = 400 is still inside a 410 arena with radius 10
        assert!(!hits_side_wall(Vec2::new(398.0, 50.0), Vec2::new(2.0, 0.0), 10.0, 410.0));
        // 399 + 2 = 401 would overlap the wall
        assert!(hits_side_wall(Vec2::new(399.0, 50.0), Vec2::new(2.0, 0.0), 10.0, 410.0));
        assert!(hits_side_wall(Vec2::new(11.0, 50.0), Vec2::new(-2.0, 0.0), 10.0, 410.0));
    }

    #[test]
    fn test_vertical_hit() {
        let r = 10.0;
        assert_eq!(
            vertical_hit(Vec2::new(0.0, 11.0), Vec2::new(0.0, -2.0), r, 400.0),
            VerticalHit::Ceiling
        );
        assert_eq!(
            vertical_hit(Vec2::new(0.0, 389.0), Vec2::new(0.0, 2.0), r, 400.0),
            VerticalHit::Floor
        );
        assert_eq!(
            vertical_hit(Vec2::new(0.0, 200.0), Vec2::new(0.0, 2.0), r, 400.0),
            VerticalHit::None
        );
    }

    #[test]
    fn test_over_paddle_excludes_edges() {
        assert!(over_paddle(100.0, 50.0, 75.0));
        assert!(!over_paddle(50.0, 50.0, 75.0));
        assert!(!over_paddle(125.0, 50.0, 75.0));
    }

    #[test]
    fn test_simple_bounce_flips_dy_only() {
        let out = paddle_bounce(BouncePolicy::Simple, Vec2::new(2.0, 2.0), 60.0, 50.0, 75.0, 5.0);
        assert_eq!(out, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_angled_bounce_left_edge() {
        let speed = 4.0;
        let out = paddle_bounce(BouncePolicy::Angled, Vec2::new(2.0, 2.0), 50.0, 50.0, 75.0, speed);
        assert!((out.x - (-FRAC_PI_4).sin() * speed).abs() < 1e-5);
        assert!((out.y - -(-FRAC_PI_4).cos() * speed).abs() < 1e-5);
        assert!(out.y < 0.0);
        assert!((out.length() - speed).abs() < 1e-4);
    }

    #[test]
    fn test_angled_bounce_center_goes_straight_up() {
        let out = paddle_bounce(BouncePolicy::Angled, Vec2::new(-3.0, 2.0), 87.5, 50.0, 75.0, 3.0);
        assert!(out.x.abs() < 1e-6);
        assert!((out.y + 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_relative_hit_position_range() {
        assert!((relative_hit_position(50.0, 50.0, 75.0) + 1.0).abs() < 1e-6);
        assert!((relative_hit_position(125.0, 50.0, 75.0) - 1.0).abs() < 1e-6);
        assert!(relative_hit_position(87.5, 50.0, 75.0).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_into() {
        assert_eq!(reflect_into(9.0, 10.0, 400.0), (11.0, true));
        assert_eq!(reflect_into(401.0, 10.0, 400.0), (399.0, true));
        assert_eq!(reflect_into(200.0, 10.0, 400.0), (200.0, false));
    }
}
