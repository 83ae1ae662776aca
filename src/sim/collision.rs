//! Circle vs axis-aligned box collision
//!
//! Uses the clamped closest-point method: clamp the vector from box centre to
//! ball centre onto the box half-extents, and compare the distance from the
//! resulting point to the ball centre against the radius.
//!
//! Transforms store the top-left corner of their quad, so the ball centre is
//! taken as `translation + radius` on both axes and the box centre as
//! `translation + scale / 2`.

use glam::Vec2;

use crate::ecs::{Ball, Transform};

/// Dominant axis of a collision, in compass order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Fixed tie-break order
    pub const COMPASS: [(Direction, Vec2); 4] = [
        (Direction::Up, Vec2::new(0.0, 1.0)),
        (Direction::Right, Vec2::new(1.0, 0.0)),
        (Direction::Down, Vec2::new(0.0, -1.0)),
        (Direction::Left, Vec2::new(-1.0, 0.0)),
    ];

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Dominant direction of `penetration` (meaningless when `hit` is false)
    pub direction: Direction,
    /// Vector from the ball centre to the closest point on the box
    pub penetration: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            direction: Direction::Up,
            penetration: Vec2::ZERO,
        }
    }
}

/// Compass direction with the greatest dot product against `target`.
/// Ties go to the earlier entry of [`Direction::COMPASS`]; a zero vector
/// yields `Up`.
pub fn vector_direction(target: Vec2) -> Direction {
    let normalized = target.normalize_or_zero();
    let mut best = Direction::Up;
    let mut max = 0.0;
    for (direction, axis) in Direction::COMPASS {
        let dot = normalized.dot(axis);
        if dot > max {
            max = dot;
            best = direction;
        }
    }
    best
}

/// Check a ball against a box given in raw geometry.
/// `ball_corner` is the ball transform's translation.
pub fn circle_box_collision(
    ball_corner: Vec2,
    radius: f32,
    box_corner: Vec2,
    box_size: Vec2,
) -> CollisionResult {
    let center = ball_corner + Vec2::splat(radius);
    let half_extents = box_size / 2.0;
    let box_center = box_corner + half_extents;

    let diff = center - box_center;
    let clamped = diff.clamp(-half_extents, half_extents);
    let closest = box_center + clamped;
    let penetration = closest - center;

    if penetration.length() <= radius {
        CollisionResult {
            hit: true,
            direction: vector_direction(penetration),
            penetration,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Check the ball entity's components against an obstacle transform
pub fn check_collision(obstacle: &Transform, ball_transform: &Transform, ball: &Ball) -> CollisionResult {
    circle_box_collision(
        ball_transform.translation.truncate(),
        ball.radius,
        obstacle.translation.truncate(),
        obstacle.scale.truncate(),
    )
}

/// Push the ball out of an obstacle along the hit axis, reflect that axis
/// of its velocity and scale the whole velocity by `speedup`.
pub fn resolve_bounce(
    collision: &CollisionResult,
    ball_transform: &mut Transform,
    ball: &mut Ball,
    speedup: f32,
) {
    if collision.direction.is_horizontal() {
        ball.velocity.x = -ball.velocity.x;
        let depth = ball.radius - collision.penetration.x.abs();
        // Left means the obstacle lies on the ball's left: push right
        ball_transform.translation.x += if collision.direction == Direction::Left {
            depth
        } else {
            -depth
        };
    } else {
        ball.velocity.y = -ball.velocity.y;
        let depth = ball.radius - collision.penetration.y.abs();
        // Up is +y, which is below the ball on screen: push toward -y
        ball_transform.translation.y += if collision.direction == Direction::Up {
            -depth
        } else {
            depth
        };
    }
    ball.velocity *= speedup;
}

/// Re-steer a ball off the paddle. Horizontal velocity follows the strike
/// offset from the paddle centre, vertical velocity is forced upward, and
/// the pre-bounce speed is kept.
pub fn paddle_bounce(
    paddle: &Transform,
    ball_transform: &Transform,
    ball: &mut Ball,
    base_horizontal_speed: f32,
    strength: f32,
) {
    let half_width = paddle.scale.x / 2.0;
    // A zero-width paddle has no offset to steer by; treat it as a centre hit
    let percentage = if half_width > 0.0 {
        let center_board = paddle.translation.x + half_width;
        let distance = (ball_transform.translation.x + ball.radius) - center_board;
        distance / half_width
    } else {
        0.0
    };

    let speed = ball.velocity.length();
    let steered = Vec2::new(
        base_horizontal_speed * percentage * strength,
        -ball.velocity.y.abs(),
    );
    if let Some(direction) = steered.try_normalize() {
        ball.velocity = direction * speed;
    } else {
        ball.velocity.y = -ball.velocity.y.abs();
    }
}

/// Screen-space rectangle with a top-left origin, used for HUD hit tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }
}
