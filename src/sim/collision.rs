//! Collision detection between the circular ball and axis-aligned rectangles.

use glam::Vec2;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Check whether a circle overlaps a rectangle.
///
/// Closest-point test: clamp the circle center into the rectangle and
/// compare the remaining distance against the radius. A circle exactly
/// tangent to a face counts as overlapping; callers gate on approach
/// direction to avoid re-triggering.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = Vec2::new(
        center.x.clamp(rect.x, rect.right()),
        center.y.clamp(rect.y, rect.bottom()),
    );
    center.distance_squared(closest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_from_the_side() {
        let rect = Rect::new(100.0, 100.0, 25.0, 250.0);

        // Ball center 20px right of the rect face, radius 30
        let ball = Vec2::new(145.0, 200.0);
        assert!(circle_rect_overlap(ball, 30.0, &rect));

        // Ball center 40px away - clear miss
        let ball = Vec2::new(165.0, 200.0);
        assert!(!circle_rect_overlap(ball, 30.0, &rect));
    }

    #[test]
    fn test_overlap_at_corner_uses_distance() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        // Diagonal distance from (10,10) is ~14.14
        let ball = Vec2::new(20.0, 20.0);
        assert!(circle_rect_overlap(ball, 15.0, &rect));
        assert!(!circle_rect_overlap(ball, 14.0, &rect));
    }

    #[test]
    fn test_center_inside_rect_always_overlaps() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(circle_rect_overlap(Vec2::new(50.0, 50.0), 1.0, &rect));
    }

    #[test]
    fn test_tangent_counts_as_overlap() {
        let rect = Rect::new(100.0, 0.0, 25.0, 250.0);

        // Ball exactly tangent to the right face
        let ball = Vec2::new(rect.right() + 30.0, 100.0);
        assert!(circle_rect_overlap(ball, 30.0, &rect));
    }
}
