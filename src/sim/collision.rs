//! Collision detection between axis-aligned rectangles
//!
//! Intervals are closed on both axes: rectangles whose edges only touch
//! still collide.

use super::rect::Rect;

/// Check whether two rectangles overlap on both axes
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    // X axis
    if !(a.right() >= b.left() && a.left() <= b.right()) {
        return false;
    }

    // Y axis
    a.bottom() >= b.top() && a.top() <= b.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert!(rects_overlap(&a, &b));
    }

    #[test]
    fn test_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 45.0, 45.0);
        assert!(rects_overlap(&outer, &inner));
        assert!(rects_overlap(&inner, &outer));
    }

    #[test]
    fn test_touching_edges_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge of a
        assert!(rects_overlap(&a, &Rect::new(10.0, 0.0, 20.0, 10.0)));
        // Shares the bottom edge of a
        assert!(rects_overlap(&a, &Rect::new(0.0, 10.0, 10.0, 20.0)));
        // Corner touch
        assert!(rects_overlap(&a, &Rect::new(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Same rows, disjoint columns
        assert!(!rects_overlap(&a, &Rect::new(10.5, 0.0, 20.0, 10.0)));
        // Same columns, disjoint rows
        assert!(!rects_overlap(&a, &Rect::new(0.0, 10.5, 10.0, 20.0)));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-50.0f32..150.0, -50.0f32..150.0, 0.0f32..60.0, 0.0f32..60.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
        }

        #[test]
        fn prop_rect_overlaps_itself(a in rect_strategy()) {
            prop_assert!(rects_overlap(&a, &a));
        }
    }
}
