//! Collision detection between axis-aligned rectangles

use super::rect::Rect;

/// True iff the open interiors of `a` and `b` intersect on both axes.
///
/// Rectangles that only share an edge or a corner do not overlap.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x() < b.x() + b.w()
        && a.x() + a.w() > b.x()
        && a.y() < b.y() + b.h()
        && a.y() + a.h() > b.y()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(a, b));
        assert!(!overlaps(b, a));

        // Vertical neighbour
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(a, c));
    }

    #[test]
    fn test_shared_corner_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(a, b));
    }

    #[test]
    fn test_partial_and_contained_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(a, Rect::new(9.5, 9.5, 10.0, 10.0)));
        assert!(overlaps(a, Rect::new(2.0, 2.0, 1.0, 1.0)));
        assert!(overlaps(a, a));
    }

    #[test]
    fn test_disjoint_on_one_axis() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // x ranges overlap, y ranges do not
        assert!(!overlaps(a, Rect::new(5.0, 50.0, 10.0, 10.0)));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(overlaps(a, b), overlaps(b, a));
        }

        #[test]
        fn prop_edge_neighbours_never_overlap(a in rect_strategy(), w in 0.0f32..200.0) {
            let right = Rect::new(a.x() + a.w(), a.y(), w, a.h());
            prop_assert!(!overlaps(a, right));
        }
    }
}
