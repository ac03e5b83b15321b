//! Axis-aligned integer rectangles
//!
//! Screen coordinates: x grows right, y grows down, so `top` is the smaller
//! y edge. Overlap is tested on open intervals - two boxes that merely share
//! an edge do not collide, which is what lets a ball rest flush on a platform.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box: position of the top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal center, used for steering decisions.
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// This box displaced by `delta`, size unchanged.
    #[inline]
    pub fn translated(&self, delta: IVec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Open-interval intersection test; edge contact is not an overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Rect::new(100, 100, 10, 10);
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_edge_contact_is_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        // Flush on the right edge
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        // Flush below (a ball resting on a platform)
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
        // One pixel of penetration
        assert!(a.overlaps(&Rect::new(0, 9, 10, 10)));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 10, 10);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_translated() {
        let r = Rect::new(5, 5, 20, 20);
        let moved = r.translated(IVec2::new(3, -1));
        assert_eq!(moved, Rect::new(8, 4, 20, 20));
        // Original untouched
        assert_eq!(r.x, 5);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_rect() -> impl Strategy<Value = Rect> {
            (-500i32..500, -500i32..500, 1i32..200, 1i32..200)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn overlap_is_symmetric(a in arb_rect(), b in arb_rect()) {
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }

            #[test]
            fn self_overlap(a in arb_rect()) {
                prop_assert!(a.overlaps(&a));
            }

            #[test]
            fn translation_preserves_overlap(a in arb_rect(), b in arb_rect(), dx in -50i32..50, dy in -50i32..50) {
                let d = IVec2::new(dx, dy);
                prop_assert_eq!(
                    a.overlaps(&b),
                    a.translated(d).overlaps(&b.translated(d))
                );
            }
        }
    }
}
