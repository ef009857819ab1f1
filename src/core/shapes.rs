//! Shape catalog and rotation transforms.
//!
//! Each shape is 4 cell-offsets in a fixed 4x4 local frame. Rotation maps the
//! offset list within that frame and never touches the board origin, so it
//! composes freely with collision checks.

use crate::core::rng::SimpleRng;
use crate::types::{ShapeKind, FRAME_SIZE};

/// Offset of one cell relative to the piece origin, in the 4x4 frame.
pub type CellOffset = (i8, i8);

/// The 4 cell-offsets making up a shape.
pub type ShapeOffsets = [CellOffset; 4];

/// Get the catalog offsets for a shape kind (spawn orientation).
pub fn offsets(kind: ShapeKind) -> ShapeOffsets {
    match kind {
        ShapeKind::L => [(1, 0), (2, 0), (1, 1), (1, 2)],
        ShapeKind::Z => [(0, 1), (1, 1), (1, 0), (2, 0)],
        ShapeKind::T => [(1, 0), (0, 1), (1, 1), (2, 1)],
        ShapeKind::S => [(0, 0), (1, 0), (0, 1), (1, 1)],
        ShapeKind::I => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// Rotate a shape clockwise within its 4x4 frame: (dx, dy) -> (3-dy, dx).
///
/// Pure and order-preserving; applying it four times yields the input.
pub fn rotate_cw(shape: ShapeOffsets) -> ShapeOffsets {
    shape.map(|(dx, dy)| (FRAME_SIZE - 1 - dy, dx))
}

/// Rotate a shape counter-clockwise: (dx, dy) -> (dy, 3-dx).
///
/// Inverse of [`rotate_cw`].
pub fn rotate_ccw(shape: ShapeOffsets) -> ShapeOffsets {
    shape.map(|(dx, dy)| (dy, FRAME_SIZE - 1 - dx))
}

/// Draw a shape kind uniformly at random from the catalog.
pub fn random_kind(rng: &mut SimpleRng) -> ShapeKind {
    ShapeKind::ALL[rng.next_range(ShapeKind::ALL.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_offsets_stay_in_frame() {
        for kind in ShapeKind::ALL {
            for (dx, dy) in offsets(kind) {
                assert!((0..FRAME_SIZE).contains(&dx), "{:?} dx out of frame", kind);
                assert!((0..FRAME_SIZE).contains(&dy), "{:?} dy out of frame", kind);
            }
        }
    }

    #[test]
    fn rotation_stays_in_frame() {
        for kind in ShapeKind::ALL {
            let mut shape = offsets(kind);
            for _ in 0..4 {
                shape = rotate_cw(shape);
                for (dx, dy) in shape {
                    assert!((0..FRAME_SIZE).contains(&dx));
                    assert!((0..FRAME_SIZE).contains(&dy));
                }
            }
        }
    }

    #[test]
    fn four_clockwise_rotations_are_identity() {
        for kind in ShapeKind::ALL {
            let original = offsets(kind);
            let mut shape = original;
            for _ in 0..4 {
                shape = rotate_cw(shape);
            }
            // Order-preserving identity, not just the same cell set.
            assert_eq!(shape, original, "{:?}", kind);
        }
    }

    #[test]
    fn ccw_inverts_cw() {
        for kind in ShapeKind::ALL {
            let original = offsets(kind);
            assert_eq!(rotate_ccw(rotate_cw(original)), original);
            assert_eq!(rotate_cw(rotate_ccw(original)), original);
        }
    }

    #[test]
    fn i_piece_rotates_to_horizontal_bar() {
        // I is a vertical bar in column 1; one cw rotation lies it across row 1.
        let rotated = rotate_cw(offsets(ShapeKind::I));
        assert_eq!(rotated, [(3, 1), (2, 1), (1, 1), (0, 1)]);
    }

    #[test]
    fn random_kind_covers_catalog() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 5];
        for _ in 0..200 {
            let kind = random_kind(&mut rng);
            let idx = ShapeKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "200 draws should hit all 5 kinds");
    }
}
