// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typographic signatures and their comparison.

/// Mean relative deviation below which two signatures count as the same
/// rendered face.
///
/// Calibrated against commonly installed desktop fonts; hosts with unusual
/// rendering (headless rasterizers, embedded engines) may need a different
/// value via [`ProbeOptions`](crate::ProbeOptions).
pub const DEFAULT_TOLERANCE: f32 = 0.02;

/// Width and height metrics extracted by rendering fixed sample strings with
/// a font stack at a fixed size.
///
/// A signature has no identity beyond its values; two stacks that resolve to
/// the same face produce (near-)equal signatures.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Signature {
    /// Glyph box height of a lowercase `x` run.
    pub x_height: f32,
    /// Glyph box height of an uppercase `X` run.
    pub cap_height: f32,
    /// Per-glyph advance of an `m` run.
    pub em_width: f32,
    /// Per-glyph advance of an `n` run.
    pub normal_width: f32,
}

impl Signature {
    /// Returns true if `self` and `other` deviate by at most `tolerance` on
    /// average, relative to their shared bases.
    ///
    /// Height deltas are normalized against the larger of the two cap
    /// heights, width deltas against the larger of the two em widths; both
    /// bases are floored at 1.0 so degenerate measurements cannot blow up
    /// the score. The predicate is symmetric in its arguments.
    pub fn is_close_to(&self, other: &Self, tolerance: f32) -> bool {
        let height_base = self.cap_height.max(other.cap_height).max(1.0);
        let width_base = self.em_width.max(other.em_width).max(1.0);
        let score = ((self.x_height - other.x_height).abs() / height_base
            + (self.cap_height - other.cap_height).abs() / height_base
            + (self.em_width - other.em_width).abs() / width_base
            + (self.normal_width - other.normal_width).abs() / width_base)
            / 4.0;
        score <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::{Signature, DEFAULT_TOLERANCE};

    fn signature(x: f32, cap: f32, em: f32, normal: f32) -> Signature {
        Signature {
            x_height: x,
            cap_height: cap,
            em_width: em,
            normal_width: normal,
        }
    }

    #[test]
    fn identical_signatures_are_close() {
        let a = signature(16.0, 23.0, 19.5, 12.25);
        assert!(a.is_close_to(&a, DEFAULT_TOLERANCE));
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // One delta of 8 against a cap height base of 100 averages to
        // exactly the 2% default.
        let a = signature(58.0, 100.0, 50.0, 40.0);
        let b = signature(50.0, 100.0, 50.0, 40.0);
        assert!(a.is_close_to(&b, DEFAULT_TOLERANCE));

        let c = signature(58.04, 100.0, 50.0, 40.0);
        assert!(
            !c.is_close_to(&b, DEFAULT_TOLERANCE),
            "a 2.01% mean deviation must not count as close"
        );
    }

    #[test]
    fn comparison_is_symmetric() {
        let cases = [
            (signature(58.0, 100.0, 50.0, 40.0), signature(50.0, 100.0, 50.0, 40.0)),
            (signature(14.0, 20.0, 8.0, 8.0), signature(16.0, 24.0, 9.0, 8.5)),
            (signature(0.0, 0.0, 0.0, 0.0), signature(1.0, 1.0, 1.0, 1.0)),
            (signature(30.0, 44.0, 21.0, 17.0), signature(30.2, 44.1, 21.1, 17.0)),
        ];
        for (a, b) in cases {
            assert_eq!(
                a.is_close_to(&b, DEFAULT_TOLERANCE),
                b.is_close_to(&a, DEFAULT_TOLERANCE),
                "closeness must not depend on argument order"
            );
        }
    }

    #[test]
    fn degenerate_bases_are_floored() {
        // Near-zero cap heights and em widths would otherwise divide the
        // deltas by near-zero.
        let a = signature(0.01, 0.01, 0.01, 0.01);
        let b = signature(0.02, 0.01, 0.01, 0.01);
        assert!(a.is_close_to(&b, DEFAULT_TOLERANCE));
    }
}
