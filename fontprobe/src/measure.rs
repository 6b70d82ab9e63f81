// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement over a host engine.

use crate::signature::Signature;

/// Repetitions in each measurement sample; widths are normalized by this.
pub(crate) const SAMPLE_REPEAT: usize = 12;

const X_HEIGHT_SAMPLE: &str = "xxxxxxxxxxxx";
const CAP_HEIGHT_SAMPLE: &str = "XXXXXXXXXXXX";
const EM_WIDTH_SAMPLE: &str = "mmmmmmmmmmmm";
const NORMAL_WIDTH_SAMPLE: &str = "nnnnnnnnnnnn";

/// Raw metrics for one rendered sample string.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct TextMetrics {
    /// Total advance width of the sample.
    pub advance: f32,
    /// Ascent of the actual glyph bounding box.
    pub ascent: f32,
    /// Descent of the actual glyph bounding box.
    pub descent: f32,
}

/// Access to the host text engine that renders measurement probes.
///
/// Implementations must be deterministic for a fixed engine state: the probe
/// measures the same stack repeatedly and compares the results.
pub trait TextEngine {
    /// Measures `sample` rendered at `size` with the given family stack.
    ///
    /// Returns `None` when the engine has no measurement surface. The stack
    /// follows CSS `font-family` syntax; names the engine does not know fall
    /// through to the next entry.
    fn measure(&mut self, families: &str, size: f32, sample: &str) -> Option<TextMetrics>;

    /// Returns whether any face matching `family` is loadable at `size`.
    ///
    /// `None` (the default) means the engine offers no such query. The
    /// answer is an optimization hint only; the dual baseline test stays
    /// authoritative.
    fn is_family_loadable(&mut self, family: &str, size: f32) -> Option<bool> {
        let _ = (family, size);
        None
    }
}

/// Measures the typographic signature of a font family stack.
///
/// Renders the four fixed sample runs at `size` and combines their extents:
/// heights of the `x`/`X` runs, per-glyph widths of the `m`/`n` runs.
/// Returns `None` when any sample cannot be measured — "cannot measure",
/// not "font absent".
pub fn measure_signature<E>(engine: &mut E, families: &str, size: f32) -> Option<Signature>
where
    E: TextEngine + ?Sized,
{
    let (_, x_height) = sample_extent(engine, families, size, X_HEIGHT_SAMPLE)?;
    let (_, cap_height) = sample_extent(engine, families, size, CAP_HEIGHT_SAMPLE)?;
    let (em_width, _) = sample_extent(engine, families, size, EM_WIDTH_SAMPLE)?;
    let (normal_width, _) = sample_extent(engine, families, size, NORMAL_WIDTH_SAMPLE)?;
    Some(Signature {
        x_height,
        cap_height,
        em_width: em_width / SAMPLE_REPEAT as f32,
        normal_width: normal_width / SAMPLE_REPEAT as f32,
    })
}

/// Advance width and glyph box height of one sample.
///
/// Non-finite ascent/descent components count as 0 and the height is floored
/// at 1.0; a non-finite or non-positive advance makes the sample unusable.
fn sample_extent<E>(
    engine: &mut E,
    families: &str,
    size: f32,
    sample: &str,
) -> Option<(f32, f32)>
where
    E: TextEngine + ?Sized,
{
    let metrics = engine.measure(families, size, sample)?;
    if !metrics.advance.is_finite() || metrics.advance <= 0.0 {
        return None;
    }
    let ascent = if metrics.ascent.is_finite() {
        metrics.ascent
    } else {
        0.0
    };
    let descent = if metrics.descent.is_finite() {
        metrics.descent
    } else {
        0.0
    };
    Some((metrics.advance, (ascent + descent).max(1.0)))
}

#[cfg(test)]
mod tests {
    use super::{measure_signature, TextEngine, TextMetrics};

    /// Returns canned metrics, with one sample optionally knocked out.
    struct CannedEngine {
        metrics: TextMetrics,
        broken_sample: Option<char>,
    }

    impl TextEngine for CannedEngine {
        fn measure(&mut self, _families: &str, _size: f32, sample: &str) -> Option<TextMetrics> {
            if self.broken_sample == sample.chars().next() {
                return None;
            }
            Some(self.metrics)
        }
    }

    #[test]
    fn widths_are_normalized_per_glyph() {
        let mut engine = CannedEngine {
            metrics: TextMetrics {
                advance: 240.0,
                ascent: 20.0,
                descent: 4.0,
            },
            broken_sample: None,
        };
        let signature = measure_signature(&mut engine, "\"Any\"", 32.0).unwrap();
        assert_eq!(signature.em_width, 20.0);
        assert_eq!(signature.normal_width, 20.0);
        assert_eq!(signature.x_height, 24.0);
        assert_eq!(signature.cap_height, 24.0);
    }

    #[test]
    fn any_missing_sample_means_no_signature() {
        for broken in ['x', 'X', 'm', 'n'] {
            let mut engine = CannedEngine {
                metrics: TextMetrics {
                    advance: 240.0,
                    ascent: 20.0,
                    descent: 4.0,
                },
                broken_sample: Some(broken),
            };
            assert!(
                measure_signature(&mut engine, "\"Any\"", 32.0).is_none(),
                "losing the {broken} sample should lose the signature"
            );
        }
    }

    #[test]
    fn degenerate_advances_mean_no_signature() {
        for advance in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let mut engine = CannedEngine {
                metrics: TextMetrics {
                    advance,
                    ascent: 20.0,
                    descent: 4.0,
                },
                broken_sample: None,
            };
            assert!(measure_signature(&mut engine, "\"Any\"", 32.0).is_none());
        }
    }

    #[test]
    fn glyph_box_height_is_floored() {
        let mut engine = CannedEngine {
            metrics: TextMetrics {
                advance: 120.0,
                ascent: f32::NAN,
                descent: f32::NEG_INFINITY,
            },
            broken_sample: None,
        };
        let signature = measure_signature(&mut engine, "\"Any\"", 32.0).unwrap();
        assert_eq!(signature.x_height, 1.0);
        assert_eq!(signature.cap_height, 1.0);
    }
}
