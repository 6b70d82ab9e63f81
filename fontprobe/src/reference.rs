// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of the distinct reference font pair.

use alloc::string::String;

use crate::family_name::{clean_family_name, quote_family};
use crate::measure::{measure_signature, TextEngine};
use crate::probe::ProbeOptions;
use crate::signature::Signature;

/// A reference font together with the signature observed when it was
/// selected.
#[derive(Clone, Debug)]
pub struct ReferenceFont {
    /// Cleaned family name.
    pub name: String,
    /// Signature measured with this font first in the probe stack.
    pub signature: Signature,
}

/// Two commonly installed fonts that measure as mutually distinct on the
/// host engine, used as fallback baselines for the dual baseline test.
#[derive(Clone, Debug)]
pub struct ReferencePair {
    /// The proportional-leaning reference.
    pub first: ReferenceFont,
    /// The monospace-leaning reference.
    pub second: ReferenceFont,
}

/// Finds the first candidate pair whose measurement changes when the stack
/// order is reversed.
///
/// Walks the cross product of
/// [`proportional_references`](ProbeOptions::proportional_references) (outer)
/// and [`monospace_references`](ProbeOptions::monospace_references) (inner)
/// in list order; for each pair, measures the stack `"a", "b"` and the
/// reversed `"b", "a"`. The first pair whose two signatures are not close
/// wins — first match, not best match. Returns `None` when the whole cross
/// product collapses, meaning no trustworthy baselines exist on this host.
pub fn resolve_reference_pair<E>(engine: &mut E, options: &ProbeOptions) -> Option<ReferencePair>
where
    E: TextEngine + ?Sized,
{
    for first in &options.proportional_references {
        let first = clean_family_name(first);
        for second in &options.monospace_references {
            let second = clean_family_name(second);
            let Some(forward) =
                measure_signature(engine, &pair_stack(&first, &second), options.sample_size)
            else {
                continue;
            };
            let Some(reverse) =
                measure_signature(engine, &pair_stack(&second, &first), options.sample_size)
            else {
                continue;
            };
            // A signature that moves with stack order proves the engine is
            // honoring the order rather than collapsing both names into one
            // fallback face.
            if !forward.is_close_to(&reverse, options.tolerance) {
                return Some(ReferencePair {
                    first: ReferenceFont {
                        name: first.into_owned(),
                        signature: forward,
                    },
                    second: ReferenceFont {
                        name: second.into_owned(),
                        signature: reverse,
                    },
                });
            }
        }
    }
    None
}

/// Builds the two-entry probe stack `"first", "second"`.
pub(crate) fn pair_stack(first: &str, second: &str) -> String {
    let mut stack = quote_family(first);
    stack.push_str(", ");
    stack.push_str(&quote_family(second));
    stack
}
