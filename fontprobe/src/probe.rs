// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font availability classification.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::family_name::{clean_family_name, split_family_list};
use crate::generic::GenericFamily;
use crate::measure::{measure_signature, TextEngine};
use crate::reference::{pair_stack, resolve_reference_pair, ReferencePair};
use crate::signature::{Signature, DEFAULT_TOLERANCE};

/// Classification of one candidate font name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Availability {
    /// The candidate renders as itself on the host engine.
    Available,
    /// The candidate is a CSS generic family keyword, not an installed font.
    Generic,
    /// The candidate could not be confirmed: the engine fell back to a
    /// substitute face, or nothing could be measured at all.
    NotRendering,
    /// The candidate is empty, or the host reports no matching face.
    NotFound,
}

impl Availability {
    /// Short display label for this classification.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Generic => "generic",
            Self::NotRendering => "not rendering",
            Self::NotFound => "not found",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type ReferenceNames = SmallVec<[String; 5]>;

/// Options for a [`Probe`].
#[derive(Clone, Debug)]
pub struct ProbeOptions {
    /// Mean relative deviation below which two signatures count as the same
    /// face.
    ///
    /// The default is [`DEFAULT_TOLERANCE`].
    pub tolerance: f32,

    /// Pixel size used for measurement probes.
    ///
    /// The default is 32.0.
    pub sample_size: f32,

    /// Pixel size handed to the host's presence query.
    ///
    /// The default is 16.0.
    pub presence_size: f32,

    /// Reference candidates biased toward proportional faces.
    ///
    /// The defaults assume a common desktop installation.
    pub proportional_references: ReferenceNames,

    /// Reference candidates biased toward monospace faces.
    pub monospace_references: ReferenceNames,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            sample_size: 32.0,
            presence_size: 16.0,
            proportional_references: ["Arial", "Verdana", "Times New Roman", "Palatino", "Helvetica"]
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            monospace_references: ["Courier New", "Courier", "Lucida Console", "Lucida Sans Typewriter"]
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}

/// Lifecycle of the reference pair: resolved at most once, success or
/// failure.
#[derive(Clone, Debug, Default)]
enum ReferenceState {
    #[default]
    Untried,
    Resolved(ReferencePair),
    Failed,
}

/// Detects which font families a host text engine actually renders.
///
/// A probe owns all mutable probing state: the engine, the lazily resolved
/// reference pair and the cache of confirmed signatures. Classification
/// never fails; hosts without a measurement surface simply classify
/// everything unknown as [`Availability::NotRendering`].
///
/// Everything runs synchronously on the caller's thread through `&mut self`.
/// Reference resolution is first-success-wins and the cache is
/// first-write-wins, neither of which is idempotent under racing writers, so
/// multi-threaded hosts should share a probe behind a mutex.
pub struct Probe<E> {
    engine: E,
    options: ProbeOptions,
    references: ReferenceState,
    confirmed: HashMap<String, Signature>,
}

impl<E: TextEngine> Probe<E> {
    /// Creates a probe over the given engine with default options.
    pub fn new(engine: E) -> Self {
        Self::with_options(engine, ProbeOptions::default())
    }

    /// Creates a probe with explicit options.
    pub fn with_options(engine: E, options: ProbeOptions) -> Self {
        Self {
            engine,
            options,
            references: ReferenceState::Untried,
            confirmed: HashMap::new(),
        }
    }

    /// Returns the options this probe was built with.
    pub fn options(&self) -> &ProbeOptions {
        &self.options
    }

    /// Returns a reference to the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Consumes the probe, returning the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Classifies a single candidate font name.
    ///
    /// The name is cleaned as one stack entry first. Guards are checked in
    /// order, first match wins: empty name, previously confirmed name,
    /// generic family keyword, negative presence query, dual baseline test.
    pub fn classify(&mut self, name: &str) -> Availability {
        let name = clean_family_name(name);
        if name.is_empty() {
            return Availability::NotFound;
        }
        if self.confirmed.contains_key(name.as_ref()) {
            return Availability::Available;
        }
        if GenericFamily::parse(&name).is_some() {
            return Availability::Generic;
        }
        // A negative answer is trusted as a fast path; a positive or missing
        // answer still has to survive the dual baseline test.
        if self.engine.is_family_loadable(&name, self.options.presence_size) == Some(false) {
            return Availability::NotFound;
        }
        match self.dual_baseline_test(&name) {
            Some(signature) => {
                self.confirmed.entry(name.into_owned()).or_insert(signature);
                Availability::Available
            }
            None => Availability::NotRendering,
        }
    }

    /// Parses a stack string and classifies each candidate, in order.
    pub fn classify_stack(&mut self, stack: &str) -> Vec<(String, Availability)> {
        let names: Vec<String> = split_family_list(stack).map(Cow::into_owned).collect();
        names
            .into_iter()
            .map(|name| {
                let availability = self.classify(&name);
                (name, availability)
            })
            .collect()
    }

    /// Returns the reference pair, resolving it on first use.
    ///
    /// Resolution runs at most once per lifecycle; both the resolved pair
    /// and a failure to find one stick until [`reset`](Self::reset).
    pub fn reference_pair(&mut self) -> Option<&ReferencePair> {
        if matches!(self.references, ReferenceState::Untried) {
            self.references = match resolve_reference_pair(&mut self.engine, &self.options) {
                Some(pair) => ReferenceState::Resolved(pair),
                None => ReferenceState::Failed,
            };
        }
        match &self.references {
            ReferenceState::Resolved(pair) => Some(pair),
            _ => None,
        }
    }

    /// Returns the cached confirmed signature for a name, if any.
    pub fn confirmed_signature(&self, name: &str) -> Option<&Signature> {
        self.confirmed.get(clean_family_name(name).as_ref())
    }

    /// Clears the reference pair and the availability cache.
    ///
    /// This is the process-restart analogue: the next classification
    /// re-resolves the references.
    pub fn reset(&mut self) {
        self.references = ReferenceState::Untried;
        self.confirmed.clear();
    }

    /// Measures the candidate over either reference font and compares.
    ///
    /// The references are known to be mutually distinct, so two close
    /// signatures mean the engine rendered the candidate itself both times;
    /// differing signatures mean each probe fell through to its own
    /// reference.
    fn dual_baseline_test(&mut self, name: &str) -> Option<Signature> {
        let (first, second) = {
            let pair = self.reference_pair()?;
            (pair.first.name.clone(), pair.second.name.clone())
        };
        let size = self.options.sample_size;
        let with_first = measure_signature(&mut self.engine, &pair_stack(name, &first), size)?;
        let with_second = measure_signature(&mut self.engine, &pair_stack(name, &second), size)?;
        with_first
            .is_close_to(&with_second, self.options.tolerance)
            .then_some(with_first)
    }
}

impl<E> fmt::Debug for Probe<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe")
            .field("options", &self.options)
            .field("references", &self.references)
            .field("confirmed", &self.confirmed)
            .finish_non_exhaustive()
    }
}
