// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font availability and fallback detection.
//!
//! Text engines offer no reliable way to ask whether a font family is
//! installed and rendering as itself; the only dependable primitive is
//! relative text measurement. This crate classifies candidate family names by
//! first locating two commonly installed reference fonts that measure as
//! mutually distinct, then measuring each candidate with either reference as
//! its fallback: if both probes produce the same typographic signature, the
//! engine rendered the candidate itself rather than falling through.
//!
//! All probing runs through the [`TextEngine`] trait, so any host that can
//! measure text can drive a [`Probe`]. [`FontRegistry`] is a ready-made
//! engine for hosts that hold font binaries in memory.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("fontprobe requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod backend;
mod family_name;
mod generic;
mod measure;
mod probe;
mod reference;
mod signature;

pub use peniko::Blob;

pub use backend::FontRegistry;
pub use family_name::{
    clean_family_name, quote_family, split_family_list, to_css_list, SplitFamilyList,
};
pub use generic::GenericFamily;
pub use measure::{measure_signature, TextEngine, TextMetrics};
pub use probe::{Availability, Probe, ProbeOptions};
pub use reference::{resolve_reference_pair, ReferenceFont, ReferencePair};
pub use signature::{Signature, DEFAULT_TOLERANCE};
