// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `fontprobe`.
//!
//! - The `util` module holds the scripted text engine shared by the tests.
//! - We do not use the default Rust test harness; this `mod.rs` file is the
//!   entry point for all other tests so that shared utilities are easy to
//!   define.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
