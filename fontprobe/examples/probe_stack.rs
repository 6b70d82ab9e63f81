// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classify the families of a font stack against loaded font files.
//!
//! Usage: `probe_stack "<font-family stack>" [font files...]`
//!
//! Font files are registered into a [`FontRegistry`]; reference resolution
//! only succeeds if the loaded files cover a proportional/monospace pair
//! from the default reference lists.

use fontprobe::{Availability, FontRegistry, Probe};

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(stack) = args.next() else {
        eprintln!("usage: probe_stack \"<font-family stack>\" [font files...]");
        return;
    };

    let mut registry = FontRegistry::new();
    for path in args {
        let added = registry.register_path(&path);
        if added == 0 {
            eprintln!("no faces registered from {path}");
        }
    }

    let mut probe = Probe::new(registry);
    let results = probe.classify_stack(&stack);
    for label in [
        Availability::Available,
        Availability::Generic,
        Availability::NotRendering,
        Availability::NotFound,
    ] {
        let names: Vec<&str> = results
            .iter()
            .filter(|(_, availability)| *availability == label)
            .map(|(name, _)| name.as_str())
            .collect();
        println!("{label}: {}", names.join(", "));
    }
}
