// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted text engine for driving probes in tests.

use std::collections::HashMap;

use fontprobe::{split_family_list, Signature, TextEngine, TextMetrics};

/// Reference metrics of one simulated face, expressed at the default 32px
/// sample size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct FaceProfile {
    pub(crate) x_height: f32,
    pub(crate) cap_height: f32,
    pub(crate) em_width: f32,
    pub(crate) normal_width: f32,
}

impl FaceProfile {
    /// The signature a probe measuring this face at 32px should compute.
    pub(crate) fn signature(self) -> Signature {
        Signature {
            x_height: self.x_height,
            cap_height: self.cap_height,
            em_width: self.em_width,
            normal_width: self.normal_width,
        }
    }
}

// Profile values are dyadic fractions so the sample-width normalization
// (multiply by 12 while rendering, divide by 12 while measuring) is exact
// in f32 and tests can assert signature equality.

/// A wide humanist face, in the ballpark of Arial.
pub(crate) const SANS: FaceProfile = FaceProfile {
    x_height: 17.0,
    cap_height: 23.0,
    em_width: 26.5,
    normal_width: 17.75,
};

/// A typewriter face, in the ballpark of Courier New.
pub(crate) const MONO: FaceProfile = FaceProfile {
    x_height: 14.5,
    cap_height: 21.5,
    em_width: 19.25,
    normal_width: 19.25,
};

/// A second monospace face, distinct from [`MONO`].
pub(crate) const CONSOLE: FaceProfile = FaceProfile {
    x_height: 16.5,
    cap_height: 22.0,
    em_width: 17.5,
    normal_width: 17.5,
};

/// Simulates a text engine with a fixed set of installed faces.
///
/// Measurement walks the requested stack and picks the first installed
/// face, like a real engine honoring `font-family` order; names the engine
/// does not know fall through. When nothing in the stack matches, the
/// default face (if any) stands in for the engine's last-resort font.
pub(crate) struct ScriptedEngine {
    faces: HashMap<String, FaceProfile>,
    default_face: Option<FaceProfile>,
    presence_supported: bool,
    presence_overrides: HashMap<String, bool>,
    measure_calls: usize,
}

impl ScriptedEngine {
    pub(crate) fn new() -> Self {
        Self {
            faces: HashMap::new(),
            default_face: None,
            presence_supported: false,
            presence_overrides: HashMap::new(),
            measure_calls: 0,
        }
    }

    /// Installs a face under a family name.
    pub(crate) fn with_face(mut self, name: &str, face: FaceProfile) -> Self {
        self.faces.insert(name.to_lowercase(), face);
        self
    }

    /// Sets the last-resort face used when nothing in a stack matches.
    pub(crate) fn with_default_face(mut self, face: FaceProfile) -> Self {
        self.default_face = Some(face);
        self
    }

    /// Enables the optional presence query, answering from the face table.
    pub(crate) fn with_presence(mut self) -> Self {
        self.presence_supported = true;
        self
    }

    /// Forces the presence query's answer for one name.
    pub(crate) fn with_presence_override(mut self, name: &str, loadable: bool) -> Self {
        self.presence_supported = true;
        self.presence_overrides.insert(name.to_lowercase(), loadable);
        self
    }

    /// Number of `measure` invocations so far.
    pub(crate) fn measure_calls(&self) -> usize {
        self.measure_calls
    }

    fn resolve(&self, families: &str) -> Option<FaceProfile> {
        for name in split_family_list(families) {
            if let Some(face) = self.faces.get(&name.to_lowercase()) {
                return Some(*face);
            }
        }
        self.default_face
    }
}

impl TextEngine for ScriptedEngine {
    fn measure(&mut self, families: &str, size: f32, sample: &str) -> Option<TextMetrics> {
        self.measure_calls += 1;
        let face = self.resolve(families)?;
        let scale = size / 32.0;
        let count = sample.chars().count() as f32;
        let (per_glyph, height) = match sample.chars().next() {
            Some('X') => (face.normal_width, face.cap_height),
            Some('m') => (face.em_width, face.x_height),
            _ => (face.normal_width, face.x_height),
        };
        Some(TextMetrics {
            advance: per_glyph * count * scale,
            ascent: height * scale,
            descent: 0.0,
        })
    }

    fn is_family_loadable(&mut self, family: &str, _size: f32) -> Option<bool> {
        if !self.presence_supported {
            return None;
        }
        let key = family.to_lowercase();
        if let Some(forced) = self.presence_overrides.get(&key) {
            return Some(*forced);
        }
        Some(self.faces.contains_key(&key))
    }
}
