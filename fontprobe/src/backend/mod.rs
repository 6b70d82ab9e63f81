// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory font registry that acts as a text engine.

use alloc::string::String;
use core::fmt;
use hashbrown::HashMap;
use peniko::Blob;
use skrifa::instance::{LocationRef, Size};
use skrifa::raw::FileRef;
use skrifa::string::StringId;
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::family_name::{clean_family_name, split_family_list};
use crate::generic::GenericFamily;
use crate::measure::{TextEngine, TextMetrics};

const GENERIC_COUNT: usize = GenericFamily::MAX_VALUE as usize + 1;

/// One registered face: font data plus the face index within it.
#[derive(Clone)]
struct Face {
    data: Blob<u8>,
    index: u32,
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Face")
            .field("data_len", &self.data.as_ref().len())
            .field("index", &self.index)
            .finish()
    }
}

/// In-memory font registry implementing [`TextEngine`].
///
/// For hosts that hold font binaries rather than a rendering surface: faces
/// are registered under case-folded family names, generic families can be
/// aliased to registered names, and measurement walks a stack string to the
/// first registered candidate and reads its glyph metrics. The registry
/// supports the presence query natively, so a [`Probe`](crate::Probe) over
/// it takes the fast negative path for unregistered names.
#[derive(Clone, Default)]
pub struct FontRegistry {
    faces: HashMap<String, Face>,
    generic: [Option<String>; GENERIC_COUNT],
}

impl FontRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            faces: HashMap::new(),
            generic: [const { None }; GENERIC_COUNT],
        }
    }

    /// Registers every face found in the font data under its family name.
    ///
    /// The typographic family name is preferred over the plain one. Returns
    /// the number of faces indexed; data that does not parse as a font or
    /// font collection indexes nothing.
    pub fn register(&mut self, data: Blob<u8>) -> usize {
        let mut added = 0;
        for index in 0..face_count(data.as_ref()) {
            let Ok(font) = FontRef::from_index(data.as_ref(), index) else {
                continue;
            };
            let Some(name) = family_name(&font) else {
                continue;
            };
            if self.insert_face(&name, data.clone(), index) {
                added += 1;
            }
        }
        added
    }

    /// Registers one face under an explicit family name.
    ///
    /// `index` selects the face within collection data; use 0 for a single
    /// font. Returns false when the cleaned name is empty.
    pub fn register_named(&mut self, name: &str, data: Blob<u8>, index: u32) -> bool {
        self.insert_face(name, data, index)
    }

    /// Reads a font file and registers its faces.
    ///
    /// Returns the number of faces indexed; 0 when the file cannot be read
    /// or parsed.
    #[cfg(feature = "std")]
    pub fn register_path(&mut self, path: impl AsRef<std::path::Path>) -> usize {
        let Ok(data) = std::fs::read(path) else {
            return 0;
        };
        self.register(Blob::new(alloc::sync::Arc::new(data)))
    }

    /// Aliases a generic family to a registered family name.
    pub fn set_generic(&mut self, generic: GenericFamily, family: &str) {
        self.generic[generic as usize] = Some(fold_name(&clean_family_name(family)));
    }

    /// Returns whether a candidate name resolves to a registered face.
    ///
    /// Generic keywords resolve through their alias, if set.
    pub fn contains(&self, family: &str) -> bool {
        self.lookup(&clean_family_name(family)).is_some()
    }

    fn insert_face(&mut self, name: &str, data: Blob<u8>, index: u32) -> bool {
        let name = clean_family_name(name);
        if name.is_empty() {
            return false;
        }
        self.faces.insert(fold_name(&name), Face { data, index });
        true
    }

    fn lookup(&self, name: &str) -> Option<&Face> {
        if let Some(generic) = GenericFamily::parse(name) {
            let alias = self.generic[generic as usize].as_ref()?;
            return self.faces.get(alias);
        }
        self.faces.get(&fold_name(name))
    }

    /// First candidate in the stack with a registered face.
    fn resolve(&self, families: &str) -> Option<&Face> {
        split_family_list(families).find_map(|name| self.lookup(&name))
    }
}

impl TextEngine for FontRegistry {
    fn measure(&mut self, families: &str, size: f32, sample: &str) -> Option<TextMetrics> {
        let face = self.resolve(families)?;
        let font = FontRef::from_index(face.data.as_ref(), face.index).ok()?;
        let glyph_metrics = font.glyph_metrics(Size::new(size), LocationRef::default());
        let charmap = font.charmap();
        let mut metrics = TextMetrics::default();
        for ch in sample.chars() {
            let glyph = charmap.map(ch).unwrap_or(GlyphId::new(0));
            metrics.advance += glyph_metrics.advance_width(glyph).unwrap_or(0.0);
            if let Some(bounds) = glyph_metrics.bounds(glyph) {
                metrics.ascent = metrics.ascent.max(bounds.y_max);
                metrics.descent = metrics.descent.max(-bounds.y_min);
            }
        }
        Some(metrics)
    }

    fn is_family_loadable(&mut self, family: &str, _size: f32) -> Option<bool> {
        let name = clean_family_name(family);
        if name.is_empty() {
            return Some(false);
        }
        if GenericFamily::parse(&name).is_some() {
            return Some(true);
        }
        Some(self.faces.contains_key(&fold_name(&name)))
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("faces", &self.faces)
            .field("generic", &self.generic)
            .finish()
    }
}

/// Case-folded map key for family names.
fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

fn face_count(data: &[u8]) -> u32 {
    match FileRef::new(data) {
        Ok(FileRef::Font(_)) => 1,
        Ok(FileRef::Collection(collection)) => collection.len(),
        Err(_) => 0,
    }
}

fn family_name(font: &FontRef<'_>) -> Option<String> {
    for id in [StringId::TYPOGRAPHIC_FAMILY_NAME, StringId::FAMILY_NAME] {
        if let Some(name) = font.localized_strings(id).english_or_first() {
            let name: String = name.chars().collect();
            if !name.is_empty() {
                return Some(name);
            }
        }
    }
    None
}
