// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate font family names and stack strings.

use alloc::borrow::Cow;
use alloc::string::String;

/// Cleans a raw font family candidate.
///
/// Trims surrounding whitespace, strips a single layer of quote characters
/// (one leading and one trailing, independently), trims again and collapses
/// internal whitespace runs to one space. Borrows from the input when no
/// rewriting is needed.
pub fn clean_family_name(raw: &str) -> Cow<'_, str> {
    let mut name = raw.trim();
    name = name.strip_prefix(['\'', '"']).unwrap_or(name);
    name = name.strip_suffix(['\'', '"']).unwrap_or(name);
    collapse_whitespace(name.trim())
}

fn collapse_whitespace(name: &str) -> Cow<'_, str> {
    if !name.contains("  ") && !name.chars().any(|ch| ch.is_whitespace() && ch != ' ') {
        return Cow::Borrowed(name);
    }
    let mut collapsed = String::with_capacity(name.len());
    let mut in_run = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_run {
                collapsed.push(' ');
            }
            in_run = true;
        } else {
            collapsed.push(ch);
            in_run = false;
        }
    }
    Cow::Owned(collapsed)
}

/// Splits a CSS-style font family stack into cleaned candidate names.
///
/// Commas inside quoted names do not split. Each yielded name is cleaned as
/// by [`clean_family_name`]; segments that clean to nothing are dropped. The
/// splitter is total: malformed input degrades to fewer (or zero) names,
/// never an error.
///
/// ```
/// use fontprobe::split_family_list;
///
/// let names: Vec<_> = split_family_list("\"A, B\", C").collect();
/// assert_eq!(names, ["A, B", "C"]);
/// assert_eq!(split_family_list("").count(), 0);
/// ```
pub fn split_family_list(stack: &str) -> SplitFamilyList<'_> {
    SplitFamilyList {
        source: stack,
        pos: 0,
    }
}

/// Iterator over the cleaned candidate names of a font family stack.
///
/// See [`split_family_list`].
#[derive(Clone, Debug)]
pub struct SplitFamilyList<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Iterator for SplitFamilyList<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.source.len() {
            let start = self.pos;
            let mut end = self.source.len();
            // A quote character opens a run or closes a matching one; a
            // mismatched quote inside a run is literal.
            let mut quote: Option<char> = None;
            for (i, ch) in self.source[start..].char_indices() {
                if (ch == '"' || ch == '\'') && (quote.is_none() || quote == Some(ch)) {
                    quote = match quote {
                        Some(_) => None,
                        None => Some(ch),
                    };
                } else if ch == ',' && quote.is_none() {
                    end = start + i;
                    break;
                }
            }
            self.pos = end + 1;
            let cleaned = clean_family_name(&self.source[start..end]);
            if !cleaned.is_empty() {
                return Some(cleaned);
            }
        }
        None
    }
}

/// Quotes a single family name for use in a stack string.
///
/// Inner double quotes are escaped so the name survives re-parsing.
pub fn quote_family(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for ch in name.chars() {
        if ch == '"' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

/// Joins candidate names back into a CSS `font-family` value, quoting each.
pub fn to_css_list<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut css = String::new();
    for name in names {
        if !css.is_empty() {
            css.push_str(", ");
        }
        css.push_str(&quote_family(name.as_ref()));
    }
    css
}
