// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable text codec.
//!
//! ```text
//! encode: EnvMap --> "KEY=VALUE\nKEY2=VALUE2"  (iteration order)
//! decode: text   --> EnvMap
//!   skip    empty lines, "# comment"
//!   split   first '=' only (no '=' or '=' at col 0: line dropped)
//!   trim    key and value
//!   unquote one layer of matching "..." or '...'
//!   dupes   last write wins
//! ```
//!
//! The codec is a convenience transform for human editing, not a strict
//! format: malformed lines are dropped instead of erroring.

use indexmap::IndexMap;

/// Mapping from variable name to value. Keys are unique; insertion order
/// is preserved so that `encode` output is stable for display.
pub type EnvMap = IndexMap<String, String>;

/// Renders a map as one `KEY=VALUE` line per entry, joined by newlines.
///
/// Values are emitted verbatim: embedded `=` or quotes are not escaped.
#[must_use]
pub fn encode(map: &EnvMap) -> String {
    map.iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses a `KEY=VALUE` text block into a map.
///
/// Lines that are empty, whitespace-only, comments (`#` after trimming),
/// or have no key before the first `=` are silently dropped. A duplicate
/// key overwrites the earlier value.
#[must_use]
pub fn decode(text: &str) -> EnvMap {
    let mut map = EnvMap::new();

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Only the first '=' separates key from value; an '=' at column 0
        // leaves no key and drops the line.
        let Some(eq) = line.find('=') else { continue };
        if eq == 0 {
            continue;
        }

        let key = line[..eq].trim().to_string();
        let value = unquote(line[eq + 1..].trim()).to_string();

        map.insert(key, value);
    }

    map
}

/// Strips exactly one layer of fully-enclosing matching straight quotes.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 {
        let bytes = value.as_bytes();
        let (first, last) = (bytes[0], bytes[value.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
