//! Building the phrase/shortcut mapping from an emoji metadata table.
//!
//! Two table shapes are recognized, matching the two generations of the
//! upstream emoji data:
//!
//! ```text
//! Records: { "🔥": { "en": ":fire:", "status": 2, ... }, ... }
//! Names:   { "🔥": ":fire:", ... }   or   { "en": { "🔥": ":fire:", ... } }
//! ```
//!
//! The shape is resolved once per build. Entries whose name is missing,
//! malformed, or blank after cleaning are skipped, never reported as errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::LOCALE;
use crate::error::Result;

/// Maximum number of entries shown in a preview.
pub const PREVIEW_LIMIT: usize = 10;

/// A single emoji and its text shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiEntry {
    /// The literal emoji character or grapheme cluster.
    pub phrase: String,
    /// Colon-prefixed lowercase alias, e.g. `:fire`.
    pub shortcut: String,
}

impl EmojiEntry {
    /// Create an entry from an emoji and its raw upstream name.
    ///
    /// Returns `None` when the cleaned name is empty.
    pub fn new(phrase: impl Into<String>, raw_name: &str) -> Option<Self> {
        let name = clean_name(raw_name);
        if name.is_empty() {
            return None;
        }
        Some(Self {
            phrase: phrase.into(),
            shortcut: format!(":{name}"),
        })
    }
}

/// Clean an upstream name: drop every colon, trim whitespace, lowercase.
///
/// `":Thumbs_Up:"` becomes `"thumbs_up"`.
pub fn clean_name(raw: &str) -> String {
    raw.replace(':', "").trim().to_lowercase()
}

/// The layout of an emoji metadata table, resolved from the document root.
#[derive(Debug, Clone, Copy)]
pub enum SourceShape<'a> {
    /// Emoji → record with a per-locale name field.
    Records(&'a Map<String, Value>),
    /// Emoji → name string.
    Names(&'a Map<String, Value>),
}

impl<'a> SourceShape<'a> {
    /// Detect the shape of a metadata document.
    ///
    /// A top-level locale key holding an object is unwrapped first. After
    /// that, usable records (objects with a string locale name) are counted
    /// against string names and the larger group wins; ties go to records.
    /// A stray value of the other kind anywhere in the table is skipped like
    /// any other malformed entry.
    ///
    /// Returns `None` for non-objects and tables with no usable entries.
    pub fn detect(source: &'a Value) -> Option<Self> {
        let table = source.as_object()?;
        if let Some(nested @ Value::Object(_)) = table.get(LOCALE) {
            return Self::detect(nested);
        }

        let (records, names) =
            table
                .values()
                .fold((0usize, 0usize), |(records, names), value| match value {
                    Value::Object(record) if record.get(LOCALE).is_some_and(Value::is_string) => {
                        (records + 1, names)
                    }
                    Value::String(_) => (records, names + 1),
                    _ => (records, names),
                });

        match (records, names) {
            (0, 0) => None,
            (records, names) if records >= names => Some(Self::Records(table)),
            _ => Some(Self::Names(table)),
        }
    }

    fn table(self) -> &'a Map<String, Value> {
        match self {
            Self::Records(table) | Self::Names(table) => table,
        }
    }

    /// Extract the raw name for one table value, or `""` if it has none.
    pub fn raw_name<'v>(self, value: &'v Value) -> &'v str {
        let name = match self {
            Self::Records(_) => value.get(LOCALE).and_then(Value::as_str),
            Self::Names(_) => value.as_str(),
        };
        name.unwrap_or_default()
    }

    /// Iterate the entries with a usable name, in table order.
    pub fn entries(self) -> impl Iterator<Item = EmojiEntry> + 'a {
        self.table()
            .iter()
            .filter_map(move |(emoji, value)| EmojiEntry::new(emoji.as_str(), self.raw_name(value)))
    }
}

/// Build the mapping from a parsed metadata document.
///
/// An unrecognized document yields an empty mapping.
pub fn build(source: &Value) -> Vec<EmojiEntry> {
    tracing::info!("generating emoji mappings");

    let entries: Vec<EmojiEntry> = match SourceShape::detect(source) {
        Some(shape) => shape.entries().collect(),
        None => {
            tracing::warn!("emoji metadata has no recognizable entries");
            Vec::new()
        }
    };

    tracing::info!(count = entries.len(), "emoji mappings generated");
    entries
}

/// Parse a JSON metadata document and build the mapping from it.
pub fn build_from_slice(bytes: &[u8]) -> Result<Vec<EmojiEntry>> {
    let source: Value = serde_json::from_slice(bytes)?;
    Ok(build(&source))
}

/// Build the mapping from the table compiled into the binary.
pub fn build_bundled() -> Vec<EmojiEntry> {
    build(&crate::bundled::source())
}

/// The first [`PREVIEW_LIMIT`] entries of a mapping.
pub fn preview(entries: &[EmojiEntry]) -> &[EmojiEntry] {
    &entries[..entries.len().min(PREVIEW_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shortcuts(entries: &[EmojiEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.shortcut.as_str()).collect()
    }

    // -- clean_name() --

    #[test]
    fn clean_name_strips_colons_and_lowercases() {
        assert_eq!(clean_name(":Thumbs_Up:"), "thumbs_up");
    }

    #[test]
    fn clean_name_trims_whitespace() {
        assert_eq!(clean_name("  :fire:  "), "fire");
        assert_eq!(clean_name(": red heart :"), "red heart");
    }

    #[test]
    fn clean_name_removes_inner_colons() {
        assert_eq!(clean_name("a:b::c"), "abc");
    }

    #[test]
    fn clean_name_is_idempotent() {
        for raw in [":fire:", " :OK_hand: ", "::", "flag_Switzerland", ""] {
            let once = clean_name(raw);
            assert_eq!(clean_name(&once), once);
        }
    }

    #[test]
    fn clean_name_blank() {
        assert_eq!(clean_name(""), "");
        assert_eq!(clean_name(" : : "), "");
    }

    // -- EmojiEntry::new() --

    #[test]
    fn entry_from_raw_name() {
        let entry = EmojiEntry::new("🔥", ":fire:").unwrap();
        assert_eq!(entry.phrase, "🔥");
        assert_eq!(entry.shortcut, ":fire");
    }

    #[test]
    fn entry_rejects_blank_name() {
        assert!(EmojiEntry::new("🔥", "").is_none());
        assert!(EmojiEntry::new("🔥", " :: ").is_none());
    }

    // -- SourceShape::detect() --

    #[test]
    fn detect_records() {
        let source = json!({ "🔥": { "en": ":fire:" } });
        assert!(matches!(
            SourceShape::detect(&source),
            Some(SourceShape::Records(_))
        ));
    }

    #[test]
    fn detect_flat_names() {
        let source = json!({ "🔥": ":fire:" });
        assert!(matches!(
            SourceShape::detect(&source),
            Some(SourceShape::Names(_))
        ));
    }

    #[test]
    fn detect_locale_nested_names() {
        let source = json!({ "en": { "🔥": ":fire:" }, "es": { "🔥": ":fuego:" } });
        let Some(SourceShape::Names(table)) = SourceShape::detect(&source) else {
            panic!("expected nested names");
        };
        assert!(table.contains_key("🔥"));
    }

    #[test]
    fn detect_skips_leading_malformed_values() {
        let source = json!({ "❓": 7, "🔥": { "en": ":fire:" } });
        assert!(matches!(
            SourceShape::detect(&source),
            Some(SourceShape::Records(_))
        ));
    }

    #[test]
    fn detect_records_despite_leading_name_string() {
        let source = json!({
            "❓": "not a record",
            "🔥": { "en": ":fire:" },
            "💧": { "en": ":droplet:" },
        });
        assert!(matches!(
            SourceShape::detect(&source),
            Some(SourceShape::Records(_))
        ));
    }

    #[test]
    fn detect_names_despite_leading_record() {
        let source = json!({ "❓": { "en": ":question:" }, "🔥": ":fire:", "💧": ":droplet:" });
        assert!(matches!(
            SourceShape::detect(&source),
            Some(SourceShape::Names(_))
        ));
    }

    #[test]
    fn detect_ignores_records_without_locale_name() {
        let source = json!({ "🙂": { "de": ":lächeln:" }, "🔥": ":fire:" });
        assert!(matches!(
            SourceShape::detect(&source),
            Some(SourceShape::Names(_))
        ));
    }

    #[test]
    fn detect_nothing_usable() {
        assert!(SourceShape::detect(&json!([])).is_none());
        assert!(SourceShape::detect(&json!("text")).is_none());
        assert!(SourceShape::detect(&json!({})).is_none());
        assert!(SourceShape::detect(&json!({ "🔥": null })).is_none());
        assert!(SourceShape::detect(&json!({ "🔥": { "de": ":feuer:" } })).is_none());
    }

    // -- build() --

    #[test]
    fn build_records_shape() {
        let source = json!({
            "🔥": { "en": ":fire:", "status": 2 },
            "👍": { "en": ":thumbs_up:", "alias": [":+1:"] },
        });
        let entries = build(&source);
        assert_eq!(
            entries,
            vec![
                EmojiEntry {
                    phrase: "🔥".into(),
                    shortcut: ":fire".into()
                },
                EmojiEntry {
                    phrase: "👍".into(),
                    shortcut: ":thumbs_up".into()
                },
            ]
        );
    }

    #[test]
    fn build_flat_names_shape() {
        let source = json!({ "🔥": ":fire:", "💯": ":100:" });
        assert_eq!(shortcuts(&build(&source)), vec![":fire", ":100"]);
    }

    #[test]
    fn build_nested_names_shape() {
        let source = json!({ "en": { "🔥": ":Fire:" } });
        assert_eq!(shortcuts(&build(&source)), vec![":fire"]);
    }

    #[test]
    fn build_skips_malformed_records() {
        let source = json!({
            "🔥": { "en": ":fire:" },
            "❓": "not a record",
            "🙂": { "de": ":lächeln:" },
            "🤖": { "en": 42 },
            "⬜": { "en": "::" },
            "💧": { "en": ":droplet:" },
        });
        assert_eq!(shortcuts(&build(&source)), vec![":fire", ":droplet"]);
    }

    #[test]
    fn build_leading_malformed_entry_keeps_records() {
        let source = json!({
            "❓": "not a record",
            "🔥": { "en": ":fire:" },
            "💧": { "en": ":droplet:" },
        });
        assert_eq!(shortcuts(&build(&source)), vec![":fire", ":droplet"]);
    }

    #[test]
    fn build_skips_malformed_names() {
        let source = json!({ "🔥": ":fire:", "❓": { "en": ":question:" }, "⬜": "  " });
        assert_eq!(shortcuts(&build(&source)), vec![":fire"]);
    }

    #[test]
    fn build_keeps_duplicates_in_source_order() {
        let source = json!({ "🐈": ":cat:", "🐱": ":cat:", "🐶": ":dog:" });
        let entries = build(&source);
        assert_eq!(shortcuts(&entries), vec![":cat", ":cat", ":dog"]);
        assert_eq!(entries[1].phrase, "🐱");
    }

    #[test]
    fn build_empty_source() {
        assert!(build(&json!({})).is_empty());
        assert!(build(&json!(null)).is_empty());
    }

    #[test]
    fn build_shortcuts_have_single_leading_colon() {
        let entries = build_bundled();
        assert!(!entries.is_empty());
        for entry in &entries {
            let name = entry.shortcut.strip_prefix(':').unwrap();
            assert!(!name.is_empty(), "empty name for {}", entry.phrase);
            assert!(!name.contains(':'), "stray colon in {}", entry.shortcut);
        }
    }

    #[test]
    fn build_from_slice_rejects_invalid_json() {
        assert!(build_from_slice(b"{ nope").is_err());
    }

    #[test]
    fn bundled_table_covers_full_emoji_set() {
        let entries = build_bundled();
        assert!(entries.len() > 1800, "only {} bundled entries", entries.len());
    }

    #[test]
    fn bundled_table_preserves_order() {
        let entries = build_bundled();
        assert_eq!(entries[0].phrase, "😀");
        assert_eq!(entries[0].shortcut, ":grinning_face");
        assert!(entries.iter().any(|e| e.phrase == "🔥" && e.shortcut == ":fire"));
    }

    // -- preview() --

    #[test]
    fn preview_truncates_to_limit() {
        let entries = build_bundled();
        assert!(entries.len() > PREVIEW_LIMIT);
        let sample = preview(&entries);
        assert_eq!(sample.len(), PREVIEW_LIMIT);
        assert_eq!(sample, &entries[..PREVIEW_LIMIT]);
    }

    #[test]
    fn preview_short_mapping() {
        let entries = build(&json!({ "🔥": ":fire:", "💧": ":droplet:" }));
        assert_eq!(preview(&entries), entries.as_slice());
    }

    #[test]
    fn preview_empty_mapping() {
        assert!(preview(&[]).is_empty());
    }
}
