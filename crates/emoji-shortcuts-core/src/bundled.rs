//! Default emoji metadata table, generated from the `emojis` crate.
//!
//! The table is produced in the Records shape with names spelled the way the
//! upstream `EMOJI_DATA` table spells them (`:thumbs_up:`, `:Switzerland:`),
//! so it goes through the same detection and cleaning as a supplied file.

use serde_json::{Map, Value, json};

use crate::LOCALE;

/// Build the Records-shaped table for every emoji the `emojis` crate knows,
/// in Unicode order.
pub fn source() -> Value {
    let table: Map<String, Value> = emojis::iter()
        .map(|emoji| {
            let record = json!({ LOCALE: upstream_name(emoji.name()) });
            (emoji.as_str().to_string(), record)
        })
        .collect();

    Value::Object(table)
}

/// Spell a CLDR short name the way the upstream table does.
///
/// Flags drop their `flag: ` prefix, punctuation is removed, and words are
/// joined with underscores: `family: man, woman, boy` → `:family_man_woman_boy:`.
pub fn upstream_name(cldr: &str) -> String {
    let name = cldr.strip_prefix("flag: ").unwrap_or(cldr);
    let words: Vec<&str> = name
        .split(|c: char| c.is_whitespace() || matches!(c, ':' | ',' | '“' | '”'))
        .filter(|w| !w.is_empty())
        .collect();
    format!(":{}:", words.join("_"))
}
