//! Download formats for a mapping.
//!
//! - iOS: XML property list, an array of `{ phrase, shortcut }` dicts
//! - everything else: CSV with a `shortcut,phrase,locale` header

use crate::LOCALE;
use crate::error::{Error, Result};
use crate::mapping::EmojiEntry;

/// Download name for property list exports.
pub const PLIST_FILENAME: &str = "TypewiseEmojis.plist";

/// Download name for CSV exports.
pub const CSV_FILENAME: &str = "TypewiseEmojis.csv";

/// CSV header row.
pub const CSV_HEADER: [&str; 3] = ["shortcut", "phrase", "locale"];

/// Output format selected by a platform name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Property list for iOS text replacements.
    Plist,
    /// CSV, the fallback for every other platform.
    Csv,
}

impl ExportKind {
    /// Select a format from a platform name.
    ///
    /// Only `"ios"` selects the property list; any other value is CSV.
    pub fn from_platform(platform: &str) -> Self {
        if platform == "ios" {
            Self::Plist
        } else {
            Self::Csv
        }
    }

    /// Suggested download filename.
    pub fn filename(self) -> &'static str {
        match self {
            Self::Plist => PLIST_FILENAME,
            Self::Csv => CSV_FILENAME,
        }
    }

    /// MIME type of the serialized bytes.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Plist => "application/x-plist",
            Self::Csv => "text/csv; charset=utf-8",
        }
    }
}

/// A serialized mapping ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct Export {
    /// Format the bytes are encoded in.
    pub kind: ExportKind,
    /// Serialized file contents.
    pub bytes: Vec<u8>,
}

impl Export {
    /// Suggested download filename for this format.
    pub fn filename(&self) -> &'static str {
        self.kind.filename()
    }

    /// MIME type for the `Content-Type` header.
    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }
}

/// Serialize a mapping in the given format.
pub fn export(entries: &[EmojiEntry], kind: ExportKind) -> Result<Export> {
    let bytes = match kind {
        ExportKind::Plist => to_plist(entries)?,
        ExportKind::Csv => to_csv(entries)?,
    };
    tracing::debug!(?kind, entries = entries.len(), bytes = bytes.len(), "mapping exported");
    Ok(Export { kind, bytes })
}

/// Encode a mapping as an XML property list.
pub fn to_plist(entries: &[EmojiEntry]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    plist::to_writer_xml(&mut buf, &entries)?;
    Ok(buf)
}

/// Encode a mapping as CSV, one row per entry with the locale fixed to `en`.
///
/// Fields are quoted only when they contain a delimiter, quote, or line
/// break, so ordinary rows read `:fire,🔥,en`.
pub fn to_csv(entries: &[EmojiEntry]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for entry in entries {
        writer.write_record([entry.shortcut.as_str(), entry.phrase.as_str(), LOCALE])?;
    }

    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}
