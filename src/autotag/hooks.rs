//! Record types exchanged between the importer and its metadata sources.
//!
//! These are the HOST's shapes. Every metadata source converts its own API
//! responses into these types; nothing source-specific lives here.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// A numeric field that the source may deliver as arbitrary text.
///
/// Pure decimal text is parsed, anything else is kept verbatim so the
/// importer can still show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LenientNumber {
    Number(u32),
    Raw(String),
}

impl LenientNumber {
    /// Parse `text` if it is non-empty ASCII decimal that fits a `u32`.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = text.parse() {
                return Self::Number(n);
            }
        }
        Self::Raw(text)
    }

    /// The parsed value, if the text was numeric.
    pub fn as_number(&self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for LenientNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

/// One track of a candidate release
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackInfo {
    pub title: Option<String>,
    pub track_id: Option<String>,
    pub artist: Option<String>,
    /// Position on the release
    pub index: Option<LenientNumber>,
    pub artist_id: Option<String>,
    pub length: Option<Duration>,
    pub medium: Option<u32>,
    pub medium_index: Option<u32>,
    pub medium_total: Option<u32>,
    pub data_source: Option<String>,
    pub data_url: Option<String>,
}

/// A candidate release as offered by a metadata source.
///
/// All fields exist on every record; a source that has no value for a field
/// leaves it `None` rather than omitting it.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumInfo {
    pub album: String,
    pub album_id: String,
    pub artist: String,
    pub artist_id: Option<String>,
    pub tracks: Vec<TrackInfo>,
    pub asin: Option<String>,
    pub albumtype: Option<String>,
    /// Various-artists release
    pub va: bool,
    pub year: Option<LenientNumber>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub label: Option<String>,
    pub mediums: Option<u32>,
    pub artist_sort: Option<String>,
    pub releasegroup_id: Option<String>,
    pub catalognum: Option<String>,
    pub script: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub albumstatus: Option<String>,
    pub media: Option<String>,
    pub albumdisambig: Option<String>,
    pub artist_credit: Option<String>,
    pub original_year: Option<u32>,
    pub original_month: Option<u32>,
    pub original_day: Option<u32>,
    /// Name of the source that produced this record
    pub data_source: String,
    pub data_url: Option<String>,
}

/// A library item the importer is trying to identify
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub track: Option<u32>,
}

/// Handle for one import run.
///
/// Sources only use it as the "import started" signal.
#[derive(Debug, Clone, Default)]
pub struct ImportSession {
    description: Option<String>,
}

impl ImportSession {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    /// Free-form label for logs (usually the import path)
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
