//! Gracenote Web API Data Transfer Objects
//!
//! These types match the XML the Web API returns.
//! DO NOT use these types outside the gracenote module - convert to host records.
//!
//! Every response is wrapped the same way:
//!
//! ```text
//! <RESPONSES>
//!   <RESPONSE STATUS="OK|NO_MATCH|ERROR">
//!     <USER>…</USER>          (REGISTER)
//!     <ALBUM>…</ALBUM>        (ALBUM_SEARCH)
//!     <MESSAGE>…</MESSAGE>    (errors)
//!   </RESPONSE>
//! </RESPONSES>
//! ```
//!
//! Every album/track field is optional: the service omits what it doesn't know.
//! Elements nothing reads (`GENRE`, `TRACK_COUNT`, ...) are skipped.

use serde::Deserialize;

/// Response status values
pub const STATUS_OK: &str = "OK";
pub const STATUS_NO_MATCH: &str = "NO_MATCH";

/// Top-level `<RESPONSES>` element
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Responses {
    #[serde(rename = "RESPONSE", default)]
    pub responses: Vec<Response>,
    /// Set when the whole request was rejected (malformed query)
    #[serde(rename = "MESSAGE")]
    pub message: Option<String>,
}

/// A single `<RESPONSE>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(rename = "@STATUS")]
    pub status: String,
    /// User id returned by REGISTER
    #[serde(rename = "USER")]
    pub user: Option<String>,
    #[serde(rename = "ALBUM", default)]
    pub albums: Vec<Album>,
    #[serde(rename = "MESSAGE")]
    pub message: Option<String>,
}

/// Album search result
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Album {
    /// Gracenote album id
    #[serde(rename = "GN_ID")]
    pub gn_id: Option<String>,
    /// Album artist name
    #[serde(rename = "ARTIST")]
    pub artist: Option<String>,
    #[serde(rename = "TITLE")]
    pub title: Option<String>,
    /// Package language code (e.g. "ENG")
    #[serde(rename = "PKG_LANG")]
    pub pkg_lang: Option<String>,
    /// Release year, usually four digits
    #[serde(rename = "DATE")]
    pub date: Option<String>,
    #[serde(rename = "TRACK", default)]
    pub tracks: Vec<Track>,
}

/// Track within an album result
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Track {
    /// Position on the album, as text
    #[serde(rename = "TRACK_NUM")]
    pub track_num: Option<String>,
    /// Gracenote track id
    #[serde(rename = "GN_ID")]
    pub gn_id: Option<String>,
    /// Only present when it differs from the album artist
    #[serde(rename = "ARTIST")]
    pub artist: Option<String>,
    #[serde(rename = "TITLE")]
    pub title: Option<String>,
}

/// Parse a raw response body
pub fn parse_responses(xml: &str) -> Result<Responses, quick_xml::de::DeError> {
    quick_xml::de::from_str(xml)
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
