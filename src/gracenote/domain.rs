//! Gracenote search inputs and errors.

/// Free-text album search. Any combination of fields may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub track: Option<String>,
}

impl SearchQuery {
    /// Search by album title only
    pub fn album(album: impl Into<String>) -> Self {
        Self {
            album: Some(album.into()),
            ..Default::default()
        }
    }

    /// Search by artist and album title
    pub fn artist_album(artist: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            album: Some(album.into()),
            track: None,
        }
    }

    pub fn with_track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }
}

/// Errors from the Gracenote Web API
#[derive(Debug, Clone, thiserror::Error)]
pub enum GracenoteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Registration rejected: {0}")]
    Registration(String),
}
