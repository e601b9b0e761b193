//! Test utilities and fixtures for gracenote-autotag tests.
//!
//! This module provides raw Gracenote fixtures, a ready-made host record,
//! and a helper for asserting on emitted warnings.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{count_warnings, mock_album};
//!
//! let (info, warnings) = count_warnings(|| to_album_info(mock_album()));
//! assert_eq!(warnings, 0);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::autotag::{AlbumInfo, TrackInfo};
use crate::gracenote::dto;

/// Creates a complete album search result (Kind of Blue, two tracks).
///
/// The first track carries no artist of its own; the second does.
/// Customize using struct update syntax:
///
/// ```ignore
/// let raw = dto::Album {
///     date: None,
///     ..mock_album()
/// };
/// ```
pub fn mock_album() -> dto::Album {
    dto::Album {
        gn_id: Some("97474325-8C5AEE8A3E7A3E4E9DF2A8A9A1AE9F0A".to_string()),
        artist: Some("Miles Davis".to_string()),
        title: Some("Kind Of Blue".to_string()),
        pkg_lang: Some("ENG".to_string()),
        date: Some("1959".to_string()),
        tracks: vec![
            mock_track("1", "So What", None),
            mock_track("2", "Freddie Freeloader", Some("Miles Davis Sextet")),
        ],
    }
}

/// Creates a raw track with a derived Gracenote id.
pub fn mock_track(number: &str, title: &str, artist: Option<&str>) -> dto::Track {
    dto::Track {
        track_num: Some(number.to_string()),
        gn_id: Some(format!("trk-{}", number)),
        artist: artist.map(String::from),
        title: Some(title.to_string()),
    }
}

/// Creates a host album record from a source other than Gracenote.
pub fn mock_album_info() -> AlbumInfo {
    AlbumInfo {
        album: "Test Album".to_string(),
        album_id: "album-1".to_string(),
        artist: "Test Artist".to_string(),
        artist_id: None,
        tracks: vec![TrackInfo {
            title: Some("Test Track".to_string()),
            track_id: Some("track-1".to_string()),
            artist: Some("Test Artist".to_string()),
            ..Default::default()
        }],
        asin: None,
        albumtype: None,
        va: false,
        year: None,
        month: None,
        day: None,
        label: None,
        mediums: None,
        artist_sort: None,
        releasegroup_id: None,
        catalognum: None,
        script: None,
        language: None,
        country: None,
        albumstatus: None,
        media: None,
        albumdisambig: None,
        artist_credit: None,
        original_year: None,
        original_month: None,
        original_day: None,
        data_source: "MusicBrainz".to_string(),
        data_url: None,
    }
}

/// Counts WARN-level events
struct WarningCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Runs `f` under a scoped subscriber and returns its result together with
/// the number of warnings it emitted.
pub fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarningCounter(Arc::clone(&count)));
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, count.load(Ordering::SeqCst))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_album_is_complete() {
        let album = mock_album();
        assert!(album.gn_id.is_some());
        assert!(album.artist.is_some());
        assert!(album.title.is_some());
        assert_eq!(album.tracks.len(), 2);
        assert!(album.tracks[0].artist.is_none());
    }

    #[test]
    fn test_count_warnings_counts_only_warnings() {
        let ((), warnings) = count_warnings(|| {
            tracing::info!("not counted");
            tracing::warn!("counted");
            tracing::error!("not counted either");
            tracing::warn!("counted again");
        });
        assert_eq!(warnings, 2);
    }
}
