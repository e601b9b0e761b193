//! Adapter layer: Convert Gracenote DTOs to host records
//!
//! This is the ONLY place where DTO types are converted to host types.
//! If Gracenote changes its response format, only this file and dto.rs
//! need to change.

use super::dto;
use crate::autotag::{AlbumInfo, LenientNumber, TrackInfo};

/// `data_source` tag on every record produced here
pub const DATA_SOURCE: &str = "Gracenote";

/// Convert an album search result into an [`AlbumInfo`].
///
/// Returns `None` (with a warning) unless artist, tracks, id and title are
/// all present and non-empty.
pub fn to_album_info(album: dto::Album) -> Option<AlbumInfo> {
    let dto::Album {
        gn_id,
        artist,
        title,
        pkg_lang,
        date,
        tracks,
        ..
    } = album;

    let has_tracks = !tracks.is_empty();
    let (Some(artist), Some(album_id), Some(title), true) = (
        non_empty(artist),
        non_empty(gn_id),
        non_empty(title),
        has_tracks,
    ) else {
        tracing::warn!("Release does not contain the required fields");
        return None;
    };

    let tracks = to_track_infos(tracks, &artist);
    let va = is_various_artists(&artist);
    let year = date.map(LenientNumber::parse);

    Some(AlbumInfo {
        album: title,
        album_id,
        artist,
        artist_id: None,
        tracks,
        asin: None,
        albumtype: None,
        va,
        year,
        month: None,
        day: None,
        label: None,
        mediums: None,
        artist_sort: None,
        releasegroup_id: None,
        catalognum: None,
        script: None,
        language: None,
        country: pkg_lang,
        albumstatus: None,
        media: None,
        albumdisambig: None,
        artist_credit: None,
        original_year: None,
        original_month: None,
        original_day: None,
        data_source: DATA_SOURCE.to_string(),
        data_url: None,
    })
}

/// Convert every track, in order. Tracks without their own artist are
/// credited to `default_artist`.
pub fn to_track_infos(tracks: Vec<dto::Track>, default_artist: &str) -> Vec<TrackInfo> {
    tracks
        .into_iter()
        .map(|mut track| {
            if track.artist.is_none() {
                track.artist = Some(default_artist.to_string());
            }
            to_track_info(track)
        })
        .collect()
}

/// Convert a single track
pub fn to_track_info(track: dto::Track) -> TrackInfo {
    TrackInfo {
        title: track.title,
        track_id: track.gn_id,
        artist: track.artist,
        index: track.track_num.map(LenientNumber::parse),
        ..Default::default()
    }
}

/// "Various Artists", "various", " VARIOUS ARTISTS " ...
pub fn is_various_artists(artist: &str) -> bool {
    artist.trim().to_lowercase().starts_with("various")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
