//! Gracenote album search
//!
//! - **DTOs** (`dto.rs`) - exact XML response shapes
//! - **Adapter** (`adapter.rs`) - DTO → [`AlbumInfo`](crate::AlbumInfo)
//! - **Client** (`client.rs`) - HTTP client for the XML Web API
//! - **Plugin** (`plugin.rs`) - the importer-facing metadata source

mod adapter;
mod client;
mod domain;
pub mod dto;
mod plugin;
pub mod traits;

pub use adapter::{DATA_SOURCE, is_various_artists, to_album_info, to_track_info, to_track_infos};
pub use client::GracenoteClient;
pub use domain::{GracenoteError, SearchQuery};
pub use plugin::{GracenotePlugin, SOURCE_PENALTY_KEY};
pub use traits::GracenoteApi;
