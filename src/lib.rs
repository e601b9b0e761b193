//! Gracenote metadata source for tag-matching importers.
//!
//! The importer (the "host") drives a set of metadata sources through the
//! [`autotag::MetadataSourcePlugin`] trait. This crate provides one of them,
//! [`GracenotePlugin`], which searches Gracenote for albums and translates the
//! response into the host's [`AlbumInfo`] / [`TrackInfo`] records.
//!
//! # Architecture
//!
//! - **Host contract** (`autotag/`) - record types, distance accumulator,
//!   plugin trait and registry
//! - **Gracenote** (`gracenote/`) - XML DTOs, HTTP client, DTO → record
//!   adapter, and the plugin itself
//! - **Config** (`config.rs`) - the `[gracenote]` TOML table
//!
//! # Usage
//!
//! ```ignore
//! use gracenote_autotag::{config, GracenotePlugin, ImportSession, PluginRegistry};
//!
//! let config = config::load();
//! let mut registry = PluginRegistry::new();
//! registry.register(Box::new(GracenotePlugin::new(config.gracenote)?));
//!
//! registry.import_begin(&ImportSession::new("/music/incoming")).await?;
//! let albums = registry.candidates(&items, "Miles Davis", "Kind of Blue", false).await?;
//! ```

pub mod autotag;
pub mod config;
pub mod error;
pub mod gracenote;
#[cfg(test)]
pub mod test_utils;

pub use autotag::{
    AlbumInfo, Distance, ImportSession, Item, ItemTrackMapping, LenientNumber,
    MetadataSourcePlugin, PluginRegistry, TrackInfo,
};
pub use error::{Error, Result};
pub use gracenote::{GracenoteClient, GracenoteError, GracenotePlugin, SearchQuery};
