//! The metadata-source plugin contract and the registry that drives it.

use std::collections::HashMap;

use async_trait::async_trait;

use super::distance::Distance;
use super::hooks::{AlbumInfo, ImportSession, Item, TrackInfo};
use crate::error::Result;

/// Item index → track index within the candidate album
pub type ItemTrackMapping = HashMap<usize, usize>;

/// A source of candidate releases for the importer.
///
/// Only [`candidates`](MetadataSourcePlugin::candidates) is required; the
/// other hooks default to "nothing to contribute".
#[async_trait]
pub trait MetadataSourcePlugin: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Called once when an import run starts.
    async fn import_begin(&mut self, _session: &ImportSession) -> Result<()> {
        Ok(())
    }

    /// Candidate releases for a group of items believed to form one album.
    async fn candidates(
        &self,
        items: &[Item],
        artist: &str,
        album: &str,
        va_likely: bool,
    ) -> Result<Vec<AlbumInfo>>;

    /// This source's contribution to the distance of `album_info`.
    fn album_distance(
        &self,
        _items: &[Item],
        _album_info: &AlbumInfo,
        _mapping: &ItemTrackMapping,
    ) -> Distance {
        Distance::new()
    }

    async fn album_for_id(&self, _album_id: &str) -> Result<Option<AlbumInfo>> {
        Ok(None)
    }

    async fn track_for_id(&self, _track_id: &str) -> Result<Option<TrackInfo>> {
        Ok(None)
    }
}

/// The set of registered metadata sources
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn MetadataSourcePlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, plugin: Box<dyn MetadataSourcePlugin>) {
        tracing::debug!("Registered metadata source '{}'", plugin.name());
        self.plugins.push(plugin);
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Run every source's import hook. Stops at the first failure.
    pub async fn import_begin(&mut self, session: &ImportSession) -> Result<()> {
        for plugin in &mut self.plugins {
            plugin.import_begin(session).await?;
        }
        Ok(())
    }

    /// Candidates from every source, in registration order.
    pub async fn candidates(
        &self,
        items: &[Item],
        artist: &str,
        album: &str,
        va_likely: bool,
    ) -> Result<Vec<AlbumInfo>> {
        let mut all = Vec::new();
        for plugin in &self.plugins {
            let found = plugin.candidates(items, artist, album, va_likely).await?;
            tracing::debug!("{} candidate(s) from '{}'", found.len(), plugin.name());
            all.extend(found);
        }
        Ok(all)
    }

    /// Sum of every source's distance contribution.
    pub fn album_distance(
        &self,
        items: &[Item],
        album_info: &AlbumInfo,
        mapping: &ItemTrackMapping,
    ) -> Distance {
        let mut dist = Distance::new();
        for plugin in &self.plugins {
            dist.update(&plugin.album_distance(items, album_info, mapping));
        }
        dist
    }

    /// First source that resolves `album_id`.
    pub async fn album_for_id(&self, album_id: &str) -> Result<Option<AlbumInfo>> {
        for plugin in &self.plugins {
            if let Some(album) = plugin.album_for_id(album_id).await? {
                return Ok(Some(album));
            }
        }
        Ok(None)
    }

    /// First source that resolves `track_id`.
    pub async fn track_for_id(&self, track_id: &str) -> Result<Option<TrackInfo>> {
        for plugin in &self.plugins {
            if let Some(track) = plugin.track_for_id(track_id).await? {
                return Ok(Some(track));
            }
        }
        Ok(None)
    }
}
