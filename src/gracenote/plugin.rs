//! Gracenote as an importer metadata source.
//!
//! Lifecycle:
//! 1. `import_begin` registers the configured client id and keeps the
//!    returned user id for the rest of the import run. Without a client id
//!    the source stays disabled and every lookup comes back empty.
//! 2. `candidates` runs one album search per release and offers at most one
//!    album.
//! 3. `album_distance` penalizes Gracenote matches by `source_weight`.
//!
//! Gracenote searches are free-text only, so the by-id hooks never find
//! anything.

use async_trait::async_trait;

use super::adapter::{self, DATA_SOURCE};
use super::client::GracenoteClient;
use super::domain::SearchQuery;
use super::dto;
use super::traits::GracenoteApi;
use crate::autotag::{
    AlbumInfo, Distance, ImportSession, Item, ItemTrackMapping, MetadataSourcePlugin,
};
use crate::config::{GracenoteConfig, Secret};
use crate::error::{Result, ResultExt};

/// Distance key for the per-source penalty
pub const SOURCE_PENALTY_KEY: &str = "source";

/// Credentials for the current import run
struct Session {
    client_id: Secret,
    user_id: String,
}

/// Gracenote metadata source
pub struct GracenotePlugin<A = GracenoteClient> {
    config: GracenoteConfig,
    api: A,
    /// Set by `import_begin`; `None` means disabled
    session: Option<Session>,
}

impl GracenotePlugin<GracenoteClient> {
    /// Create the source with a real HTTP client
    pub fn new(config: GracenoteConfig) -> Result<Self> {
        Ok(Self::with_api(config, GracenoteClient::new()?))
    }
}

impl<A: GracenoteApi> GracenotePlugin<A> {
    /// Create the source on top of any [`GracenoteApi`]
    pub fn with_api(config: GracenoteConfig, api: A) -> Self {
        Self {
            config,
            api,
            session: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Whether `import_begin` obtained a user id
    pub fn is_enabled(&self) -> bool {
        self.session.is_some()
    }

    /// Register with Gracenote if a client id is configured.
    ///
    /// Registration failures propagate; an empty client id just leaves the
    /// source disabled.
    pub async fn setup(&mut self) -> Result<()> {
        self.session = None;

        let client_id = self.config.client_id.clone();
        if client_id.is_empty() {
            tracing::info!("No Gracenote client_id configured, source disabled");
            return Ok(());
        }

        let user_id = self
            .api
            .register(client_id.expose())
            .await
            .with_context("Gracenote registration failed")?;

        tracing::debug!("Registered with Gracenote");
        self.session = Some(Session { client_id, user_id });
        Ok(())
    }

    /// Run an album search with the session credentials.
    ///
    /// A disabled source returns `Ok(None)` without calling Gracenote.
    pub async fn search(&self, query: &SearchQuery) -> Result<Option<dto::Album>> {
        let Some(session) = &self.session else {
            return Ok(None);
        };
        Ok(self
            .api
            .search(session.client_id.expose(), &session.user_id, query)
            .await?)
    }
}

#[async_trait]
impl<A: GracenoteApi> MetadataSourcePlugin for GracenotePlugin<A> {
    fn name(&self) -> &str {
        "gracenote"
    }

    async fn import_begin(&mut self, session: &ImportSession) -> Result<()> {
        if let Some(description) = session.description() {
            tracing::debug!("Import started: {}", description);
        }
        self.setup().await
    }

    async fn candidates(
        &self,
        _items: &[Item],
        artist: &str,
        album: &str,
        va_likely: bool,
    ) -> Result<Vec<AlbumInfo>> {
        if !self.is_enabled() {
            return Ok(vec![]);
        }

        // A compilation has no single artist worth searching for
        let query = if va_likely {
            SearchQuery::album(album)
        } else {
            SearchQuery::artist_album(artist, album)
        };

        let Some(result) = self.search(&query).await? else {
            return Ok(vec![]);
        };

        Ok(adapter::to_album_info(result).into_iter().collect())
    }

    fn album_distance(
        &self,
        _items: &[Item],
        album_info: &AlbumInfo,
        _mapping: &ItemTrackMapping,
    ) -> Distance {
        let mut dist = Distance::new();
        if album_info.data_source == DATA_SOURCE {
            dist.add(SOURCE_PENALTY_KEY, self.config.source_weight);
        }
        dist
    }
}
