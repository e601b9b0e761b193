//! The importer's side of the metadata-source contract.
//!
//! - **Records** (`hooks.rs`) - [`AlbumInfo`], [`TrackInfo`], [`Item`]
//! - **Distance** (`distance.rs`) - named penalties a source adds to a match
//! - **Plugin** (`plugin.rs`) - the [`MetadataSourcePlugin`] trait and the
//!   [`PluginRegistry`] that calls every registered source

pub mod distance;
pub mod hooks;
pub mod plugin;

pub use distance::Distance;
pub use hooks::{AlbumInfo, ImportSession, Item, LenientNumber, TrackInfo};
pub use plugin::{ItemTrackMapping, MetadataSourcePlugin, PluginRegistry};
