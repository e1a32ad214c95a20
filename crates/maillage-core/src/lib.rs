// crates/maillage-core/src/lib.rs

//! # maillage-core
//!
//! Resolver for the French administrative mesh (regions, départements,
//! communes).
//!
//! Every unit carries a 9-character hierarchical identifier
//! (`RR` region + `DD` department + `CCCCC` commune, zero-filled below the
//! unit's own level). The crate decodes those identifiers into ancestor and
//! sibling relations and builds three query families on top of a
//! [`MeshStore`]:
//!
//! - breadcrumbs: [`MeshResolver::breadcrumb`]
//! - nearest siblings by geodesic distance: [`MeshResolver::neighbours`]
//! - tiered, accent-insensitive label search: [`MeshResolver::search`]
//!
//! ```rust
//! use maillage_core::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let store = MemoryStore::load_default()?;
//! let resolver = MeshResolver::new(store);
//!
//! let chain = resolver.breadcrumb("21231", Level::Commune)?;
//! assert_eq!(chain.first().map(|c| c.niveau), Some(Level::Region));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod breadcrumb;
pub mod codec;
pub mod config;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod proximity;
// Raw input shape of JSON exports
#[doc(hidden)]
pub mod raw;
pub mod resolver;
pub mod search;
pub mod store;
pub mod text;

// Re-exports
pub use crate::codec::{IdPattern, MeshId};
pub use crate::config::ResolverConfig;
pub use crate::error::{MeshError, Result};
pub use crate::geometry::{Centre, LatLng};
pub use crate::model::{BreadcrumbEntry, Level, MeshStats, MeshUnit};
pub use crate::proximity::{Neighbour, Proximity, ProximityOptions};
pub use crate::resolver::MeshResolver;
pub use crate::search::{MatchTier, SearchHit, MAX_SEARCH_LIMIT};
pub use crate::store::{MemoryStore, MeshStore};
