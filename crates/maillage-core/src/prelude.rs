//! maillage-core prelude: bring common types and traits into scope for demos.

pub use crate::api::{MeshUnitView, NeighbourView, ProximityView, SearchHitView};
pub use crate::codec::{IdPattern, MeshId};
pub use crate::config::ResolverConfig;
pub use crate::error::{MeshError, Result};
pub use crate::geometry::{Centre, LatLng};
pub use crate::model::{BreadcrumbEntry, Level, MeshStats, MeshUnit};
pub use crate::proximity::{Neighbour, Proximity, ProximityOptions};
pub use crate::resolver::MeshResolver;
pub use crate::search::{MatchTier, SearchHit};
pub use crate::store::{MemoryStore, MeshStore};
pub use crate::text::fold_key;
