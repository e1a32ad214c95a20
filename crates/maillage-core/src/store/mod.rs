// crates/maillage-core/src/store/mod.rs

//! # Mesh Store
//!
//! Read-only access to the persisted mesh table. The resolver only ever sees
//! this trait; a relational implementation lives outside the crate, and
//! [`MemoryStore`] is the in-process implementation used by the CLI, the
//! demos and the tests.
//!
//! Implementations report backend failures as
//! [`MeshError::StoreUnavailable`](crate::MeshError::StoreUnavailable) and do
//! not retry.

use crate::codec::IdPattern;
use crate::error::Result;
use crate::model::{Level, MeshStats, MeshUnit};
use std::sync::Arc;

mod memory;

pub use memory::MemoryStore;

pub trait MeshStore {
    /// The unit with this public code at this level.
    fn find_by_code_and_level(&self, code: &str, niveau: Level) -> Result<Option<MeshUnit>>;

    /// The unit with this 9-character identifier.
    fn find_by_id(&self, id: &str) -> Result<Option<MeshUnit>>;

    /// Every unit at `niveau` whose identifier matches `pattern` over its full length.
    fn find_by_id_pattern(&self, pattern: &IdPattern, niveau: Level) -> Result<Vec<MeshUnit>>;

    /// Every unit at `niveau`, truncated to `limit` when one is given.
    fn find_all_by_level(&self, niveau: Level, limit: Option<usize>) -> Result<Vec<MeshUnit>>;

    /// Coarse term filter: labels containing the term, or every word of a
    /// multi-word term, compared case- and accent-insensitively.
    ///
    /// When more than `limit` units match, the ones kept must be the best by
    /// [`crate::search::MatchTier`], so an exact label is never cut in favour
    /// of substring matches. Final ordering is done by [`crate::search`].
    fn search_by_term(
        &self,
        term: &str,
        niveau: Option<Level>,
        limit: usize,
    ) -> Result<Vec<MeshUnit>>;

    /// Unit counts per level.
    fn stats(&self) -> Result<MeshStats>;
}

macro_rules! forward_mesh_store {
    ($($ptr:ty),*) => {$(
        impl<S: MeshStore + ?Sized> MeshStore for $ptr {
            fn find_by_code_and_level(&self, code: &str, niveau: Level) -> Result<Option<MeshUnit>> {
                (**self).find_by_code_and_level(code, niveau)
            }
            fn find_by_id(&self, id: &str) -> Result<Option<MeshUnit>> {
                (**self).find_by_id(id)
            }
            fn find_by_id_pattern(&self, pattern: &IdPattern, niveau: Level) -> Result<Vec<MeshUnit>> {
                (**self).find_by_id_pattern(pattern, niveau)
            }
            fn find_all_by_level(&self, niveau: Level, limit: Option<usize>) -> Result<Vec<MeshUnit>> {
                (**self).find_all_by_level(niveau, limit)
            }
            fn search_by_term(&self, term: &str, niveau: Option<Level>, limit: usize) -> Result<Vec<MeshUnit>> {
                (**self).search_by_term(term, niveau, limit)
            }
            fn stats(&self) -> Result<MeshStats> {
                (**self).stats()
            }
        }
    )*};
}

forward_mesh_store!(&S, Box<S>, Arc<S>);
