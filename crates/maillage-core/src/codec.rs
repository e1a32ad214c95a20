// crates/maillage-core/src/codec.rs

//! # Hierarchy Codec
//!
//! Pure transformations on the 9-character mesh identifier
//! `RR DD CCCCC`: region (2), department (2), commune (5), each zero-padded.
//!
//! | level       | example     | zeroed segments      |
//! |-------------|-------------|----------------------|
//! | region      | `210000000` | department + commune |
//! | departement | `212100000` | commune              |
//! | commune     | `212121032` | none                 |
//!
//! Every parent/child/sibling relation in the crate is derived here; nothing
//! else slices identifiers. None of these functions touch storage.

use crate::error::{MeshError, Result};
use crate::model::Level;
use std::fmt;

pub const ID_LEN: usize = 9;
pub const REGION_LEN: usize = 2;
pub const DEPARTMENT_LEN: usize = 2;
pub const COMMUNE_LEN: usize = 5;

const DEPARTMENT_END: usize = REGION_LEN + DEPARTMENT_LEN;
const ZERO_DEPARTMENT: &str = "00";
const ZERO_COMMUNE: &str = "00000";

/// A validated mesh identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(String);

impl MeshId {
    /// Validate `id`: exactly 9 bytes, all ASCII decimal digits.
    pub fn parse(id: &str) -> Result<Self> {
        validate(id)?;
        Ok(MeshId(id.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn region_segment(&self) -> &str {
        &self.0[..REGION_LEN]
    }

    pub fn department_segment(&self) -> &str {
        &self.0[REGION_LEN..DEPARTMENT_END]
    }

    pub fn commune_segment(&self) -> &str {
        &self.0[DEPARTMENT_END..]
    }

    /// Level implied by which segments are zero-filled.
    pub fn level(&self) -> Level {
        match (
            self.department_segment() == ZERO_DEPARTMENT,
            self.commune_segment() == ZERO_COMMUNE,
        ) {
            (true, true) => Level::Region,
            (false, true) => Level::Departement,
            _ => Level::Commune,
        }
    }

    /// Identifier of the region containing this unit. Identity on regions.
    pub fn region_ancestor(&self) -> MeshId {
        MeshId(format!(
            "{}{ZERO_DEPARTMENT}{ZERO_COMMUNE}",
            self.region_segment()
        ))
    }

    /// Identifier of the department containing this unit (commune zeroed).
    pub fn department_ancestor(&self) -> MeshId {
        MeshId(format!("{}{ZERO_COMMUNE}", &self.0[..DEPARTMENT_END]))
    }

    /// Pattern selecting every identifier in the same region.
    pub fn sibling_pattern(&self) -> IdPattern {
        IdPattern::new(self.region_segment())
    }

    /// Pattern and level selecting the direct children of a unit at `level`.
    ///
    /// Communes have no children.
    pub fn children_pattern(&self, level: Level) -> Option<(IdPattern, Level)> {
        let child = level.child()?;
        let prefix = match level {
            Level::Region => self.region_segment(),
            Level::Departement => &self.0[..DEPARTMENT_END],
            Level::Commune => return None,
        };
        Some((IdPattern::new(prefix), child))
    }
}

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MeshId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A fixed-length identifier pattern: a literal prefix followed by exactly
/// enough single-character wildcards to reach [`ID_LEN`].
///
/// It never behaves like "starts with": identifiers of any other length are
/// rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdPattern {
    prefix: String,
}

impl IdPattern {
    fn new(prefix: &str) -> Self {
        IdPattern {
            prefix: prefix.to_owned(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn wildcards(&self) -> usize {
        ID_LEN - self.prefix.len()
    }

    /// True if `id` has exactly [`ID_LEN`] characters and starts with the prefix.
    pub fn matches(&self, id: &str) -> bool {
        id.chars().count() == ID_LEN && id.starts_with(&self.prefix)
    }

    /// SQL `LIKE` rendering, one `_` per wildcard character (e.g. `21_______`).
    pub fn to_like(&self) -> String {
        format!("{}{}", self.prefix, "_".repeat(self.wildcards()))
    }
}

impl fmt::Display for IdPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_like())
    }
}

fn validate(id: &str) -> Result<()> {
    if id.len() != ID_LEN {
        return Err(MeshError::InvalidIdentifier {
            id: id.to_owned(),
            reason: "expected exactly 9 characters",
        });
    }
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MeshError::InvalidIdentifier {
            id: id.to_owned(),
            reason: "segments must be decimal digits",
        });
    }
    Ok(())
}

/// Region segment (`id[0..2]`).
///
/// ```
/// use maillage_core::codec::region_segment;
///
/// assert_eq!(region_segment("212121032").unwrap(), "21");
/// assert!(region_segment("2121").is_err());
/// ```
pub fn region_segment(id: &str) -> Result<&str> {
    validate(id)?;
    Ok(&id[..REGION_LEN])
}

/// Department segment (`id[2..4]`).
pub fn department_segment(id: &str) -> Result<&str> {
    validate(id)?;
    Ok(&id[REGION_LEN..DEPARTMENT_END])
}

/// Region identifier above `id`: department and commune zeroed.
///
/// ```
/// use maillage_core::codec::region_ancestor_id;
///
/// assert_eq!(region_ancestor_id("212121032").unwrap(), "210000000");
/// ```
pub fn region_ancestor_id(id: &str) -> Result<String> {
    Ok(MeshId::parse(id)?.region_ancestor().into_string())
}

/// Department identifier above `id`: commune zeroed.
///
/// ```
/// use maillage_core::codec::department_ancestor_id;
///
/// assert_eq!(department_ancestor_id("212121032").unwrap(), "212100000");
/// ```
pub fn department_ancestor_id(id: &str) -> Result<String> {
    Ok(MeshId::parse(id)?.department_ancestor().into_string())
}

/// Pattern and level for "units at `niveau` in the same region as `id`".
///
/// ```
/// use maillage_core::codec::sibling_pattern;
/// use maillage_core::Level;
///
/// let (pattern, level) = sibling_pattern("212121032", Level::Commune).unwrap();
/// assert_eq!(pattern.to_like(), "21_______");
/// assert_eq!(level, Level::Commune);
/// assert!(pattern.matches("212199999"));
/// assert!(!pattern.matches("2121"));
/// ```
pub fn sibling_pattern(id: &str, niveau: Level) -> Result<(IdPattern, Level)> {
    Ok((MeshId::parse(id)?.sibling_pattern(), niveau))
}

/// Pattern and level selecting the direct children of the unit `id` at `niveau`.
pub fn children_pattern(id: &str, niveau: Level) -> Result<Option<(IdPattern, Level)>> {
    Ok(MeshId::parse(id)?.children_pattern(niveau))
}

/// Level implied by the zero-filled segments of `id`.
pub fn level_of(id: &str) -> Result<Level> {
    Ok(MeshId::parse(id)?.level())
}
