// crates/maillage-core/src/breadcrumb.rs
use crate::codec::MeshId;
use crate::error::{MeshError, Result};
use crate::model::{BreadcrumbEntry, Level, MeshUnit};
use crate::store::MeshStore;
use std::collections::HashSet;

/// Ancestor chain of the unit `(code, niveau)`, broadest first, ending with
/// the unit itself.
///
/// Ancestors missing from the store are skipped, so a commune may come back
/// with only itself and its region. Entries are deduplicated by `code`,
/// first occurrence wins. Store failures propagate.
pub fn resolve_breadcrumb<S: MeshStore + ?Sized>(
    store: &S,
    code: &str,
    niveau: Level,
) -> Result<Vec<BreadcrumbEntry>> {
    let unit = store
        .find_by_code_and_level(code, niveau)?
        .ok_or_else(|| MeshError::not_found(code, niveau))?;

    let id = match MeshId::parse(&unit.id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(
                code,
                %niveau,
                error = %e,
                "stored identifier is malformed, breadcrumb limited to the unit"
            );
            return Ok(vec![unit.to_crumb()]);
        }
    };

    let mut chain: Vec<BreadcrumbEntry> = Vec::with_capacity(3);

    push_ancestor(store, &id.region_ancestor(), &mut chain)?;
    if matches!(niveau, Level::Departement | Level::Commune) {
        push_ancestor(store, &id.department_ancestor(), &mut chain)?;
    }
    chain.push(unit.to_crumb());

    Ok(dedup_by_code(chain))
}

fn push_ancestor<S: MeshStore + ?Sized>(
    store: &S,
    id: &MeshId,
    chain: &mut Vec<BreadcrumbEntry>,
) -> Result<()> {
    match store.find_by_id(id.as_str())? {
        Some(ancestor) => chain.push(MeshUnit::to_crumb(&ancestor)),
        None => tracing::debug!(ancestor = %id, "ancestor not in store, skipped"),
    }
    Ok(())
}

fn dedup_by_code(chain: Vec<BreadcrumbEntry>) -> Vec<BreadcrumbEntry> {
    let mut seen = HashSet::new();
    chain
        .into_iter()
        .filter(|entry| seen.insert(entry.code.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn unit(id: &str, code: &str, libelle: &str, niveau: Level) -> MeshUnit {
        MeshUnit {
            id: id.into(),
            code: code.into(),
            libelle: libelle.into(),
            niveau,
            shape: None,
            centre: None,
        }
    }

    fn bourgogne() -> Vec<MeshUnit> {
        vec![
            unit("210000000", "27", "Bourgogne", Level::Region),
            unit("212100000", "21", "Côte-d'Or", Level::Departement),
            unit("212121032", "21032", "Is-sur-Tille", Level::Commune),
        ]
    }

    fn crumbs(chain: &[BreadcrumbEntry]) -> Vec<(Level, &str)> {
        chain.iter().map(|c| (c.niveau, c.libelle.as_str())).collect()
    }

    #[test]
    fn commune_chain_region_department_commune() {
        let store = MemoryStore::new(bourgogne()).unwrap();
        let chain = resolve_breadcrumb(&store, "21032", Level::Commune).unwrap();
        assert_eq!(
            crumbs(&chain),
            [
                (Level::Region, "Bourgogne"),
                (Level::Departement, "Côte-d'Or"),
                (Level::Commune, "Is-sur-Tille"),
            ]
        );
    }

    #[test]
    fn region_is_its_own_single_crumb() {
        let store = MemoryStore::new(bourgogne()).unwrap();
        let chain = resolve_breadcrumb(&store, "27", Level::Region).unwrap();
        assert_eq!(crumbs(&chain), [(Level::Region, "Bourgogne")]);
    }

    #[test]
    fn department_appears_once() {
        let store = MemoryStore::new(bourgogne()).unwrap();
        let chain = resolve_breadcrumb(&store, "21", Level::Departement).unwrap();
        assert_eq!(
            crumbs(&chain),
            [(Level::Region, "Bourgogne"), (Level::Departement, "Côte-d'Or")]
        );
    }

    #[test]
    fn missing_ancestor_is_skipped() {
        let mut units = bourgogne();
        units.remove(1);
        let store = MemoryStore::new(units).unwrap();
        let chain = resolve_breadcrumb(&store, "21032", Level::Commune).unwrap();
        assert_eq!(
            crumbs(&chain),
            [(Level::Region, "Bourgogne"), (Level::Commune, "Is-sur-Tille")]
        );
    }

    #[test]
    fn shared_code_keeps_first_entry() {
        // region and department under the same code collapse to the region
        let store = MemoryStore::new(vec![
            unit("110000000", "75", "Île-de-France", Level::Region),
            unit("117500000", "75", "Paris", Level::Departement),
            unit("117575056", "75056", "Paris", Level::Commune),
        ])
        .unwrap();
        let chain = resolve_breadcrumb(&store, "75056", Level::Commune).unwrap();
        assert_eq!(
            crumbs(&chain),
            [(Level::Region, "Île-de-France"), (Level::Commune, "Paris")]
        );
    }

    #[test]
    fn dedup_preserves_order() {
        let entry = |code: &str, libelle: &str, niveau| BreadcrumbEntry {
            code: code.into(),
            libelle: libelle.into(),
            niveau,
        };
        let chain = vec![
            entry("27", "Bourgogne", Level::Region),
            entry("21", "Côte-d'Or", Level::Departement),
            entry("27", "Doublon", Level::Commune),
            entry("21032", "Is-sur-Tille", Level::Commune),
        ];
        let codes: Vec<_> = dedup_by_code(chain).into_iter().map(|c| c.code).collect();
        assert_eq!(codes, ["27", "21", "21032"]);
    }

    #[test]
    fn unknown_unit_is_not_found() {
        let store = MemoryStore::new(bourgogne()).unwrap();
        let err = resolve_breadcrumb(&store, "99999", Level::Commune).unwrap_err();
        assert!(err.is_not_found());
        // right code, wrong level
        let err = resolve_breadcrumb(&store, "21", Level::Commune).unwrap_err();
        assert!(err.is_not_found());
    }
}
