//! Error handling example for maillage-core
//!
//! Shows the error kinds a caller meets and how to tell them apart.

use maillage_core::prelude::*;

fn main() {
    println!("=== maillage-core Error Handling Example ===\n");

    // Example 1: A dataset that does not exist
    println!("--- Example 1: Missing dataset ---");
    match MemoryStore::load_from_path("/nonexistent/maillage.json") {
        Ok(_) => println!("Unexpectedly loaded"),
        Err(e) => println!("✓ Error: {e}"),
    }
    println!();

    let resolver = match MemoryStore::load_default() {
        Ok(store) => MeshResolver::new(store),
        Err(e) => {
            eprintln!("Failed to load sample mesh: {e}");
            return;
        }
    };

    // Example 2: Malformed identifiers
    println!("--- Example 2: Malformed identifiers ---");
    for id in ["2121", "21A121231", "2121212310"] {
        match MeshId::parse(id) {
            Ok(id) => println!("{id}: valid"),
            Err(MeshError::InvalidIdentifier { id, reason }) => println!("{id:?}: {reason}"),
            Err(e) => println!("{id:?}: unexpected error {e}"),
        }
    }
    println!();

    // Example 3: Absent units
    println!("--- Example 3: Absent units ---");
    match resolver.unit("99999", Level::Commune) {
        Ok(None) => println!("✓ lookup: nothing there"),
        Ok(Some(u)) => println!("found {}", u.libelle),
        Err(e) => println!("store error: {e}"),
    }
    match resolver.breadcrumb("99999", Level::Commune) {
        Err(e) if e.is_not_found() => println!("✓ breadcrumb: {e}"),
        other => println!("unexpected: {other:?}"),
    }
    println!();

    // Example 4: Unusable centres do not fail a query
    println!("--- Example 4: Units without a usable centre ---");
    if let Ok(Some(near)) = resolver.neighbours_with(
        "21231",
        Level::Commune,
        &ProximityOptions::single_unit().with_limit(50),
    ) {
        for n in near.neighbours.iter().filter(|n| n.distance_m.is_none()) {
            println!("- {} ranked last, centre {:?}", n.unit.libelle, n.unit.centre);
        }
    }
    println!();

    // Example 5: Invalid level names
    println!("--- Example 5: Parsing levels ---");
    for name in ["Département", "canton"] {
        match name.parse::<Level>() {
            Ok(level) => println!("{name:?} -> {level}"),
            Err(e) => println!("{name:?} -> {e}"),
        }
    }
}
