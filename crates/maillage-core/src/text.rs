// crates/maillage-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte-d'Or` -> `Cote-d'Or`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use maillage_core::text::fold_key;
///
/// assert_eq!(fold_key("Île-de-France"), "ile-de-france");
/// assert_eq!(fold_key("Côte-d'Or"), "cote-d'or");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}
