// crates/maillage-core/src/search.rs

//! # Search Ranking
//!
//! Relevance tiers for a free-text term against unit labels (`libelle`).
//! All comparisons run on [`fold_key`] output, so they ignore case and
//! accents.
//!
//! # Tiers (ascending = more relevant)
//!
//! 1. label equals the term
//! 2. label starts with the term
//! 3. label contains the term
//! 4. label contains every word of a multi-word term, in any order
//! 5. anything else the store handed over
//!
//! Ties break on level (region, departement, commune) and then on the
//! folded label.

use crate::model::MeshUnit;
use crate::text::fold_key;
use serde::Serialize;

/// Upper bound applied to every caller-supplied search limit.
pub const MAX_SEARCH_LIMIT: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact = 1,
    Prefix = 2,
    Contains = 3,
    AllWords = 4,
    Other = 5,
}

impl MatchTier {
    /// Numeric rank, 1 (best) to 5.
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// A normalized search term.
#[derive(Clone, Debug)]
pub struct SearchTerm {
    folded: String,
    words: Vec<String>,
}

impl SearchTerm {
    /// `None` for an empty or whitespace-only term.
    pub fn parse(term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        let folded = fold_key(term);
        let words = folded.split_whitespace().map(str::to_owned).collect();
        Some(SearchTerm { folded, words })
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    fn is_multi_word(&self) -> bool {
        self.words.len() > 1
    }

    fn all_words_in(&self, folded_label: &str) -> bool {
        self.is_multi_word() && self.words.iter().all(|w| folded_label.contains(w.as_str()))
    }

    /// The base filter a store applies before ranking.
    pub fn matches_coarse(&self, label: &str) -> bool {
        let label = fold_key(label);
        label.contains(&self.folded) || self.all_words_in(&label)
    }

    /// Relevance tier of `label` for this term.
    pub fn tier(&self, label: &str) -> MatchTier {
        self.tier_folded(&fold_key(label))
    }

    fn tier_folded(&self, label: &str) -> MatchTier {
        if label == self.folded {
            MatchTier::Exact
        } else if label.starts_with(&self.folded) {
            MatchTier::Prefix
        } else if label.contains(&self.folded) {
            MatchTier::Contains
        } else if self.all_words_in(label) {
            MatchTier::AllWords
        } else {
            MatchTier::Other
        }
    }
}

/// One ranked search result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchHit {
    pub tier: MatchTier,
    pub unit: MeshUnit,
}

/// Clamp a caller-supplied limit to `max`.
pub fn clamp_limit(limit: usize, max: usize) -> usize {
    limit.min(max)
}

/// Rank `candidates` against `term` and keep the best `limit`.
///
/// An empty or whitespace-only term yields nothing.
pub fn rank_search(term: &str, candidates: Vec<MeshUnit>, limit: usize) -> Vec<SearchHit> {
    let Some(term) = SearchTerm::parse(term) else {
        return Vec::new();
    };

    let mut keyed: Vec<(MatchTier, String, MeshUnit)> = candidates
        .into_iter()
        .map(|unit| {
            let label = fold_key(&unit.libelle);
            (term.tier_folded(&label), label, unit)
        })
        .collect();

    keyed.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| a.2.niveau.cmp(&b.2.niveau))
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.libelle.cmp(&b.2.libelle))
    });

    keyed
        .into_iter()
        .take(limit)
        .map(|(tier, _, unit)| SearchHit { tier, unit })
        .collect()
}
