//! maillage-cli
//! ============
//!
//! Command-line interface for the `maillage-core` administrative mesh
//! resolver.
//!
//! This crate primarily provides a binary (`maillage`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! maillage stats
//! maillage breadcrumb 21231
//! maillage near 21231 --limit 5
//! maillage search "saint jean" --level commune
//! ```
//!
//! The dataset defaults to the sample bundled with `maillage-core`; point
//! `--data` (or `MAILLAGE_DATA`) at a JSON export of the full mesh table.
//! Set `RUST_LOG=debug` to see query timings.
#![cfg_attr(docsrs, feature(doc_cfg))]
