// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge: *where the ground truth lives in the HTML* and
//! what shape it has once extracted.
//!
//! ## What lives here
//! - `league_stats` – FBref player standard stats: canonical field names, the
//!   placeholder columns to drop, the repeated-header sentinel. The generic
//!   comment → table → canonical pipeline lives in `table`.
//! - `shots` – FotMob match pages: the `__NEXT_DATA__` payload, shot rows,
//!   xG imputation and shot-map classification.
//!
//! ## What does **not** live here
//! - Networking and file output (`core::net`, `file`).
//! - Prompting and path resolution (`cli`, `config`).
//!
//! ## Testing notes
//! - Specs are testable **offline** against captured fixtures (`tests/fixtures`).
pub mod league_stats;
pub mod shots;
