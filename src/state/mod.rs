/// State management module
///
/// This module handles all mutable application state:
/// - Favorites and the live name filter (market.rs)
///
/// The catalog itself is immutable and lives in `crate::catalog`.

pub mod market;
