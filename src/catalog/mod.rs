/// Catalog module
///
/// This module owns the static watch catalog:
/// - Watch records and their identifiers (data.rs)
/// - The immutable catalog store and its construction (store.rs)
/// - Background image-asset loading for the grid (images.rs)

pub mod data;
pub mod images;
pub mod store;
