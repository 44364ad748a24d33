use std::path::Path;

use thiserror::Error;

use super::data::{Watch, WatchEntry, WatchId};

/// Errors raised while building a catalog from entries or a JSON file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("watch entry {index} has an empty name")]
    EmptyName { index: usize },
    #[error("watch \"{name}\" has a negative price ({price})")]
    NegativePrice { name: String, price: f64 },
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The Catalog is the fixed, ordered list of watches available to the app.
///
/// It is built once at startup and never mutated afterwards: no watch is
/// added, removed, or re-identified at runtime. IDs are assigned here, in
/// entry order, starting at 1.
#[derive(Debug, Clone)]
pub struct Catalog {
    watches: Vec<Watch>,
}

impl Catalog {
    /// Build a catalog from raw entries, assigning IDs in order.
    ///
    /// Entries are validated on the way in: names must be non-empty and
    /// prices must be non-negative (zero is fine, placeholder entries use
    /// it).
    pub fn from_entries(entries: Vec<WatchEntry>) -> Result<Self, CatalogError> {
        let mut watches = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if entry.price < 0.0 {
                return Err(CatalogError::NegativePrice {
                    name: entry.name,
                    price: entry.price,
                });
            }

            watches.push(Watch {
                id: WatchId(index as u64 + 1),
                name: entry.name,
                price: entry.price,
                image_ref: entry.image,
            });
        }

        Ok(Catalog { watches })
    }

    /// Load a catalog from a JSON file containing an array of entries.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let entries: Vec<WatchEntry> = serde_json::from_str(&json)?;
        Self::from_entries(entries)
    }

    /// The builtin demo storefront.
    pub fn builtin() -> Self {
        let entries = vec![
            WatchEntry::new("Elegant Timepiece", 249.99, Some("watchTest")),
            WatchEntry::new("Sporty Chrono", 189.99, Some("watchTest")),
            WatchEntry::new("Classic Leather", 299.99, Some("watch3")),
            WatchEntry::new("Empty Box", 0.0, None),
            WatchEntry::new("Image Not Found", 0.0, Some("nonExistentImage")),
        ];

        // The demo entries are known-valid, so this cannot fail.
        Self::from_entries(entries).expect("builtin catalog entries are valid")
    }

    /// All watches, in catalog order. Identical every call.
    pub fn all(&self) -> &[Watch] {
        &self.watches
    }

    /// Look up a watch by ID.
    pub fn find(&self, id: WatchId) -> Option<&Watch> {
        self.watches.iter().find(|watch| watch.id == id)
    }

    /// Whether an ID refers to a watch in this catalog.
    pub fn contains(&self, id: WatchId) -> bool {
        self.find(id).is_some()
    }

    /// Number of watches in the catalog.
    pub fn len(&self) -> usize {
        self.watches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.all()[0].name, "Elegant Timepiece");
        assert_eq!(catalog.all()[4].name, "Image Not Found");
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let catalog = Catalog::builtin();

        let first: Vec<WatchId> = catalog.all().iter().map(|w| w.id).collect();
        let second: Vec<WatchId> = catalog.all().iter().map(|w| w.id).collect();
        assert_eq!(first, second);

        let mut deduped = first.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), first.len());
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin();
        let id = catalog.all()[2].id;

        assert_eq!(catalog.find(id).unwrap().name, "Classic Leather");
        assert!(catalog.find(WatchId(9999)).is_none());
        assert!(!catalog.contains(WatchId(9999)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let entries = vec![WatchEntry::new("   ", 10.0, None)];
        let err = Catalog::from_entries(entries).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName { index: 0 }));
    }

    #[test]
    fn test_negative_price_rejected() {
        let entries = vec![WatchEntry::new("Bargain Bin", -1.0, None)];
        let err = Catalog::from_entries(entries).unwrap_err();
        assert!(matches!(err, CatalogError::NegativePrice { .. }));
    }

    #[test]
    fn test_zero_price_allowed() {
        let entries = vec![WatchEntry::new("Empty Box", 0.0, None)];
        let catalog = Catalog::from_entries(entries).unwrap();
        assert_eq!(catalog.all()[0].price, 0.0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "name": "Elegant Timepiece", "price": 249.99, "image": "watchTest" },
            { "name": "Empty Box", "price": 0.0 }
        ]"#;
        let entries: Vec<WatchEntry> = serde_json::from_str(json).unwrap();
        let catalog = Catalog::from_entries(entries).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].image_ref.as_deref(), Some("watchTest"));
        assert_eq!(catalog.all()[1].image_ref, None);
    }
}
