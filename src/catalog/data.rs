/// Shared data structures for the catalog
///
/// These structs represent the data model that flows between
/// the catalog store and the UI layer.

use serde::{Deserialize, Serialize};

/// Stable identifier of a watch in the catalog.
///
/// Assigned once when the catalog is built and never reused. Only the
/// catalog hands these out; the rest of the application treats them as
/// opaque keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchId(pub u64);

impl std::fmt::Display for WatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single watch in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Watch {
    /// Unique catalog ID, assigned at construction
    pub id: WatchId,
    /// Display name (never empty)
    pub name: String,
    /// Price in dollars (never negative; 0.0 marks placeholder entries)
    pub price: f64,
    /// Asset stem for the product image, e.g. "classic_leather".
    /// None, or a stem with no matching file, renders as a blank placeholder.
    pub image_ref: Option<String>,
}

impl Watch {
    /// Price formatted for display, e.g. "$249.99"
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// A watch as it appears in a catalog JSON file, before an ID is assigned.
///
/// ```json
/// { "name": "Classic Leather", "price": 299.99, "image": "watch3" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WatchEntry {
    pub name: String,
    pub price: f64,
    /// Optional image asset stem
    #[serde(default)]
    pub image: Option<String>,
}

impl WatchEntry {
    pub fn new(name: &str, price: f64, image: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            price,
            image: image.map(str::to_string),
        }
    }
}
