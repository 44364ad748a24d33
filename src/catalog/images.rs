/// Product image loading
///
/// Image assets are looked up by the stem stored on each watch
/// (`image_ref`) inside the `assets/` directory next to the executable's
/// working directory. Decoding happens on a blocking tokio thread so the
/// UI never waits on I/O.
///
/// A watch with no image ref and a watch whose ref matches no file take
/// the same path: no handle is produced, and the grid cell renders a
/// blank placeholder of the image's dimensions instead.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use iced::widget::image::Handle;
use tokio::task;

use super::data::WatchId;
use super::store::Catalog;

/// File extensions tried when resolving an image ref, in order.
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Directory searched for product images.
pub fn assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

/// Resolve an image ref to an existing file, if any.
///
/// Returns None both when `image_ref` is None and when no file matches the
/// stem. Callers cannot tell the two apart, which is the point: both
/// degrade to the same placeholder.
pub fn resolve_image_ref(assets: &Path, image_ref: Option<&str>) -> Option<PathBuf> {
    let stem = image_ref?;

    for ext in IMAGE_EXTENSIONS {
        let candidate = assets.join(format!("{stem}.{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

/// Decode one image file into an iced handle.
fn decode_image(path: &Path) -> Option<Handle> {
    let decoded = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("⚠️  Failed to decode {}: {}", path.display(), e);
            return None;
        }
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Load every resolvable product image for the catalog.
///
/// Runs on a blocking thread; watches whose refs do not resolve are simply
/// absent from the returned map.
pub async fn load_catalog_images(catalog: Arc<Catalog>) -> HashMap<WatchId, Handle> {
    task::spawn_blocking(move || {
        let assets = assets_dir();
        let mut handles = HashMap::new();

        for watch in catalog.all() {
            if let Some(path) = resolve_image_ref(&assets, watch.image_ref.as_deref()) {
                if let Some(handle) = decode_image(&path) {
                    handles.insert(watch.id, handle);
                }
            }
        }

        println!(
            "🖼️  Loaded {} of {} product images",
            handles.len(),
            catalog.len()
        );

        handles
    })
    .await
    .unwrap_or_default()
}
