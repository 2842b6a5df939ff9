use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::Product;

/// One-shot ingestion of the product file.
///
/// Runs to completion before the server binds its port. The returned
/// sequence preserves the file's array order and is never touched again
/// after startup. The file handle is scoped to this call and released
/// whether loading succeeds or fails.
pub fn load_products(path: impl AsRef<Path>) -> AppResult<Vec<Product>> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|source| AppError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut raw = String::new();
    file.read_to_string(&mut raw)
        .map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    // Whole-file semantics: one bad record fails the entire load.
    let products: Vec<Product> =
        serde_json::from_str(&raw).map_err(|source| AppError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        count = products.len(),
        path = %path.display(),
        "Loaded product catalog"
    );

    Ok(products)
}
