use anyhow::Error;
use reqwest::get;

use crate::item::CatalogItem;

/// Fetches the full item set once per session.
///
/// A failure here degrades to an empty catalog at the call site; it never
/// takes the process down.
pub async fn get_catalog_remote(base_url: &str) -> Result<Vec<CatalogItem>, Error> {
    let response = get(format!("{base_url}/api/products")).await?;
    let items = response.error_for_status()?.json().await?;

    Ok(items)
}

/// Cart-add fallback for an id that is not in the in-memory set.
pub async fn get_product_remote(base_url: &str, id: u32) -> Result<CatalogItem, Error> {
    let response = get(format!("{base_url}/api/products/{id}")).await?;
    let item = response.error_for_status()?.json().await?;

    Ok(item)
}
