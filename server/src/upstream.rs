use anyhow::Error;
use cart::sync::{MIRROR_TIMEOUT, RemoteCart};
use reqwest::Client;
use serde_json::json;

/// Client for the upstream cart endpoints. Calls are best-effort mirrors;
/// the caller treats failures as informational.
///
/// Requests carry their own timeout so a stalled upstream fails the mirror
/// instead of sitting on the cart lock until the caller's bound trips.
pub struct UpstreamCart {
    base_url: String,
    client: Client,
}

impl UpstreamCart {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: Client::builder().timeout(MIRROR_TIMEOUT).build().unwrap(),
        }
    }
}

impl RemoteCart for UpstreamCart {
    async fn add(&self, product_id: u32, quantity: u32) -> Result<(), Error> {
        let response = self
            .client
            .post(format!("{}/api/cart", self.base_url))
            .json(&json!({ "productId": product_id, "quantity": quantity }))
            .send()
            .await?;

        response.error_for_status()?;
        Ok(())
    }

    async fn remove(&self, product_id: u32) -> Result<(), Error> {
        let response = self
            .client
            .delete(format!("{}/api/cart/{product_id}", self.base_url))
            .send()
            .await?;

        response.error_for_status()?;
        Ok(())
    }
}
