//! Drives a running server through the cart endpoints.

use reqwest::Client;
use serde_json::{Value, json};

const BASE_URL: &str = "http://localhost:4000";

#[tokio::main]
async fn main() {
    let client = Client::new();

    let page: Value = client
        .get(format!("{BASE_URL}/products"))
        .query(&[("category", "dogs"), ("page", "1")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    println!("Visible items: {}", page["items"].as_array().unwrap().len());
    println!("Total pages: {}", page["total_pages"]);

    let first_id = page["items"][0]["id"].as_u64().unwrap();

    for _ in 0..2 {
        let added: Value = client
            .post(format!("{BASE_URL}/cart"))
            .json(&json!({ "product_id": first_id }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        println!(
            "Added {} -> quantity {}, remote {:?}",
            first_id, added["line"]["quantity"], added["remote"]
        );
    }

    let decremented: Value = client
        .post(format!("{BASE_URL}/cart/{first_id}/decrement"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    println!("After decrement: totals {:?}", decremented["totals"]);

    let removed: Value = client
        .delete(format!("{BASE_URL}/cart/{first_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    println!("After removal: totals {:?}", removed["totals"]);

    let cart: Value = client
        .get(format!("{BASE_URL}/cart"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    println!("Final cart: {cart}");
}
