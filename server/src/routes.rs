use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State as AppState},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use cart::{
    CartLine, RemoteOutcome, Totals,
    notify::Notification,
};
use catalog::{
    CatalogItem,
    filter::Facet,
    remote::get_product_remote,
    view::{CatalogPage, CatalogView},
};

use crate::{
    error::AppError,
    state::State,
    utils::{clean_query, facet_values},
};

#[derive(Deserialize, Default)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub brand: Option<String>,
    pub flavor: Option<String>,
    pub life_stage: Option<String>,
    pub breed_size: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub price_max: Option<u64>,
    pub page: Option<u32>,
}

/// Rebuilds the browsing knobs a request describes. Facet and query changes
/// reset the cursor to page 1, so the requested page is applied last.
fn view_from(params: &CatalogQuery) -> CatalogView {
    let mut view = CatalogView::new();

    let facet_params = [
        (Facet::Brand, &params.brand),
        (Facet::Flavor, &params.flavor),
        (Facet::LifeStage, &params.life_stage),
        (Facet::BreedSize, &params.breed_size),
        (Facet::Kind, &params.kind),
        (Facet::Category, &params.category),
    ];

    for (facet, param) in facet_params {
        if let Some(param) = param {
            for value in facet_values(param) {
                view.select_facet(facet, value);
            }
        }
    }

    if let Some(ceiling) = params.price_max {
        view.set_price_ceiling(ceiling);
    }

    if let Some(q) = &params.q {
        view.set_query(&clean_query(q));
    }

    if let Some(page) = params.page {
        view.go_to_page(page);
    }

    view
}

pub async fn products_handler(
    AppState(state): AppState<Arc<State>>,
    Query(params): Query<CatalogQuery>,
) -> Json<CatalogPage> {
    let mut view = view_from(&params);

    Json(view.visible(&state.catalog))
}

pub async fn product_handler(
    AppState(state): AppState<Arc<State>>,
    Path(id): Path<u32>,
) -> Result<Json<CatalogItem>, AppError> {
    if let Some(item) = state.catalog.get(id) {
        return Ok(Json(item.clone()));
    }

    // Not in the session set; ask upstream before giving up.
    match get_product_remote(&state.config.upstream_url, id).await {
        Ok(item) => Ok(Json(item)),
        Err(e) => {
            warn!("Upstream lookup for product {id} failed: {e}");
            Err(AppError::ProductNotFound(id))
        }
    }
}

#[derive(Serialize)]
pub struct CartContents {
    pub lines: Vec<CartLine>,
    pub totals: Totals,
    pub notification: Option<Notification>,
}

pub async fn cart_handler(AppState(state): AppState<Arc<State>>) -> Json<CartContents> {
    let cart = state.cart.lock().await;

    Json(CartContents {
        lines: cart.cart().lines().to_vec(),
        totals: cart.cart().compute_totals(),
        notification: state.notifier.lock().unwrap().current().cloned(),
    })
}

#[derive(Deserialize)]
pub struct AddPayload {
    pub product_id: u32,
    pub quantity: Option<u32>,
}

#[derive(Serialize)]
pub struct CartResponse {
    pub line: Option<CartLine>,
    pub totals: Totals,
    pub remote: RemoteOutcome,
    pub notification: Option<Notification>,
}

pub async fn cart_add_handler(
    AppState(state): AppState<Arc<State>>,
    Json(payload): Json<AddPayload>,
) -> Result<Json<CartResponse>, AppError> {
    let quantity = payload.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::MalformedPayload);
    }

    let item = match state.catalog.get(payload.product_id) {
        Some(item) => item.clone(),
        None => get_product_remote(&state.config.upstream_url, payload.product_id)
            .await
            .map_err(|_| AppError::ProductNotFound(payload.product_id))?,
    };

    // Each unit runs its own full add -> persist cycle, like repeated clicks.
    let mut cart = state.cart.lock().await;
    let mut outcome = cart.add_item(&item).await?;
    for _ in 1..quantity {
        outcome = cart.add_item(&item).await?;
    }
    drop(cart);

    let notification = notify_mutation(
        &state,
        &outcome.remote,
        "Added to cart",
        "Failed to add item to cart. Saved locally.",
    );

    Ok(Json(CartResponse {
        line: outcome.line,
        totals: outcome.totals,
        remote: outcome.remote,
        notification,
    }))
}

pub async fn cart_clear_handler(
    AppState(state): AppState<Arc<State>>,
) -> Result<Json<CartResponse>, AppError> {
    let outcome = state.cart.lock().await.clear().await?;

    let notification = notify_mutation(&state, &outcome.remote, "Cart cleared", "Cart cleared");

    Ok(Json(CartResponse {
        line: outcome.line,
        totals: outcome.totals,
        remote: outcome.remote,
        notification,
    }))
}

pub async fn cart_decrement_handler(
    AppState(state): AppState<Arc<State>>,
    Path(id): Path<u32>,
) -> Result<Json<CartResponse>, AppError> {
    let outcome = state.cart.lock().await.decrement_or_remove(id).await?;

    // Decrements never attempt the upstream call, so no failure message.
    let notification = notify_mutation(&state, &outcome.remote, "Cart updated", "Cart updated");

    Ok(Json(CartResponse {
        line: outcome.line,
        totals: outcome.totals,
        remote: outcome.remote,
        notification,
    }))
}

pub async fn cart_remove_handler(
    AppState(state): AppState<Arc<State>>,
    Path(id): Path<u32>,
) -> Result<Json<CartResponse>, AppError> {
    let outcome = state.cart.lock().await.remove_completely(id).await?;

    let notification = notify_mutation(
        &state,
        &outcome.remote,
        "Removed from cart",
        "Removed locally. Failed to update the upstream cart.",
    );

    Ok(Json(CartResponse {
        line: outcome.line,
        totals: outcome.totals,
        remote: outcome.remote,
        notification,
    }))
}

fn notify_mutation(
    state: &State,
    remote: &RemoteOutcome,
    ok_message: &str,
    failed_message: &str,
) -> Option<Notification> {
    let mut notifier = state.notifier.lock().unwrap();

    match remote {
        RemoteOutcome::Failed(_) => notifier.show(failed_message, false),
        _ => notifier.show(ok_message, true),
    }

    notifier.current().cloned()
}
