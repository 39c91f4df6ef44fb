//! Documentation of the PetVerse storefront service.
//!
//!
//!
//! # General Infrastructure
//! - The SPA talks to this service for everything it draws: catalog pages and
//!   the cart
//! - The full product set is fetched once from the upstream API at startup
//!   and is read-only for the rest of the session
//! - Cart state lives here, persisted to Redis after every mutation and
//!   mirrored to the upstream cart API best-effort
//!
//!
//!
//! # Consistency
//!
//! **Goal**: the rendered view must always reflect the just-written state,
//! and cart correctness must never depend on the upstream API being up.
//!
//! - Every cart mutation runs mutate -> persist -> respond, in that order,
//!   under one lock
//! - The upstream mirror call happens after the local mutation and its
//!   failure only produces a warning and a transient notification
//! - The upstream result never rolls back a completed local mutation
//! - In theory the upstream cart can drift; eventual consistency is
//!   acceptable for this use case and it catches up on the next successful
//!   call
//!
//!
//!
//! # Notes
//!
//! ## Redis
//! The cart is small (a handful of lines) but must survive restarts, so it is
//! written through to Redis under two keys: the full JSON line list under
//! `cart`, and the item count alone under `cartCount` so the badge renders
//! without deserializing the whole thing.
//!
//! ## Search
//! Search stays in-process. The catalog tops out at a few thousand items, so
//! a linear pass over the in-memory set is magnitudes cheaper than a round
//! trip to an external engine, and it keeps the matching semantics ours.
//! The SPA debounces search and price-slider input by 300 ms, so at most a
//! few filter passes per second arrive here.
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{delete, get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod storage;
pub mod upstream;
pub mod utils;

use routes::{
    cart_add_handler, cart_clear_handler, cart_decrement_handler, cart_handler,
    cart_remove_handler, product_handler, products_handler,
};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/products", get(products_handler))
        .route("/products/{id}", get(product_handler))
        .route(
            "/cart",
            get(cart_handler)
                .post(cart_add_handler)
                .delete(cart_clear_handler),
        )
        .route("/cart/{id}", delete(cart_remove_handler))
        .route("/cart/{id}/decrement", post(cart_decrement_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
