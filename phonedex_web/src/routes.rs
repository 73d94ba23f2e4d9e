use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use phonedex_core::{SearchParams, SearchQuery, WishlistEntry};

use crate::error::ApiError;
use crate::state::AppState;
use crate::view;

/// Body of `POST /add_to_wishlist` and `POST /remove_from_wishlist`.
#[derive(Debug, Default, Deserialize)]
pub struct WishlistRequest {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistResponse {
    pub wishlist: Vec<WishlistEntry>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
        .route("/add_to_wishlist", post(add_to_wishlist))
        .route("/remove_from_wishlist", post(remove_from_wishlist))
        .route("/get_wishlist", get(get_wishlist))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let wishlist = state.wishlist_snapshot().await;
    Html(view::render_page(&SearchParams::default(), &[], &wishlist))
}

async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let params = SearchParams::from_pairs(pairs).normalized();
    // A bare visit to /search shows the empty form rather than the whole catalog.
    let results = if params.is_empty() {
        Vec::new()
    } else {
        let query = SearchQuery::from_params(&params, state.result_limit());
        state.catalog().search(&query)
    };
    info!(
        "Search brand={:?} max_budget={:?} min_ram={:?} min_rom={:?}: {} results",
        params.brand,
        params.max_budget,
        params.min_ram,
        params.min_rom,
        results.len()
    );

    let wishlist = state.wishlist_snapshot().await;
    Html(view::render_page(&params, &results, &wishlist))
}

async fn add_to_wishlist(
    State(state): State<AppState>,
    payload: Result<Json<WishlistRequest>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Json(request) = payload?;
    let phone = request.phone.unwrap_or_default();
    let image_url = request.image_url.unwrap_or_default();

    state.wishlist().lock().await.add(&phone, &image_url)?;
    info!("Wishlist add: {phone}");
    Ok(Json(MutationResponse { success: true }))
}

async fn remove_from_wishlist(
    State(state): State<AppState>,
    payload: Result<Json<WishlistRequest>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Json(request) = payload?;
    let phone = request.phone.unwrap_or_default();

    state.wishlist().lock().await.remove(&phone)?;
    info!("Wishlist remove: {phone}");
    Ok(Json(MutationResponse { success: true }))
}

async fn get_wishlist(State(state): State<AppState>) -> Json<WishlistResponse> {
    Json(WishlistResponse {
        wishlist: state.wishlist_snapshot().await,
    })
}
