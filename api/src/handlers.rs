//! Request handlers and their request/response types.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use reclaim_types::{ItemKind, ItemRecord, NewItem, SearchQuery};

use crate::error::ApiError;
use crate::server::AppState;

// ── Registration ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterItemRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn register_found(
    State(state): State<AppState>,
    Json(request): Json<RegisterItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    register_item(state, ItemKind::Found, request).await
}

pub async fn register_lost(
    State(state): State<AppState>,
    Json(request): Json<RegisterItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    register_item(state, ItemKind::Lost, request).await
}

/// Shared registration flow: validate, insert unverified, issue a token,
/// mail the link. A failed send is logged and the registration stands;
/// delivery is best-effort.
async fn register_item(
    state: AppState,
    kind: ItemKind,
    request: RegisterItemRequest,
) -> Result<Json<MessageResponse>, ApiError> {
    let item = validate_registration(request)?;

    let id = state.store.insert(kind, &item)?;
    let token = state.registry.issue(id, kind)?;
    let link = format!(
        "{}/api/verify/{}",
        state.public_base_url.trim_end_matches('/'),
        token
    );
    debug!(%id, kind = %kind, %link, "issued verification link");

    if let Err(e) = state
        .notifier
        .send_verification_email(&item.email, &link)
        .await
    {
        warn!(%id, kind = %kind, error = %e, "verification email not delivered");
    }

    info!(%id, kind = %kind, "item registered, verification pending");
    Ok(Json(MessageResponse {
        message: format!(
            "{} item registered. Please verify your email.",
            capitalize(kind.as_str())
        ),
    }))
}

fn validate_registration(request: RegisterItemRequest) -> Result<NewItem, ApiError> {
    let required = [
        &request.email,
        &request.item_name,
        &request.location,
        &request.color,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    }
    Ok(NewItem {
        email: request.email,
        item_name: request.item_name,
        color: request.color,
        brand: request.brand.filter(|b| !b.trim().is_empty()),
        location: request.location,
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ── Verification ─────────────────────────────────────────────────────────

pub async fn verify_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    // The token is gone from the registry after this point, hit or miss.
    let Some(pending) = state.registry.consume(&token) else {
        debug!("verification attempted with unknown token");
        return Err(ApiError::InvalidToken);
    };

    state.store.set_verified(pending.kind, pending.item_id)?;
    info!(id = %pending.item_id, kind = %pending.kind, "registration verified");

    Ok(Json(MessageResponse {
        message: "Email verified successfully. You can now search or list items.".to_string(),
    }))
}

// ── Search ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

pub async fn search_items(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<ItemRecord>>, ApiError> {
    let query = SearchQuery {
        item_name: request.item_name,
        color: request.color,
        brand: request.brand,
    }
    .normalized();

    if query.item_name.is_empty() {
        return Err(ApiError::Validation("Item name required".to_string()));
    }

    let candidates = state.store.list_verified(ItemKind::Found)?;
    let results = reclaim_search::search(&query, candidates);
    debug!(matches = results.len(), "search completed");

    Ok(Json(results))
}

// ── Liveness / health ────────────────────────────────────────────────────

pub async fn root() -> &'static str {
    "Lost & Found registry is live"
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub found_items: u64,
    pub lost_items: u64,
    pub pending_verifications: usize,
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok",
        found_items: state.store.item_count(ItemKind::Found)?,
        lost_items: state.store.item_count(ItemKind::Lost)?,
        pending_verifications: state.registry.pending_count(),
    }))
}
