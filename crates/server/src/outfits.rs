//! Outfit suggestion API

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;
use wardrobe_core::suggestions::SuggestionKind;
use wardrobe_core::{
    ApplicationError, ClothingId, ClothingItem, InterfaceError, OutfitDraft, OutfitEngine,
    OutfitSuggestion, RandomSelector, Season, SuggestionFilters,
};

#[derive(Clone)]
pub struct OutfitState {
    engine: Arc<OutfitEngine>,
    outerwear_seed: Option<u64>,
}

impl OutfitState {
    pub fn new(engine: Arc<OutfitEngine>, outerwear_seed: Option<u64>) -> Self {
        Self { engine, outerwear_seed }
    }
}

/// Inventory plus the same optional filters the suggestion form submits.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub inventory: Vec<ClothingItem>,
    #[serde(flatten)]
    pub filters: SuggestionFilters,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionView {
    pub id: String,
    pub name: String,
    pub kind: SuggestionKind,
    pub items: Vec<ClothingItem>,
    pub clothing_ids: Vec<ClothingId>,
    pub occasion: String,
    pub season: Season,
    pub reason: String,
    /// Ready-to-send body for saving this suggestion as an outfit
    pub draft: OutfitDraft,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub suggestions: Vec<SuggestionView>,
    pub total_clothings: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub error: String,
    pub correlation_id: String,
}

impl From<&OutfitSuggestion<'_>> for SuggestionView {
    fn from(suggestion: &OutfitSuggestion<'_>) -> Self {
        Self {
            id: suggestion.id.clone(),
            name: suggestion.name.clone(),
            kind: suggestion.kind,
            items: suggestion.items.iter().map(|item| (*item).clone()).collect(),
            clothing_ids: suggestion.item_ids(),
            occasion: suggestion.occasion.clone(),
            season: suggestion.season,
            reason: suggestion.reason.clone(),
            draft: suggestion.to_outfit_draft(),
        }
    }
}

pub fn router(state: OutfitState) -> Router {
    Router::new().route("/api/outfits/suggest", post(suggest_outfits)).with_state(state)
}

pub async fn suggest_outfits(
    State(state): State<OutfitState>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, (StatusCode, Json<ApiError>)> {
    let correlation_id = Uuid::new_v4().to_string();

    let Json(request) = payload.map_err(|rejection| {
        warn!(
            event_name = "api.outfits.rejected",
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "suggestion request body rejected"
        );
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: format!("invalid request body: {}", rejection.body_text()),
                correlation_id: correlation_id.clone(),
            }),
        )
    })?;

    let mut selector = RandomSelector::from_optional_seed(state.outerwear_seed);
    let batch = state
        .engine
        .suggest(&request.inventory, &request.filters, &mut selector)
        .map_err(|error| {
            let interface = ApplicationError::from(error).into_interface(correlation_id.clone());
            interface_error(interface)
        })?;

    info!(
        event_name = "api.outfits.suggested",
        correlation_id = %correlation_id,
        inventory_size = batch.total_inventory_size,
        suggestion_count = batch.suggestions.len(),
        "outfit suggestions generated"
    );

    Ok(Json(SuggestResponse {
        suggestions: batch.suggestions.iter().map(SuggestionView::from).collect(),
        total_clothings: batch.total_inventory_size,
    }))
}

fn interface_error(error: InterfaceError) -> (StatusCode, Json<ApiError>) {
    let status = match error {
        InterfaceError::BadRequest { .. } | InterfaceError::Precondition { .. } => {
            StatusCode::BAD_REQUEST
        }
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    warn!(
        event_name = "api.outfits.failed",
        correlation_id = %error.correlation_id(),
        status = status.as_u16(),
        error = %error,
        "outfit suggestion request failed"
    );

    (
        status,
        Json(ApiError {
            error: error.user_message().to_string(),
            correlation_id: error.correlation_id().to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::{extract::State, Json};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wardrobe_core::{Category, ClothingItem, OutfitEngine, Season, SuggestionFilters};

    use super::*;

    fn state(seed: Option<u64>) -> State<OutfitState> {
        State(OutfitState::new(Arc::new(OutfitEngine::default()), seed))
    }

    fn closet() -> Vec<ClothingItem> {
        vec![
            ClothingItem::new("t1", "White T-shirt", Category::Top, "white"),
            ClothingItem::new("b1", "Black jeans", Category::Bottom, "black"),
            ClothingItem::new("s1", "White sneakers", Category::Shoes, "white"),
            ClothingItem::new("o1", "Denim jacket", Category::Outerwear, "denim"),
            ClothingItem::new("d1", "Summer dress", Category::Dress, "red")
                .with_season(Season::Summer),
        ]
    }

    fn request(inventory: Vec<ClothingItem>, filters: SuggestionFilters) -> SuggestRequest {
        SuggestRequest { inventory, filters }
    }

    #[tokio::test]
    async fn suggest_returns_outfits_and_inventory_total() {
        let Json(response) = suggest_outfits(
            state(Some(3)),
            Ok(Json(request(closet(), SuggestionFilters::new().with_occasion("business")))),
        )
        .await
        .expect("should succeed");

        assert_eq!(response.total_clothings, 5);
        assert!(!response.suggestions.is_empty());
        let first = &response.suggestions[0];
        assert_eq!(first.id, "outfit-1");
        assert_eq!(first.occasion, "business");
        assert_eq!(first.clothing_ids, first.draft.clothing_ids);
        assert_eq!(first.draft.description, first.reason);
        assert!(response.suggestions.iter().any(|s| s.id.ends_with("-layered")));
    }

    #[tokio::test]
    async fn empty_inventory_is_a_bad_request() {
        let result =
            suggest_outfits(state(None), Ok(Json(request(Vec::new(), SuggestionFilters::new()))))
                .await;

        let (status, Json(body)) = result.expect_err("empty inventory should fail");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("Add some clothing items"));
        assert!(!body.correlation_id.is_empty());
    }

    #[tokio::test]
    async fn season_filter_changes_echoed_season() {
        let Json(response) = suggest_outfits(
            state(None),
            Ok(Json(request(closet(), SuggestionFilters::new().with_season(Season::Summer)))),
        )
        .await
        .expect("should succeed");

        assert!(response.suggestions.iter().all(|s| s.season == Season::Summer));
        assert!(response.suggestions.iter().any(|s| s.kind == SuggestionKind::Dress));
    }

    #[tokio::test]
    async fn seeded_state_is_reproducible_across_requests() {
        let mut inventory = closet();
        inventory.push(ClothingItem::new("o2", "Gray blazer", Category::Outerwear, "gray"));
        inventory.push(ClothingItem::new("o3", "Navy parka", Category::Outerwear, "navy"));

        let Json(first) = suggest_outfits(
            state(Some(21)),
            Ok(Json(request(inventory.clone(), SuggestionFilters::new()))),
        )
        .await
        .expect("should succeed");
        let Json(second) =
            suggest_outfits(state(Some(21)), Ok(Json(request(inventory, SuggestionFilters::new()))))
                .await
                .expect("should succeed");

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn router_accepts_form_payload_with_blank_filters() {
        let app = router(OutfitState::new(Arc::new(OutfitEngine::default()), Some(1)));
        let body = json!({
            "inventory": closet(),
            "occasion": "",
            "season": "",
            "colorPreference": ""
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/outfits/suggest")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body bytes");
        let payload: Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(payload["totalClothings"], 5);
        assert_eq!(payload["suggestions"][0]["occasion"], "casual");
        assert_eq!(payload["suggestions"][0]["season"], "ALL_SEASON");
    }

    #[tokio::test]
    async fn router_maps_malformed_body_to_bad_request() {
        let app = router(OutfitState::new(Arc::new(OutfitEngine::default()), None));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/outfits/suggest")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"inventory": [], "season": "MONSOON"}"#))
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body bytes");
        let payload: Value = serde_json::from_slice(&bytes).expect("json body");
        assert!(payload["error"].as_str().unwrap_or("").starts_with("invalid request body"));
    }
}
