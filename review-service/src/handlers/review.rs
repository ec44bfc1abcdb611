use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::prompt::build_review_prompt;
use crate::services::providers::{GenerationParams, ProviderError};
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateReviewRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub traits: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReviewResponse {
    pub review: String,
}

/// Generate a review for the named business.
///
/// Provider failures surface as errors in their own right rather than being
/// folded into the success payload: a missing key is 503, anything else the
/// provider reports is 502.
#[tracing::instrument(skip(state, request))]
pub async fn generate_review(
    State(state): State<AppState>,
    Json(request): Json<GenerateReviewRequest>,
) -> Result<Json<GenerateReviewResponse>, AppError> {
    request.validate()?;

    let prompt = build_review_prompt(
        &request.name,
        &request.traits,
        &state.config.review.highlights,
    );
    let params = GenerationParams {
        temperature: state.config.review.temperature,
        top_p: state.config.review.top_p,
        max_output_tokens: state.config.review.max_output_tokens,
    };

    match state.text_provider.generate(&prompt, &params).await {
        Ok(response) => {
            let Some(text) = response.text else {
                tracing::error!(name = %request.name, "Provider returned no text");
                return Err(AppError::BadGateway(
                    "Provider returned no text".to_string(),
                ));
            };

            tracing::info!(
                name = %request.name,
                trait_count = request.traits.len(),
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                "Review generated"
            );

            Ok(Json(GenerateReviewResponse {
                review: text.trim().to_string(),
            }))
        }
        Err(ProviderError::NotConfigured(msg)) => {
            tracing::error!(name = %request.name, error = %msg, "Text provider not configured");
            Err(AppError::ServiceUnavailable)
        }
        Err(e) => {
            tracing::error!(name = %request.name, error = %e, "Review generation failed");
            Err(AppError::BadGateway(e.to_string()))
        }
    }
}
