//! The four HTTP endpoints. Each one validates, builds a prompt, forwards
//! it unmodified to the generation client, and wraps the completion in its
//! endpoint's response field.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::ApiError;
use crate::generate::TextGenerator;
use crate::prompt::{build_prompt, Operation};
use crate::{GrammarResponse, InformationResponse, MailResponse, Query, SummaryResponse};

pub type SharedGenerator = Arc<dyn TextGenerator>;

pub fn app(generator: SharedGenerator) -> Router {
    Router::new()
        .route("/summarize/", post(summarize))
        .route("/grammar/", post(improve_grammar))
        .route("/information/", post(get_information))
        .route("/generate_mail/", post(generate_mail))
        .with_state(generator)
}

async fn run_operation(
    generator: &SharedGenerator,
    operation: Operation,
    query: &Query,
) -> Result<String, ApiError> {
    let prompt = build_prompt(operation, query)?;
    generator.generate(&prompt).await.map_err(|e| {
        tracing::error!("Generation failed: {e}");
        ApiError::from(e)
    })
}

pub async fn summarize(
    State(generator): State<SharedGenerator>,
    Json(query): Json<Query>,
) -> Result<Json<SummaryResponse>, ApiError> {
    tracing::info!("Processing summarize request");
    let summary = run_operation(&generator, Operation::Summarize, &query).await?;
    Ok(Json(SummaryResponse { summary }))
}

pub async fn improve_grammar(
    State(generator): State<SharedGenerator>,
    Json(query): Json<Query>,
) -> Result<Json<GrammarResponse>, ApiError> {
    tracing::info!("Processing grammar request");
    let text_to_be_improved = run_operation(&generator, Operation::CorrectGrammar, &query).await?;
    Ok(Json(GrammarResponse { text_to_be_improved }))
}

pub async fn get_information(
    State(generator): State<SharedGenerator>,
    Json(query): Json<Query>,
) -> Result<Json<InformationResponse>, ApiError> {
    tracing::info!("Processing information request");
    let information = run_operation(&generator, Operation::GetInformation, &query).await?;
    Ok(Json(InformationResponse { information }))
}

pub async fn generate_mail(
    State(generator): State<SharedGenerator>,
    Json(query): Json<Query>,
) -> Result<Json<MailResponse>, ApiError> {
    tracing::info!("Processing generate_mail request");
    let mail_content = run_operation(&generator, Operation::GenerateMail, &query).await?;
    Ok(Json(MailResponse { mail_content }))
}
