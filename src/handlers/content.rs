// src/handlers/content.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    extract::ValidatedJson,
    models::sentence::{Sentence, SentenceUpload, UploadSentenceResponse},
    store::{DynStore, SENTENCE_LIST_CAP},
};

/// Lists uploaded sentences with their questions, oldest first, capped at 100.
#[utoipa::path(
    get,
    path = "/sentences",
    tag = "content",
    responses(
        (status = 200, description = "Stored sentences", body = [Sentence])
    )
)]
pub async fn list_sentences(State(store): State<DynStore>) -> Result<impl IntoResponse, AppError> {
    let sentences = store.list_sentences(SENTENCE_LIST_CAP).await?;
    Ok(Json(sentences))
}

/// Stores a new sentence and returns the id it was given.
#[utoipa::path(
    post,
    path = "/admin/upload-sentence",
    tag = "content",
    request_body = SentenceUpload,
    responses(
        (status = 200, description = "Sentence stored", body = UploadSentenceResponse),
        (status = 400, description = "Malformed payload"),
        (status = 500, description = "Store did not confirm the insert")
    )
)]
pub async fn upload_sentence(
    State(store): State<DynStore>,
    ValidatedJson(payload): ValidatedJson<SentenceUpload>,
) -> Result<impl IntoResponse, AppError> {
    let question_count = payload.questions.len();

    let id = store.insert_sentence(payload).await?.ok_or_else(|| {
        AppError::InternalServerError("Failed to save sentence".to_string())
    })?;

    tracing::info!("Sentence {} uploaded with {} question(s)", id, question_count);

    Ok(Json(UploadSentenceResponse {
        message: "Sentence uploaded".to_string(),
        id,
    }))
}
