// src/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::{
    handlers::{auth, content, results},
    models::{
        result::{ProgressResponse, QuizResult, StudentSummary, SubmitResultResponse},
        sentence::{Question, Sentence, SentenceUpload, UploadSentenceResponse},
        user::{LoginRequest, LoginResponse, Role, SignupRequest, SignupResponse},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Quiz Backend", description = "Classroom sentence quiz service"),
    paths(
        auth::signup,
        auth::login,
        content::list_sentences,
        content::upload_sentence,
        results::submit_result,
        results::get_stats,
        results::get_stats_summary,
        results::get_progress,
    ),
    components(schemas(
        SignupRequest,
        SignupResponse,
        LoginRequest,
        LoginResponse,
        Role,
        Question,
        SentenceUpload,
        Sentence,
        UploadSentenceResponse,
        QuizResult,
        SubmitResultResponse,
        ProgressResponse,
        StudentSummary,
    )),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "content", description = "Sentences and their questions"),
        (name = "results", description = "Quiz results and statistics")
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
