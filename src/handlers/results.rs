// src/handlers/results.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    extract::ValidatedJson,
    models::result::{
        ProgressResponse, QuizResult, StudentSummary, SubmitResultResponse, summarize,
    },
    store::{DynStore, RESULT_LIST_CAP},
};

/// Records one quiz attempt. Repeated attempts accumulate.
#[utoipa::path(
    post,
    path = "/submit-results",
    tag = "results",
    request_body = QuizResult,
    responses(
        (status = 200, description = "Result recorded", body = SubmitResultResponse),
        (status = 400, description = "Malformed payload or scores out of range")
    )
)]
pub async fn submit_result(
    State(store): State<DynStore>,
    ValidatedJson(payload): ValidatedJson<QuizResult>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(
        "Recording result for sentence {} ({}/{} -> {}/{})",
        payload.sentence_id,
        payload.sentence_score,
        payload.total_questions,
        payload.flowchart_score,
        payload.total_questions
    );

    store.insert_result(payload).await?;

    Ok(Json(SubmitResultResponse {
        status: "success".to_string(),
        message: "Results recorded".to_string(),
    }))
}

/// All results sorted by student name, then sentence id. Capped at 1000.
#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "results",
    responses(
        (status = 200, description = "Sorted results", body = [QuizResult])
    )
)]
pub async fn get_stats(State(store): State<DynStore>) -> Result<impl IntoResponse, AppError> {
    let results = store.list_results(RESULT_LIST_CAP).await?;
    tracing::debug!("Found {} records in results", results.len());
    Ok(Json(results))
}

/// Per-student totals over the same rows `get_stats` returns.
#[utoipa::path(
    get,
    path = "/admin/stats/summary",
    tag = "results",
    responses(
        (status = 200, description = "One entry per student", body = [StudentSummary])
    )
)]
pub async fn get_stats_summary(
    State(store): State<DynStore>,
) -> Result<impl IntoResponse, AppError> {
    let results = store.list_results(RESULT_LIST_CAP).await?;
    Ok(Json(summarize(&results)))
}

/// Number of attempts recorded under exactly this student name.
#[utoipa::path(
    get,
    path = "/user-progress/{student_name}",
    tag = "results",
    params(
        ("student_name" = String, Path, description = "Exact, case-sensitive student name")
    ),
    responses(
        (status = 200, description = "Attempt count", body = ProgressResponse)
    )
)]
pub async fn get_progress(
    State(store): State<DynStore>,
    Path(student_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let completed_count = store.count_results_for(&student_name).await?;
    Ok(Json(ProgressResponse { completed_count }))
}
