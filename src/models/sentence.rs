// src/models/sentence.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{no_nul_bytes, no_nul_bytes_in_list};

/// A multiple-choice question. Only ever lives inside a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Question {
    #[validate(custom(function = no_nul_bytes))]
    pub q: String,
    #[validate(custom(function = no_nul_bytes_in_list))]
    pub options: Vec<String>,
    #[validate(custom(function = no_nul_bytes))]
    pub answer: String,
}

/// Upload payload for a new teaching unit. The id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SentenceUpload {
    #[validate(custom(function = no_nul_bytes))]
    pub sentence: String,

    /// Serialized diagram payload, stored untouched.
    #[validate(custom(function = no_nul_bytes))]
    pub graph_data: String,

    #[validate(nested)]
    pub questions: Vec<Question>,
}

/// A stored teaching unit as returned by `GET /sentences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Sentence {
    pub id: i64,
    pub sentence: String,
    pub graph_data: String,
    pub questions: Vec<Question>,
}

impl Sentence {
    pub fn from_upload(id: i64, upload: SentenceUpload) -> Self {
        Self {
            id,
            sentence: upload.sentence,
            graph_data: upload.graph_data,
            questions: upload.questions,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadSentenceResponse {
    pub message: String,
    pub id: i64,
}
