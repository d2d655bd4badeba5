// src/store/mod.rs

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        result::QuizResult,
        sentence::{Sentence, SentenceUpload},
        user::{NewUser, StoredUser},
    },
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Most sentences `GET /sentences` returns.
pub const SENTENCE_LIST_CAP: i64 = 100;

/// Most results `GET /admin/stats` returns.
pub const RESULT_LIST_CAP: i64 = 1000;

/// Persistence for users, sentences and quiz results.
///
/// Handlers only ever see this trait; the concrete store is chosen once at
/// startup and shared through `AppState`.
#[async_trait]
pub trait QuizStore: Send + Sync {
    async fn insert_user(&self, user: NewUser) -> Result<(), AppError>;

    /// Every stored user with exactly this email. Emails are not unique.
    async fn find_users_by_email(&self, email: &str) -> Result<Vec<StoredUser>, AppError>;

    /// Sentences in ascending id order, at most `limit` of them.
    async fn list_sentences(&self, limit: i64) -> Result<Vec<Sentence>, AppError>;

    /// Stores the sentence under the next id from the store's sequence.
    /// `None` means the store did not confirm the write.
    async fn insert_sentence(&self, upload: SentenceUpload) -> Result<Option<i64>, AppError>;

    async fn insert_result(&self, result: QuizResult) -> Result<(), AppError>;

    /// Results sorted by `student_name`, then `sentence_id`, then insertion.
    async fn list_results(&self, limit: i64) -> Result<Vec<QuizResult>, AppError>;

    /// Number of results whose `student_name` matches exactly.
    async fn count_results_for(&self, student_name: &str) -> Result<i64, AppError>;
}

pub type DynStore = Arc<dyn QuizStore>;
