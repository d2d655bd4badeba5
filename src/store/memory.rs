// src/store/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{
        result::QuizResult,
        sentence::{Sentence, SentenceUpload},
        user::{NewUser, StoredUser},
    },
};

use super::QuizStore;

#[derive(Debug, Default)]
struct Collections {
    users: Vec<StoredUser>,
    sentences: Vec<Sentence>,
    results: Vec<QuizResult>,
    last_user_id: i64,
    last_sentence_id: i64,
}

/// In-process store for tests and local runs. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        inner.last_user_id += 1;
        let id = inner.last_user_id;
        inner.users.push(StoredUser {
            id,
            name: user.name,
            student_class: user.student_class,
            email: user.email,
            password_hash: user.password_hash,
        });
        Ok(())
    }

    async fn find_users_by_email(&self, email: &str) -> Result<Vec<StoredUser>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .iter()
            .filter(|u| u.email == email)
            .cloned()
            .collect())
    }

    async fn list_sentences(&self, limit: i64) -> Result<Vec<Sentence>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .sentences
            .iter()
            .take(clamp_limit(limit))
            .cloned()
            .collect())
    }

    async fn insert_sentence(&self, upload: SentenceUpload) -> Result<Option<i64>, AppError> {
        // Id is taken and used under the same write lock.
        let mut inner = self.inner.write().await;
        inner.last_sentence_id += 1;
        let id = inner.last_sentence_id;
        inner.sentences.push(Sentence::from_upload(id, upload));
        Ok(Some(id))
    }

    async fn insert_result(&self, result: QuizResult) -> Result<(), AppError> {
        self.inner.write().await.results.push(result);
        Ok(())
    }

    async fn list_results(&self, limit: i64) -> Result<Vec<QuizResult>, AppError> {
        let inner = self.inner.read().await;
        let mut results = inner.results.clone();
        // Stable sort keeps insertion order between equal keys.
        results.sort_by(|a, b| {
            a.student_name
                .cmp(&b.student_name)
                .then(a.sentence_id.cmp(&b.sentence_id))
        });
        results.truncate(clamp_limit(limit));
        Ok(results)
    }

    async fn count_results_for(&self, student_name: &str) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        let count = inner
            .results
            .iter()
            .filter(|r| r.student_name == student_name)
            .count();
        Ok(count as i64)
    }
}
