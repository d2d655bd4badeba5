// src/store/postgres.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{
    PgPool,
    postgres::PgPoolOptions,
    types::Json,
};

use crate::{
    error::AppError,
    models::{
        result::QuizResult,
        sentence::{Question, Sentence, SentenceUpload},
        user::{NewUser, StoredUser},
    },
};

use super::QuizStore;

const CONNECT_RETRIES: u32 = 5;

/// Postgres-backed store. Sentence ids come from the table's sequence.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

/// Row shape of the 'sentences' table; questions are a JSONB array.
#[derive(sqlx::FromRow)]
struct SentenceRow {
    id: i64,
    sentence: String,
    graph_data: String,
    questions: Json<Vec<Question>>,
}

impl From<SentenceRow> for Sentence {
    fn from(row: SentenceRow) -> Self {
        Self {
            id: row.id,
            sentence: row.sentence,
            graph_data: row.graph_data,
            questions: row.questions.0,
        }
    }
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects with a bounded pool, retrying while the database comes up.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let mut retry_count = 0;
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(max_connections)
                .acquire_timeout(Duration::from_secs(3))
                .connect(database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) => {
                    retry_count += 1;
                    if retry_count > CONNECT_RETRIES {
                        return Err(AppError::InternalServerError(format!(
                            "Failed to connect to database after {} retries: {}",
                            CONNECT_RETRIES, e
                        )));
                    }
                    tracing::warn!(
                        "Database not ready, retrying in 2s... (Attempt {})",
                        retry_count
                    );
                    tokio::time::sleep(Duration::from_secs(2)).await;
                }
            }
        };

        tracing::info!("Database connected...");
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        tracing::info!("Running migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Migrations applied successfully.");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl QuizStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO users (name, student_class, email, password_hash)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&user.name)
        .bind(&user.student_class)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert user: {:?}", e);
            AppError::from(e)
        })?;

        Ok(())
    }

    async fn find_users_by_email(&self, email: &str) -> Result<Vec<StoredUser>, AppError> {
        let users = sqlx::query_as::<_, StoredUser>(
            r#"
            SELECT id, name, student_class, email, password_hash
            FROM users
            WHERE email = $1
            ORDER BY id
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Login DB error: {:?}", e);
            AppError::from(e)
        })?;

        Ok(users)
    }

    async fn list_sentences(&self, limit: i64) -> Result<Vec<Sentence>, AppError> {
        let rows = sqlx::query_as::<_, SentenceRow>(
            r#"
            SELECT id, sentence, graph_data, questions
            FROM sentences
            ORDER BY id
            LIMIT $1
            "#,
        )
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sentences: {:?}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(Sentence::from).collect())
    }

    async fn insert_sentence(&self, upload: SentenceUpload) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO sentences (sentence, graph_data, questions)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&upload.sentence)
        .bind(&upload.graph_data)
        .bind(Json(&upload.questions))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert sentence: {:?}", e);
            AppError::from(e)
        })?;

        Ok(id)
    }

    async fn insert_result(&self, result: QuizResult) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO results
                (student_name, student_class, sentence_id, sentence_score, flowchart_score, total_questions)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&result.student_name)
        .bind(&result.student_class)
        .bind(result.sentence_id)
        .bind(result.sentence_score)
        .bind(result.flowchart_score)
        .bind(result.total_questions)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert result: {:?}", e);
            AppError::from(e)
        })?;

        Ok(())
    }

    async fn list_results(&self, limit: i64) -> Result<Vec<QuizResult>, AppError> {
        // "C" collation gives plain byte order regardless of the database locale.
        let results = sqlx::query_as::<_, QuizResult>(
            r#"
            SELECT student_name, student_class, sentence_id, sentence_score, flowchart_score, total_questions
            FROM results
            ORDER BY student_name COLLATE "C" ASC, sentence_id ASC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list results: {:?}", e);
            AppError::from(e)
        })?;

        Ok(results)
    }

    async fn count_results_for(&self, student_name: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM results WHERE student_name = $1",
        )
        .bind(student_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count results: {:?}", e);
            AppError::from(e)
        })?;

        Ok(count)
    }
}
