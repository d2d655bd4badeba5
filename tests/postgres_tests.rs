// tests/postgres_tests.rs
//
// Runs against a real database when DATABASE_URL points at Postgres;
// otherwise each test returns early.

use quiz_backend::{
    models::{
        result::QuizResult,
        sentence::{Question, SentenceUpload},
        user::NewUser,
    },
    store::{PgStore, QuizStore},
};

async fn connect() -> Option<PgStore> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    if !database_url.starts_with("postgres") {
        return None;
    }

    let store = PgStore::connect(&database_url, 1)
        .await
        .expect("Failed to connect to Postgres for testing.");
    store.migrate().await.expect("Failed to migrate database");
    Some(store)
}

fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, &uuid::Uuid::new_v4().to_string()[..8])
}

#[tokio::test]
async fn sentences_round_trip_with_increasing_ids() {
    let Some(store) = connect().await else { return };

    let text = unique("sentence");
    let upload = SentenceUpload {
        sentence: text.clone(),
        graph_data: "<sent_id=1> a -> b".to_string(),
        questions: vec![Question {
            q: "Which?".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            answer: "b".to_string(),
        }],
    };

    let first = store.insert_sentence(upload.clone()).await.unwrap().unwrap();
    let second = store.insert_sentence(upload.clone()).await.unwrap().unwrap();
    assert!(second > first);

    let listed = store.list_sentences(i64::MAX).await.unwrap();
    let stored = listed
        .iter()
        .find(|s| s.id == first)
        .expect("uploaded sentence should be listed");
    assert_eq!(stored.sentence, text);
    assert_eq!(stored.graph_data, upload.graph_data);
    assert_eq!(stored.questions, upload.questions);
}

#[tokio::test]
async fn results_count_and_order() {
    let Some(store) = connect().await else { return };

    let name = unique("student");
    for sentence_id in [3, 1, 2] {
        store
            .insert_result(QuizResult {
                student_name: name.clone(),
                student_class: "7B".to_string(),
                sentence_id,
                sentence_score: 1,
                flowchart_score: 2,
                total_questions: 2,
            })
            .await
            .unwrap();
    }

    assert_eq!(store.count_results_for(&name).await.unwrap(), 3);

    let ids: Vec<i64> = store
        .list_results(i64::MAX)
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.student_name == name)
        .map(|r| r.sentence_id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn users_are_found_by_exact_email() {
    let Some(store) = connect().await else { return };

    let email = format!("{}@school.test", unique("u"));
    for name in ["One", "Two"] {
        store
            .insert_user(NewUser {
                name: name.to_string(),
                student_class: "7B".to_string(),
                email: email.clone(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
    }

    let users = store.find_users_by_email(&email).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "One");
    assert!(store.find_users_by_email(&email.to_uppercase()).await.unwrap().is_empty());
}
