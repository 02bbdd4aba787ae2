// tests/store_tests.rs

//! Runs against a real Postgres; skipped when DATABASE_URL is not set.

use std::collections::HashSet;

use quiz_game::repository::{GenerationClient, PgQuizRepository, QuizRepository};
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

async fn seeded_repository() -> Option<(PgQuizRepository, Uuid)> {
    let database_url = std::env::var("DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    // Seed one author with two questions; the second has no options yet.
    let author_id = Uuid::new_v4();
    sqlx::query("INSERT INTO authors (id, name, emoji) VALUES ($1, $2, $3)")
        .bind(author_id)
        .bind(format!("Cat Memes {}", &author_id.to_string()[..8]))
        .bind("🐱")
        .execute(&pool)
        .await
        .unwrap();

    let q1 = Uuid::new_v4();
    let q2 = Uuid::new_v4();
    for (id, content) in [(q1, "Q1"), (q2, "Q2")] {
        sqlx::query("INSERT INTO questions (id, author_id, content) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(author_id)
            .bind(content)
            .execute(&pool)
            .await
            .unwrap();
    }
    for (i, content) in ["Opt1", "Opt2", "Opt3", "Opt4"].iter().enumerate() {
        sqlx::query(
            "INSERT INTO options (id, question_id, content, is_correct) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(q1)
        .bind(*content)
        .bind(i == 0)
        .execute(&pool)
        .await
        .unwrap();
    }

    let generator = GenerationClient::new("http://127.0.0.1:9/unused".parse().unwrap()).unwrap();
    Some((PgQuizRepository::new(pool, generator), author_id))
}

#[tokio::test]
async fn fetches_seeded_author_and_questions() {
    let Some((repo, author_id)) = seeded_repository().await else {
        eprintln!("DATABASE_URL not set, skipping store test");
        return;
    };

    let authors = repo.fetch_authors().await.unwrap();
    let author = authors.iter().find(|a| a.id == author_id).unwrap();
    assert_eq!(author.emoji, "🐱");
    assert!(!author.created_at.is_empty());

    let questions = repo.fetch_questions(author_id).await.unwrap();
    assert_eq!(questions.len(), 2);

    let with_options = questions.iter().find(|q| q.content == "Q1").unwrap();
    assert_eq!(with_options.options.len(), 4);
    assert_eq!(with_options.options.iter().filter(|o| o.is_correct).count(), 1);
    let ids: HashSet<Uuid> = with_options.options.iter().map(|o| o.question_id).collect();
    assert_eq!(ids.len(), 1);

    let without_options = questions.iter().find(|q| q.content == "Q2").unwrap();
    assert!(without_options.options.is_empty());
}

#[tokio::test]
async fn unknown_author_has_no_questions() {
    let Some((repo, _)) = seeded_repository().await else {
        eprintln!("DATABASE_URL not set, skipping store test");
        return;
    };

    let questions = repo.fetch_questions(Uuid::new_v4()).await.unwrap();

    assert!(questions.is_empty());
}
