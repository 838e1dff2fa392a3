//! Repository-level tests for movies and users against a real database.

use catalog_core::roles::Role;
use catalog_core::search::like_pattern;
use catalog_core::sort::{MovieSort, SortField, SortOrder};
use catalog_db::models::movie::{MovieChanges, NewMovie};
use catalog_db::models::user::CreateUser;
use catalog_db::repositories::{MovieRepo, UserRepo};
use chrono::NaiveDate;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str, rating: f64, duration: i32) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        description: format!("About {title}"),
        rating,
        release_date: NaiveDate::from_ymd_opt(2001, 9, 11).unwrap(),
        duration,
        genre: vec!["Drama".into()],
        director: Some("Someone".into()),
        cast: Vec::new(),
        poster: None,
        imdb_id: None,
    }
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_find(pool: PgPool) {
    let created = MovieRepo::create(&pool, &new_movie("Memento", 8.4, 113))
        .await
        .unwrap();
    let found = MovieRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();

    assert_eq!(found.title, "Memento");
    assert_eq!(found.genre, vec!["Drama"]);
    assert_eq!(found.director.as_deref(), Some("Someone"));
    assert!(MovieRepo::exists(&pool, created.id).await.unwrap());
    assert!(MovieRepo::find_by_id(&pool, created.id + 1).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn check_constraints_reject_out_of_range_values(pool: PgPool) {
    assert!(MovieRepo::create(&pool, &new_movie("Too Good", 10.5, 90)).await.is_err());
    assert!(MovieRepo::create(&pool, &new_movie("Instant", 5.0, 0)).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn imdb_id_is_unique_when_present(pool: PgPool) {
    let mut first = new_movie("Heat", 8.3, 170);
    first.imdb_id = Some("tt0113277".into());
    MovieRepo::create(&pool, &first).await.unwrap();

    let err = MovieRepo::create(&pool, &first).await.unwrap_err();
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("uq_movies_imdb_id"));

    // Absent ids never collide.
    MovieRepo::create(&pool, &new_movie("No Id A", 5.0, 90)).await.unwrap();
    MovieRepo::create(&pool, &new_movie("No Id B", 5.0, 90)).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_orders_and_pages(pool: PgPool) {
    for (title, duration) in [("Short", 80), ("Long", 200), ("Medium", 120)] {
        MovieRepo::create(&pool, &new_movie(title, 7.0, duration))
            .await
            .unwrap();
    }

    let newest = MovieRepo::list(&pool, MovieSort::Newest, 2, 0).await.unwrap();
    let titles: Vec<_> = newest.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Medium", "Long"]);

    let by_duration = MovieRepo::list(
        &pool,
        MovieSort::By(SortField::Duration, SortOrder::Asc),
        10,
        1,
    )
    .await
    .unwrap();
    let titles: Vec<_> = by_duration.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Medium", "Long"]);

    assert_eq!(MovieRepo::count(&pool).await.unwrap(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive_substring(pool: PgPool) {
    MovieRepo::create(&pool, &new_movie("Spirited Away", 8.6, 125))
        .await
        .unwrap();
    MovieRepo::create(&pool, &new_movie("Up", 8.3, 96)).await.unwrap();

    let pattern = like_pattern("IRIT");
    let hits = MovieRepo::search(&pool, &pattern, 10, 0).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Spirited Away");
    assert_eq!(MovieRepo::count_search(&pool, &pattern).await.unwrap(), 1);

    let none = like_pattern("_");
    assert_eq!(MovieRepo::count_search(&pool, &none).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_changes_only_given_fields(pool: PgPool) {
    let movie = MovieRepo::create(&pool, &new_movie("Alien", 8.5, 117))
        .await
        .unwrap();

    let changes = MovieChanges {
        rating: Some(9.0),
        director: Some(None),
        ..MovieChanges::default()
    };
    let updated = MovieRepo::update(&pool, movie.id, &changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.rating, 9.0);
    assert_eq!(updated.director, None);
    assert_eq!(updated.title, "Alien");
    assert_eq!(updated.duration, 117);
    assert!(updated.updated_at >= movie.updated_at);

    let missing = MovieRepo::update(&pool, movie.id + 100, &changes).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_and_delete_all(pool: PgPool) {
    let a = MovieRepo::create(&pool, &new_movie("A", 1.0, 1)).await.unwrap();
    MovieRepo::create(&pool, &new_movie("B", 2.0, 2)).await.unwrap();

    assert!(MovieRepo::delete(&pool, a.id).await.unwrap());
    assert!(!MovieRepo::delete(&pool, a.id).await.unwrap());
    assert_eq!(MovieRepo::delete_all(&pool).await.unwrap(), 1);
    assert_eq!(MovieRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_are_unique_by_email_and_username(pool: PgPool) {
    let input = CreateUser {
        username: "ripley".into(),
        email: "ripley@nostromo.test".into(),
        password_hash: "hash".into(),
        role: Role::User,
    };
    let user = UserRepo::create(&pool, &input).await.unwrap();
    assert_eq!(user.role().unwrap(), Role::User);

    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    assert!(err
        .as_database_error()
        .and_then(|e| e.constraint())
        .is_some_and(|c| c.starts_with("uq_users_")));

    assert!(UserRepo::set_role(&pool, user.id, Role::Admin).await.unwrap());
    let found = UserRepo::find_by_email(&pool, "ripley@nostromo.test")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.role().unwrap(), Role::Admin);
    assert!(UserRepo::find_by_username(&pool, "ripley").await.unwrap().is_some());
}
