mod common;

use common::{seed_property, seed_user};
use pglife_core::rating::{RatingAverages, RatingScores};
use pglife_db::models::rating::AggregatedRating;
use pglife_db::repositories::{PropertyRepo, RatingRepo};
use sqlx::PgPool;

async fn rate(pool: &PgPool, property_id: i64, user_id: i64, s: RatingScores) -> AggregatedRating {
    RatingRepo::submit_and_aggregate(pool, property_id, user_id, &s)
        .await
        .unwrap()
        .expect("property exists")
}

fn scores(c: f64, f: f64, s: f64) -> RatingScores {
    RatingScores {
        rating_clean: c,
        rating_food: f,
        rating_safety: s,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_means_across_users(pool: PgPool) {
    let alice = seed_user(&pool, "alice@test.com").await;
    let bob = seed_user(&pool, "bob@test.com").await;
    let property = seed_property(&pool, "Sunrise PG").await;

    rate(&pool, property.id, alice.id, scores(5.0, 5.0, 5.0)).await;
    let result = rate(&pool, property.id, bob.id, scores(3.0, 3.0, 3.0)).await;

    assert_eq!(
        result.averages,
        RatingAverages {
            clean: 4.0,
            food: 4.0,
            safety: 4.0
        }
    );

    let stored = PropertyRepo::find_by_id(&pool, property.id).await.unwrap().unwrap();
    assert_eq!(stored.rating_clean, 4.0);
    assert_eq!(stored.rating_food, 4.0);
    assert_eq!(stored.rating_safety, 4.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resubmission_updates_single_row(pool: PgPool) {
    let user = seed_user(&pool, "a@test.com").await;
    let property = seed_property(&pool, "Sunrise PG").await;

    let first = rate(&pool, property.id, user.id, scores(4.0, 3.5, 2.0)).await;
    let second = rate(&pool, property.id, user.id, scores(4.0, 3.5, 2.0)).await;

    assert_eq!(first.rating.id, second.rating.id);
    assert_eq!(first.averages, second.averages);
    assert_eq!(RatingRepo::count_for_property(&pool, property.id).await.unwrap(), 1);

    rate(&pool, property.id, user.id, scores(1.0, 1.0, 1.0)).await;
    let stored = RatingRepo::find(&pool, property.id, user.id).await.unwrap().unwrap();
    assert_eq!(stored.scores(), scores(1.0, 1.0, 1.0));
    assert_eq!(RatingRepo::count_for_property(&pool, property.id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_property_writes_nothing(pool: PgPool) {
    let user = seed_user(&pool, "a@test.com").await;

    let result = RatingRepo::submit_and_aggregate(&pool, 4242, user.id, &scores(3.0, 3.0, 3.0))
        .await
        .unwrap();
    assert!(result.is_none());

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ratings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}
