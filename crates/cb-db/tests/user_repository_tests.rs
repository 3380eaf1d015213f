mod common;

use common::{create_test_pool, test_user};

use cb_db::UserRepository;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_user_when_created_then_can_be_found_by_id_and_username() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    let user = test_user("muki");

    repo.create(&user).await.unwrap();

    let by_id = repo.find_by_id(user.id).await.unwrap();
    assert_that!(by_id, some(anything()));
    assert_that!(by_id.unwrap().username, eq("muki"));

    let by_username = repo.find_by_username("muki").await.unwrap();
    assert_that!(by_username, some(anything()));
    assert_that!(by_username.unwrap().id, eq(user.id));
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_user_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    assert_that!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), none());
    assert_that!(repo.find_by_username("nobody").await.unwrap(), none());
}

#[tokio::test]
async fn given_duplicate_username_when_created_then_insert_fails() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());

    repo.create(&test_user("muki")).await.unwrap();

    // Then: The unique constraint rejects the second account
    let result = repo.create(&test_user("muki")).await;
    assert_that!(result, err(anything()));
}

#[tokio::test]
async fn given_existing_user_when_score_updated_then_change_is_persisted() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());

    let mut user = test_user("muki");
    repo.create(&user).await.unwrap();

    user.score = 0;
    repo.update(&user).await.unwrap();

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_that!(found.score, eq(0));
}
