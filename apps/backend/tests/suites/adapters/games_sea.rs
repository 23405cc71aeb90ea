//! Adapter tests for games_sea - CRUD operations, ordering and constraints.

use backend::adapters::games_sea::{self, GameCreate, GameUpdate};
use backend::entities::games::GameState;
use migration::PINEAPPLE_GAME_ID;
use sea_orm::DbErr;
use time::macros::datetime;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::support::{memory_state, seeded_state};

fn dto(word: &str, created_on: OffsetDateTime) -> GameCreate {
    GameCreate {
        id: Uuid::new_v4(),
        word: word.to_string(),
        word_length: word.len().to_string(),
        letters_guessed: String::new(),
        letters_matched: "_".repeat(word.len()),
        remaining_guesses: 6,
        state: GameState::Started,
        created_on,
    }
}

#[tokio::test]
async fn test_create_and_find_by_id() -> Result<(), DbErr> {
    let state = memory_state().await;
    let db = state.db().unwrap();
    let input = dto("cat", datetime!(2017-02-19 07:48:03 UTC));

    let created = games_sea::create_game(db, input.clone()).await?;

    assert_eq!(created.id, input.id);
    assert_eq!(created.word, "cat");
    assert_eq!(created.word_length, "3");
    assert_eq!(created.letters_matched, "___");
    assert_eq!(created.remaining_guesses, 6);
    assert_eq!(created.state, GameState::Started);
    assert_eq!(created.created_on, created.updated_on);

    let found = games_sea::find_by_id(db, input.id).await?.unwrap();
    assert_eq!(found, created);
    Ok(())
}

#[tokio::test]
async fn test_find_by_id_unknown_is_none() -> Result<(), DbErr> {
    let state = memory_state().await;

    let found = games_sea::find_by_id(state.db().unwrap(), Uuid::new_v4()).await?;

    assert!(found.is_none());
    Ok(())
}

#[tokio::test]
async fn test_list_all_orders_by_creation_time() -> Result<(), DbErr> {
    let state = memory_state().await;
    let db = state.db().unwrap();
    let newer = games_sea::create_game(db, dto("newer", datetime!(2020-01-02 00:00 UTC))).await?;
    let older = games_sea::create_game(db, dto("older", datetime!(2020-01-01 00:00 UTC))).await?;

    let all = games_sea::list_all(db).await?;

    let ids: Vec<Uuid> = all.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);
    Ok(())
}

#[tokio::test]
async fn test_update_game_writes_only_given_fields() -> Result<(), DbErr> {
    let state = memory_state().await;
    let db = state.db().unwrap();
    let created = games_sea::create_game(db, dto("cat", datetime!(2017-02-19 07:48:03 UTC))).await?;

    let rows = games_sea::update_game(
        db,
        GameUpdate::new(created.id)
            .with_letters_guessed("c")
            .with_letters_matched("c__"),
    )
    .await?;
    assert_eq!(rows, 1);

    let updated = games_sea::find_by_id(db, created.id).await?.unwrap();
    assert_eq!(updated.letters_guessed, "c");
    assert_eq!(updated.letters_matched, "c__");
    assert_eq!(updated.remaining_guesses, 6);
    assert_eq!(updated.state, GameState::Started);
    assert_eq!(updated.word, "cat");
    assert_eq!(updated.created_on, created.created_on);
    assert!(updated.updated_on > created.updated_on);
    Ok(())
}

#[tokio::test]
async fn test_update_game_state_and_guesses() -> Result<(), DbErr> {
    let state = memory_state().await;
    let db = state.db().unwrap();
    let created = games_sea::create_game(db, dto("cat", OffsetDateTime::now_utc())).await?;

    games_sea::update_game(
        db,
        GameUpdate::new(created.id)
            .with_remaining_guesses(0)
            .with_state(GameState::Lost),
    )
    .await?;

    let updated = games_sea::find_by_id(db, created.id).await?.unwrap();
    assert_eq!(updated.remaining_guesses, 0);
    assert_eq!(updated.state, GameState::Lost);
    Ok(())
}

#[tokio::test]
async fn test_update_unknown_game_affects_no_rows() -> Result<(), DbErr> {
    let state = memory_state().await;

    let rows = games_sea::update_game(
        state.db().unwrap(),
        GameUpdate::new(Uuid::new_v4()).with_letters_guessed("a"),
    )
    .await?;

    assert_eq!(rows, 0);
    Ok(())
}

#[tokio::test]
async fn test_delete_game_reports_rows() -> Result<(), DbErr> {
    let state = seeded_state().await;
    let db = state.db().unwrap();

    assert_eq!(games_sea::delete_game(db, PINEAPPLE_GAME_ID).await?, 1);
    assert_eq!(games_sea::delete_game(db, PINEAPPLE_GAME_ID).await?, 0);
    assert!(games_sea::find_by_id(db, PINEAPPLE_GAME_ID).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_id_is_rejected() -> Result<(), DbErr> {
    let state = memory_state().await;
    let db = state.db().unwrap();
    let input = dto("cat", OffsetDateTime::now_utc());
    games_sea::create_game(db, input.clone()).await?;

    let again = games_sea::create_game(db, input).await;

    assert!(again.is_err());
    Ok(())
}

#[tokio::test]
async fn test_count_by_state_groups_rows() -> Result<(), DbErr> {
    let state = seeded_state().await;
    let db = state.db().unwrap();

    let mut lost = dto("cat", datetime!(2017-02-20 00:00:00 UTC));
    lost.state = GameState::Lost;
    lost.remaining_guesses = 0;
    games_sea::create_game(db, lost).await?;

    let mut counts = games_sea::count_by_state(db).await?;
    counts.sort_by_key(|(state, _)| state.as_str());

    assert_eq!(
        counts,
        vec![(GameState::Lost, 1), (GameState::Started, 2)]
    );
    Ok(())
}

#[tokio::test]
async fn test_count_by_state_on_empty_table() -> Result<(), DbErr> {
    let state = memory_state().await;

    let counts = games_sea::count_by_state(state.db().unwrap()).await?;

    assert!(counts.is_empty());
    Ok(())
}
