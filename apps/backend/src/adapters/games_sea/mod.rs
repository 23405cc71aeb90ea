//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::games;
use crate::entities::games::GameState;

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

// Adapter functions return DbErr; the repo layer maps to DomainError.

/// All games, oldest first. Ties on creation time are broken by id so listing is stable.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .order_by_asc(games::Column::CreatedOn)
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

/// Row count per state. States with no games are absent from the result.
pub async fn count_by_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(GameState, i64)>, sea_orm::DbErr> {
    games::Entity::find()
        .select_only()
        .column(games::Column::State)
        .column_as(Expr::col(games::Column::Id).count(), "n")
        .group_by(games::Column::State)
        .into_tuple()
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Id.eq(game_id))
        .one(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game_active = games::ActiveModel {
        id: Set(dto.id),
        word: Set(dto.word),
        word_length: Set(dto.word_length),
        letters_guessed: Set(dto.letters_guessed),
        letters_matched: Set(dto.letters_matched),
        remaining_guesses: Set(dto.remaining_guesses),
        state: Set(dto.state),
        created_on: Set(dto.created_on),
        updated_on: Set(dto.created_on),
    };

    game_active.insert(conn).await
}

/// Apply a partial update and refresh `updatedOn`.
///
/// Returns the number of rows affected; 0 means no game has that id.
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let mut update = games::Entity::update_many()
        .col_expr(games::Column::UpdatedOn, Expr::val(now).into());

    if let Some(letters) = dto.letters_guessed {
        update = update.col_expr(games::Column::LettersGuessed, Expr::val(letters).into());
    }
    if let Some(letters) = dto.letters_matched {
        update = update.col_expr(games::Column::LettersMatched, Expr::val(letters).into());
    }
    if let Some(remaining) = dto.remaining_guesses {
        update = update.col_expr(
            games::Column::RemainingGuesses,
            Expr::val(i32::from(remaining)).into(),
        );
    }
    if let Some(state) = dto.state {
        update = update.col_expr(games::Column::State, Expr::val(state.as_str()).into());
    }

    let result = update
        .filter(games::Column::Id.eq(dto.id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Delete a game. Absent ids are not an error; the row count tells them apart.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::delete_many()
        .filter(games::Column::Id.eq(game_id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
