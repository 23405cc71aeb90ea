//! Fixed seed games.

use sea_orm_migration::sea_orm::{ConnectionTrait, DbErr};
use sea_orm_migration::sea_query::{OnConflict, Query};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::schema::Games;

/// A game inserted by [`seed`].
#[derive(Debug, Clone, Copy)]
pub struct SeedGame {
    pub id: Uuid,
    pub word: &'static str,
}

pub const PINEAPPLE_GAME_ID: Uuid = Uuid::from_u128(0x827094e8_e38e_47db_b8da_cf167e16d3be);
pub const RUSTACEAN_GAME_ID: Uuid = Uuid::from_u128(0x2c2f4e58_9bd7_4e0b_a5c8_53a1c6c5d1f0);

pub const SEED_GAMES: [SeedGame; 2] = [
    SeedGame {
        id: PINEAPPLE_GAME_ID,
        word: "pineapple",
    },
    SeedGame {
        id: RUSTACEAN_GAME_ID,
        word: "rustacean",
    },
];

/// Insert the seed games as fresh, unplayed games.
///
/// Rows that already exist are left untouched, so seeding twice is harmless.
/// Returns the number of rows written.
pub async fn seed<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    let now = OffsetDateTime::now_utc();
    let mut written = 0;

    for game in SEED_GAMES {
        let insert = Query::insert()
            .into_table(Games::Table)
            .columns([
                Games::Id,
                Games::Word,
                Games::WordLength,
                Games::LettersGuessed,
                Games::LettersMatched,
                Games::RemainingGuesses,
                Games::State,
                Games::CreatedOn,
                Games::UpdatedOn,
            ])
            .values_panic([
                game.id.into(),
                game.word.into(),
                game.word.len().to_string().into(),
                "".into(),
                "_".repeat(game.word.len()).into(),
                6i32.into(),
                "started".into(),
                now.into(),
                now.into(),
            ])
            .on_conflict(OnConflict::column(Games::Id).do_nothing().to_owned())
            .to_owned();

        let result = db.execute(db.get_database_backend().build(&insert)).await?;
        written += result.rows_affected();
    }

    tracing::info!(written, "seeded games");
    Ok(written)
}
