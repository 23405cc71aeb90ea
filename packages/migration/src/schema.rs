use sea_orm_migration::prelude::*;

/// Column identifiers for the `games` table. Column names keep the camelCase
/// spelling used by the HTTP representation.
#[derive(Iden)]
pub enum Games {
    Table,
    Id,
    Word,
    #[iden = "wordLength"]
    WordLength,
    #[iden = "lettersGuessed"]
    LettersGuessed,
    #[iden = "lettersMatched"]
    LettersMatched,
    #[iden = "remainingGuesses"]
    RemainingGuesses,
    State,
    #[iden = "createdOn"]
    CreatedOn,
    #[iden = "updatedOn"]
    UpdatedOn,
}

/// Values accepted by the `games.state` check constraint.
pub const GAME_STATES: [&str; 3] = ["started", "won", "lost"];
