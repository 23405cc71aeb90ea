use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[sea_orm(string_value = "started")]
    Started,
    #[sea_orm(string_value = "won")]
    Won,
    #[sea_orm(string_value = "lost")]
    Lost,
}

impl GameState {
    /// Won and lost games accept no further guesses.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Started => "started",
            GameState::Won => "won",
            GameState::Lost => "lost",
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub word: String,
    #[sea_orm(column_name = "wordLength")]
    pub word_length: String,
    #[sea_orm(column_name = "lettersGuessed")]
    pub letters_guessed: String,
    #[sea_orm(column_name = "lettersMatched")]
    pub letters_matched: String,
    #[sea_orm(column_name = "remainingGuesses")]
    pub remaining_guesses: i32,
    pub state: GameState,
    #[sea_orm(column_name = "createdOn")]
    pub created_on: OffsetDateTime,
    #[sea_orm(column_name = "updatedOn")]
    pub updated_on: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
