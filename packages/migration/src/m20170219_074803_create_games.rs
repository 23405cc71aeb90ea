use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

use crate::schema::{Games, GAME_STATES};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Games::WordLength).string().not_null())
                    .col(ColumnDef::new(Games::LettersGuessed).string().not_null())
                    .col(ColumnDef::new(Games::LettersMatched).string().not_null())
                    .col(ColumnDef::new(Games::RemainingGuesses).integer().not_null())
                    .col(
                        ColumnDef::new(Games::State)
                            .string_len(16)
                            .not_null()
                            .default("started")
                            .check(Expr::col(Games::State).is_in(GAME_STATES)),
                    )
                    .col(ColumnDef::new(Games::Word).string().not_null())
                    .col(
                        ColumnDef::new(Games::CreatedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // listing is ordered by creation time
        manager
            .create_index(
                Index::create()
                    .name("ix_games_created_on")
                    .table(Games::Table)
                    .col(Games::CreatedOn)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_games_created_on")
                    .table(Games::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}
