use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251016_000001_create_user_table::User, m20251016_000003_create_character_table::Character,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterFav::Table)
                    .if_not_exists()
                    .col(pk_auto(CharacterFav::Id))
                    .col(integer(CharacterFav::UserId))
                    .col(integer(CharacterFav::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_fav_user_id")
                            .from(CharacterFav::Table, CharacterFav::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_fav_character_id")
                            .from(CharacterFav::Table, CharacterFav::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_character_fav_user_character")
                    .table(CharacterFav::Table)
                    .col(CharacterFav::UserId)
                    .col(CharacterFav::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_character_fav_user_character")
                    .table(CharacterFav::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CharacterFav::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CharacterFav {
    Table,
    Id,
    UserId,
    CharacterId,
}
