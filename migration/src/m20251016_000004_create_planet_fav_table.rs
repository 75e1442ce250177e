use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251016_000001_create_user_table::User, m20251016_000002_create_planet_table::Planet};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanetFav::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanetFav::Id))
                    .col(integer(PlanetFav::UserId))
                    .col(integer(PlanetFav::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planet_fav_user_id")
                            .from(PlanetFav::Table, PlanetFav::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planet_fav_planet_id")
                            .from(PlanetFav::Table, PlanetFav::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user can favorite a planet at most once
        manager
            .create_index(
                Index::create()
                    .name("idx_planet_fav_user_planet")
                    .table(PlanetFav::Table)
                    .col(PlanetFav::UserId)
                    .col(PlanetFav::PlanetId)
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
                    .name("idx_planet_fav_user_planet")
                    .table(PlanetFav::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlanetFav::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PlanetFav {
    Table,
    Id,
    UserId,
    PlanetId,
}
