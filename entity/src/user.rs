use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2id PHC string, never the plaintext password.
    pub password: String,
    pub name: String,
    pub date_register: Date,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planet_fav::Entity")]
    PlanetFav,
    #[sea_orm(has_many = "super::character_fav::Entity")]
    CharacterFav,
}

impl Related<super::planet_fav::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetFav.def()
    }
}

impl Related<super::character_fav::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterFav.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
