use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    /// Free-form attributes (height, species, affiliations, ...).
    pub data: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character_fav::Entity")]
    CharacterFav,
}

impl Related<super::character_fav::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterFav.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
