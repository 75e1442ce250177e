use crate::server::data::{character_fav::CharacterFavRepository, is_unique_violation};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_characters_by_user_id;
