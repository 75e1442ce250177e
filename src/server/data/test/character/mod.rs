use crate::server::data::character::CharacterRepository;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_all;
