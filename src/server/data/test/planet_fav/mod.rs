use crate::server::data::{is_unique_violation, planet_fav::PlanetFavRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user_id;
mod get_planets_by_user_id;
