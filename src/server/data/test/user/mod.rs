use crate::server::{data::user::UserRepository, model::user::NewUserParam};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod find_by_id;
mod get_all;

fn new_user(email: &str) -> NewUserParam {
    NewUserParam {
        email: email.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        name: "A".to_string(),
        date_register: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
    }
}
