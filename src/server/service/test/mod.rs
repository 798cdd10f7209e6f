use crate::server::{
    error::{validation::ValidationError, AppError, ErrorKind},
    model::list::{ListParams, SortOrder},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
