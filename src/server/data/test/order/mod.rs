use crate::server::{
    data::{list::ListQuery, order::OrderRepository},
    model::{
        list::ListParams,
        order::{CreateOrderParams, UpdateOrderParams},
    },
};
use chrono::NaiveDate;
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::order::OrderFactory};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod update;
