use crate::server::{
    data::{car::CarRepository, list::ListQuery},
    model::{
        car::{CreateCarParams, UpdateCarParams},
        list::ListParams,
    },
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;
