use entity::prelude::Lora;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::{
    data::lora::LoraRepository,
    model::{
        lora::{LoraFilter, LoraInput},
        page::PageRequest,
    },
};

mod create;
mod get_paginated;
