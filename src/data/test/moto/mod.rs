use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, moto::MotoFactory},
};

use crate::{
    data::moto::MotoRepository,
    model::{
        moto::{MotoFilter, MotoInput},
        page::PageRequest,
    },
};

mod create;
mod exists;
mod get_paginated;
mod update;
