use entity::prelude::Defeito;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::defeito::DefeitoRepository,
    model::{defeito::DefeitoFilter, page::PageRequest},
};

mod get_paginated;
