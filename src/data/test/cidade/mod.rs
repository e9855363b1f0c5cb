use entity::prelude::{Cidade, Estado};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::cidade::CidadeRepository,
    model::{
        cidade::{CidadeFilter, CidadeInput},
        page::PageRequest,
    },
};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
