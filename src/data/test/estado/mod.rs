use entity::prelude::Estado;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::estado::EstadoRepository,
    model::{estado::EstadoFilter, page::PageRequest},
};

mod get_paginated;
