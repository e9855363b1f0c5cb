use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::AppError,
    model::{
        cidade::{CidadeFilter, CidadeInput},
        page::PageRequest,
    },
    service::cidade::CidadeService,
};

mod create;
mod get_paginated;
mod update;
