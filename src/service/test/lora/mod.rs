use entity::prelude::Lora;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::AppError,
    model::lora::LoraInput,
    service::lora::LoraService,
};

mod create;
mod update;
