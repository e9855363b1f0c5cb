//! LoRa device data repository.

use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    lora::{LoraFilter, LoraInput},
    page::{active_text, PageRequest},
};

/// Repository providing database operations for LoRa device records.
pub struct LoraRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoraRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of LoRa devices matching the active filters.
    ///
    /// `motoId` is an exact match against the stored assignment column. The
    /// device number is stored as an integer, so the `numeroLora` filter
    /// casts the column to text and matches a substring of its decimal
    /// rendering.
    pub async fn get_paginated(
        &self,
        filter: &LoraFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::lora::Model>, u64), DbErr> {
        let mut query = entity::prelude::Lora::find();

        if let Some(moto_id) = filter.moto_id {
            query = query.filter(entity::lora::Column::Moto.eq(moto_id));
        }
        if let Some(numero_lora) = active_text(&filter.numero_lora) {
            query = query.filter(
                Expr::col(entity::lora::Column::NumeroLora)
                    .cast_as(Alias::new("TEXT"))
                    .like(format!("%{numero_lora}%")),
            );
        }

        let paginator = query
            .order_by_asc(entity::lora::Column::IdLora)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::lora::Model>, DbErr> {
        entity::prelude::Lora::find_by_id(id).one(self.db).await
    }

    /// Inserts a new device. The assignment column stores `0` when the
    /// device is unassigned.
    pub async fn create(&self, input: LoraInput) -> Result<entity::lora::Model, DbErr> {
        entity::lora::ActiveModel {
            numero_lora: ActiveValue::Set(input.numero_lora),
            moto: ActiveValue::Set(input.moto_or_zero()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        model: entity::lora::Model,
        input: LoraInput,
    ) -> Result<entity::lora::Model, DbErr> {
        let moto = input.moto_or_zero();

        let mut active_model: entity::lora::ActiveModel = model.into();
        active_model.numero_lora = ActiveValue::Set(input.numero_lora);
        active_model.moto = ActiveValue::Set(moto);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Lora::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
