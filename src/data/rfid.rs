//! RFID tag data repository.

use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    page::{active_text, PageRequest},
    rfid::{RfidFilter, RfidInput},
};

/// Repository providing database operations for RFID tag records.
pub struct RfidRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RfidRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of RFID tags matching the active filters.
    ///
    /// `motoId` is an exact match. The tag number is stored as an integer,
    /// so the `numeroRfid` filter casts the column to text and matches a
    /// substring of its decimal rendering.
    pub async fn get_paginated(
        &self,
        filter: &RfidFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::rfid::Model>, u64), DbErr> {
        let mut query = entity::prelude::Rfid::find();

        if let Some(moto_id) = filter.moto_id {
            query = query.filter(entity::rfid::Column::IdMoto.eq(moto_id));
        }
        if let Some(numero_rfid) = active_text(&filter.numero_rfid) {
            query = query.filter(
                Expr::col(entity::rfid::Column::NumeroRfid)
                    .cast_as(Alias::new("TEXT"))
                    .like(format!("%{numero_rfid}%")),
            );
        }

        let paginator = query
            .order_by_asc(entity::rfid::Column::IdRfid)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::rfid::Model>, DbErr> {
        entity::prelude::Rfid::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, input: RfidInput) -> Result<entity::rfid::Model, DbErr> {
        entity::rfid::ActiveModel {
            numero_rfid: ActiveValue::Set(input.numero_rfid),
            id_moto: ActiveValue::Set(input.id_moto),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        model: entity::rfid::Model,
        input: RfidInput,
    ) -> Result<entity::rfid::Model, DbErr> {
        let mut active_model: entity::rfid::ActiveModel = model.into();
        active_model.numero_rfid = ActiveValue::Set(input.numero_rfid);
        active_model.id_moto = ActiveValue::Set(input.id_moto);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Rfid::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
