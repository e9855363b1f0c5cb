//! Motorcycle data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    moto::{MotoFilter, MotoInput},
    page::{active_text, PageRequest},
};

/// Repository providing database operations for motorcycle records.
pub struct MotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of motorcycles matching the active filters.
    ///
    /// `placa`, `modelo`, and `status` are substring matches; `setorId` is
    /// an exact match. Filters are applied before counting, so the returned
    /// total reflects the filtered collection. Rows are ordered by primary
    /// key ascending.
    ///
    /// # Returns
    /// - `Ok((models, total))` - Page slice and filtered total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &MotoFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::moto::Model>, u64), DbErr> {
        let mut query = entity::prelude::Moto::find();

        if let Some(placa) = active_text(&filter.placa) {
            query = query.filter(entity::moto::Column::Placa.contains(placa));
        }
        if let Some(modelo) = active_text(&filter.modelo) {
            query = query.filter(entity::moto::Column::Modelo.contains(modelo));
        }
        if let Some(status) = active_text(&filter.status) {
            query = query.filter(entity::moto::Column::Status.contains(status));
        }
        if let Some(setor_id) = filter.setor_id {
            query = query.filter(entity::moto::Column::IdSetor.eq(setor_id));
        }

        let paginator = query
            .order_by_asc(entity::moto::Column::IdMoto)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::moto::Model>, DbErr> {
        entity::prelude::Moto::find_by_id(id).one(self.db).await
    }

    /// Inserts a new motorcycle. Timestamps absent from the payload default
    /// to the current time.
    pub async fn create(&self, input: MotoInput) -> Result<entity::moto::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::moto::ActiveModel {
            modelo: ActiveValue::Set(input.modelo),
            placa: ActiveValue::Set(input.placa),
            status: ActiveValue::Set(input.status),
            data_cadastro: ActiveValue::Set(input.data_cadastro.unwrap_or(now)),
            data_atualizacao: ActiveValue::Set(input.data_atualizacao.unwrap_or(now)),
            id_setor: ActiveValue::Set(input.id_setor),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the mutable columns of an existing motorcycle.
    ///
    /// `data_cadastro` is preserved and `data_atualizacao` is stamped with
    /// the current time; the payload values for both are ignored on update.
    pub async fn update(
        &self,
        model: entity::moto::Model,
        input: MotoInput,
    ) -> Result<entity::moto::Model, DbErr> {
        let mut active_model: entity::moto::ActiveModel = model.into();
        active_model.modelo = ActiveValue::Set(input.modelo);
        active_model.placa = ActiveValue::Set(input.placa);
        active_model.status = ActiveValue::Set(input.status);
        active_model.id_setor = ActiveValue::Set(input.id_setor);
        active_model.data_atualizacao = ActiveValue::Set(Utc::now().naive_utc());

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Moto::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Checks whether a motorcycle with the given id exists. Used by the
    /// services owning motorcycle references to validate them before a
    /// write.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Moto::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
