//! City data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    cidade::{CidadeFilter, CidadeInput},
    page::{active_text, PageRequest},
};

/// Repository providing database operations for city records.
pub struct CidadeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CidadeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of cities matching the active filters.
    ///
    /// Filters are applied before counting, so the returned total reflects
    /// the filtered collection. Rows are ordered by primary key ascending.
    ///
    /// # Returns
    /// - `Ok((models, total))` - Page slice and filtered total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &CidadeFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::cidade::Model>, u64), DbErr> {
        let mut query = entity::prelude::Cidade::find();

        if let Some(nome) = active_text(&filter.nome) {
            query = query.filter(entity::cidade::Column::Nome.contains(nome));
        }
        if let Some(estado_id) = filter.estado_id {
            query = query.filter(entity::cidade::Column::IdEstado.eq(estado_id));
        }

        let paginator = query
            .order_by_asc(entity::cidade::Column::IdCidade)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::cidade::Model>, DbErr> {
        entity::prelude::Cidade::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, input: CidadeInput) -> Result<entity::cidade::Model, DbErr> {
        entity::cidade::ActiveModel {
            nome: ActiveValue::Set(input.nome),
            id_estado: ActiveValue::Set(input.id_estado),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites all mutable columns of an existing city.
    pub async fn update(
        &self,
        model: entity::cidade::Model,
        input: CidadeInput,
    ) -> Result<entity::cidade::Model, DbErr> {
        let mut active_model: entity::cidade::ActiveModel = model.into();
        active_model.nome = ActiveValue::Set(input.nome);
        active_model.id_estado = ActiveValue::Set(input.id_estado);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Cidade::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a city with the given id exists. Used by the unit
    /// service to validate the city reference before a write.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Cidade::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
