//! State data repository.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::model::{
    estado::{EstadoFilter, EstadoInput},
    page::{active_text, PageRequest},
};

/// Repository providing database operations for state records.
pub struct EstadoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EstadoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of states matching the active filters.
    ///
    /// The `sigla` filter is a case-insensitive equality match: both sides
    /// are upper-cased before comparison, so `sigla=sp` matches `SP`.
    pub async fn get_paginated(
        &self,
        filter: &EstadoFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::estado::Model>, u64), DbErr> {
        let mut query = entity::prelude::Estado::find();

        if let Some(sigla) = active_text(&filter.sigla) {
            query = query.filter(
                Func::upper(Expr::col(entity::estado::Column::Sigla)).eq(sigla.to_uppercase()),
            );
        }

        let paginator = query
            .order_by_asc(entity::estado::Column::IdEstado)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::estado::Model>, DbErr> {
        entity::prelude::Estado::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, input: EstadoInput) -> Result<entity::estado::Model, DbErr> {
        entity::estado::ActiveModel {
            nome: ActiveValue::Set(input.nome),
            sigla: ActiveValue::Set(input.sigla),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        model: entity::estado::Model,
        input: EstadoInput,
    ) -> Result<entity::estado::Model, DbErr> {
        let mut active_model: entity::estado::ActiveModel = model.into();
        active_model.nome = ActiveValue::Set(input.nome);
        active_model.sigla = ActiveValue::Set(input.sigla);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Estado::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a state with the given id exists. Used by the city
    /// service to validate the state reference before a write.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Estado::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
