//! Sector data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    page::{active_text, PageRequest},
    setor::{SetorFilter, SetorInput},
};

/// Repository providing database operations for sector records.
pub struct SetorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of sectors matching the active filters: exact match on
    /// `unidadeId`, substring match on `nome`.
    pub async fn get_paginated(
        &self,
        filter: &SetorFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::setor::Model>, u64), DbErr> {
        let mut query = entity::prelude::Setor::find();

        if let Some(unidade_id) = filter.unidade_id {
            query = query.filter(entity::setor::Column::IdUnidade.eq(unidade_id));
        }
        if let Some(nome) = active_text(&filter.nome) {
            query = query.filter(entity::setor::Column::Nome.contains(nome));
        }

        let paginator = query
            .order_by_asc(entity::setor::Column::IdSetor)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::setor::Model>, DbErr> {
        entity::prelude::Setor::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, input: SetorInput) -> Result<entity::setor::Model, DbErr> {
        entity::setor::ActiveModel {
            nome: ActiveValue::Set(input.nome),
            id_unidade: ActiveValue::Set(input.id_unidade),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        model: entity::setor::Model,
        input: SetorInput,
    ) -> Result<entity::setor::Model, DbErr> {
        let mut active_model: entity::setor::ActiveModel = model.into();
        active_model.nome = ActiveValue::Set(input.nome);
        active_model.id_unidade = ActiveValue::Set(input.id_unidade);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Setor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a sector with the given id exists. Used by the
    /// services owning sector references to validate them before a write.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Setor::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
