//! Defect catalog data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    defeito::{DefeitoFilter, DefeitoInput},
    page::{active_text, PageRequest},
};

/// Repository providing database operations for defect catalog records.
pub struct DefeitoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DefeitoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of defects matching the optional `nome` substring
    /// filter.
    pub async fn get_paginated(
        &self,
        filter: &DefeitoFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::defeito::Model>, u64), DbErr> {
        let mut query = entity::prelude::Defeito::find();

        if let Some(nome) = active_text(&filter.nome) {
            query = query.filter(entity::defeito::Column::Nome.contains(nome));
        }

        let paginator = query
            .order_by_asc(entity::defeito::Column::IdDefeito)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::defeito::Model>, DbErr> {
        entity::prelude::Defeito::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, input: DefeitoInput) -> Result<entity::defeito::Model, DbErr> {
        entity::defeito::ActiveModel {
            nome: ActiveValue::Set(input.nome),
            descricao: ActiveValue::Set(input.descricao),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        model: entity::defeito::Model,
        input: DefeitoInput,
    ) -> Result<entity::defeito::Model, DbErr> {
        let mut active_model: entity::defeito::ActiveModel = model.into();
        active_model.nome = ActiveValue::Set(input.nome);
        active_model.descricao = ActiveValue::Set(input.descricao);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Defeito::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a defect with the given id exists. Used by the defect
    /// report service to validate the defect reference before a write.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Defeito::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
