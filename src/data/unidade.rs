//! Unit data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    page::{active_text, PageRequest},
    unidade::{UnidadeFilter, UnidadeInput},
};

/// Repository providing database operations for unit records.
pub struct UnidadeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnidadeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of units matching the active filters: exact match on
    /// `cidadeId`, substring match on `nome`.
    pub async fn get_paginated(
        &self,
        filter: &UnidadeFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::unidade::Model>, u64), DbErr> {
        let mut query = entity::prelude::Unidade::find();

        if let Some(cidade_id) = filter.cidade_id {
            query = query.filter(entity::unidade::Column::IdCidade.eq(cidade_id));
        }
        if let Some(nome) = active_text(&filter.nome) {
            query = query.filter(entity::unidade::Column::Nome.contains(nome));
        }

        let paginator = query
            .order_by_asc(entity::unidade::Column::IdUnidade)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::unidade::Model>, DbErr> {
        entity::prelude::Unidade::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, input: UnidadeInput) -> Result<entity::unidade::Model, DbErr> {
        entity::unidade::ActiveModel {
            nome: ActiveValue::Set(input.nome),
            id_cidade: ActiveValue::Set(input.id_cidade),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        model: entity::unidade::Model,
        input: UnidadeInput,
    ) -> Result<entity::unidade::Model, DbErr> {
        let mut active_model: entity::unidade::ActiveModel = model.into();
        active_model.nome = ActiveValue::Set(input.nome);
        active_model.id_cidade = ActiveValue::Set(input.id_cidade);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Unidade::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a unit with the given id exists. Used by the sector
    /// service to validate the unit reference before a write.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Unidade::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
