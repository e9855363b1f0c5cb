//! Maintenance record data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    manutencao::{ManutencaoFilter, ManutencaoInput},
    page::{active_text, PageRequest},
};

/// Repository providing database operations for maintenance records.
pub struct ManutencaoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManutencaoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of maintenance records matching the active filters:
    /// exact match on `motoId`, substring match on `tipo`.
    pub async fn get_paginated(
        &self,
        filter: &ManutencaoFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::manutencao::Model>, u64), DbErr> {
        let mut query = entity::prelude::Manutencao::find();

        if let Some(moto_id) = filter.moto_id {
            query = query.filter(entity::manutencao::Column::IdMoto.eq(moto_id));
        }
        if let Some(tipo) = active_text(&filter.tipo) {
            query = query.filter(entity::manutencao::Column::Tipo.contains(tipo));
        }

        let paginator = query
            .order_by_asc(entity::manutencao::Column::IdManutencao)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::manutencao::Model>, DbErr> {
        entity::prelude::Manutencao::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        input: ManutencaoInput,
    ) -> Result<entity::manutencao::Model, DbErr> {
        entity::manutencao::ActiveModel {
            id_moto: ActiveValue::Set(input.id_moto),
            descricao: ActiveValue::Set(input.descricao),
            data_manutencao: ActiveValue::Set(input.data_manutencao),
            custo_estimado: ActiveValue::Set(input.custo_estimado),
            tipo: ActiveValue::Set(input.tipo),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        model: entity::manutencao::Model,
        input: ManutencaoInput,
    ) -> Result<entity::manutencao::Model, DbErr> {
        let mut active_model: entity::manutencao::ActiveModel = model.into();
        active_model.id_moto = ActiveValue::Set(input.id_moto);
        active_model.descricao = ActiveValue::Set(input.descricao);
        active_model.data_manutencao = ActiveValue::Set(input.data_manutencao);
        active_model.custo_estimado = ActiveValue::Set(input.custo_estimado);
        active_model.tipo = ActiveValue::Set(input.tipo);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Manutencao::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
