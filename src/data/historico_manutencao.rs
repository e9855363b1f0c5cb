//! Movement history data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    historico_manutencao::{HistoricoManutencaoFilter, HistoricoManutencaoInput},
    page::PageRequest,
};

/// Repository providing database operations for movement history entries.
pub struct HistoricoManutencaoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistoricoManutencaoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of history entries matching the active filters: exact
    /// matches on `motoId`, `setorOrigemId`, and `setorDestinoId`.
    pub async fn get_paginated(
        &self,
        filter: &HistoricoManutencaoFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::historico_manutencao::Model>, u64), DbErr> {
        let mut query = entity::prelude::HistoricoManutencao::find();

        if let Some(moto_id) = filter.moto_id {
            query = query.filter(entity::historico_manutencao::Column::IdMoto.eq(moto_id));
        }
        if let Some(setor_origem_id) = filter.setor_origem_id {
            query = query
                .filter(entity::historico_manutencao::Column::IdSetorOrigem.eq(setor_origem_id));
        }
        if let Some(setor_destino_id) = filter.setor_destino_id {
            query = query
                .filter(entity::historico_manutencao::Column::IdSetorDestino.eq(setor_destino_id));
        }

        let paginator = query
            .order_by_asc(entity::historico_manutencao::Column::IdMovimentacao)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::historico_manutencao::Model>, DbErr> {
        entity::prelude::HistoricoManutencao::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        input: HistoricoManutencaoInput,
    ) -> Result<entity::historico_manutencao::Model, DbErr> {
        entity::historico_manutencao::ActiveModel {
            id_moto: ActiveValue::Set(input.id_moto),
            id_setor_origem: ActiveValue::Set(input.id_setor_origem),
            id_setor_destino: ActiveValue::Set(input.id_setor_destino),
            data_movimento: ActiveValue::Set(input.data_movimento),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        model: entity::historico_manutencao::Model,
        input: HistoricoManutencaoInput,
    ) -> Result<entity::historico_manutencao::Model, DbErr> {
        let mut active_model: entity::historico_manutencao::ActiveModel = model.into();
        active_model.id_moto = ActiveValue::Set(input.id_moto);
        active_model.id_setor_origem = ActiveValue::Set(input.id_setor_origem);
        active_model.id_setor_destino = ActiveValue::Set(input.id_setor_destino);
        active_model.data_movimento = ActiveValue::Set(input.data_movimento);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::HistoricoManutencao::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
