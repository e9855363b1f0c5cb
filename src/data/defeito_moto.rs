//! Motorcycle defect report data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    defeito_moto::{DefeitoMotoFilter, DefeitoMotoInput},
    page::PageRequest,
};

/// Repository providing database operations for motorcycle defect reports.
pub struct DefeitoMotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DefeitoMotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of defect reports matching the active filters: exact
    /// matches on `motoId` and `defeitoId`.
    pub async fn get_paginated(
        &self,
        filter: &DefeitoMotoFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::defeito_moto::Model>, u64), DbErr> {
        let mut query = entity::prelude::DefeitoMoto::find();

        if let Some(moto_id) = filter.moto_id {
            query = query.filter(entity::defeito_moto::Column::IdMoto.eq(moto_id));
        }
        if let Some(defeito_id) = filter.defeito_id {
            query = query.filter(entity::defeito_moto::Column::IdDefeito.eq(defeito_id));
        }

        let paginator = query
            .order_by_asc(entity::defeito_moto::Column::IdDefeitoMoto)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::defeito_moto::Model>, DbErr> {
        entity::prelude::DefeitoMoto::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Inserts a new defect report. Timestamps absent from the payload
    /// default to the current time.
    pub async fn create(
        &self,
        input: DefeitoMotoInput,
    ) -> Result<entity::defeito_moto::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::defeito_moto::ActiveModel {
            id_moto: ActiveValue::Set(input.id_moto),
            id_defeito: ActiveValue::Set(input.id_defeito),
            data_registro: ActiveValue::Set(input.data_registro.unwrap_or(now)),
            data_atualizacao: ActiveValue::Set(input.data_atualizacao.unwrap_or(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites an existing defect report. An absent `data_registro`
    /// keeps the stored value; an absent `data_atualizacao` stamps the
    /// current time.
    pub async fn update(
        &self,
        model: entity::defeito_moto::Model,
        input: DefeitoMotoInput,
    ) -> Result<entity::defeito_moto::Model, DbErr> {
        let data_registro = input.data_registro.unwrap_or(model.data_registro);
        let data_atualizacao = input
            .data_atualizacao
            .unwrap_or_else(|| Utc::now().naive_utc());

        let mut active_model: entity::defeito_moto::ActiveModel = model.into();
        active_model.id_moto = ActiveValue::Set(input.id_moto);
        active_model.id_defeito = ActiveValue::Set(input.id_defeito);
        active_model.data_registro = ActiveValue::Set(data_registro);
        active_model.data_atualizacao = ActiveValue::Set(data_atualizacao);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::DefeitoMoto::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
