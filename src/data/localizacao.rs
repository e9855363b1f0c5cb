//! Location sample data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    localizacao::{LocalizacaoFilter, LocalizacaoInput},
    page::PageRequest,
};

/// Repository providing database operations for location samples.
pub struct LocalizacaoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocalizacaoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of location samples matching the active filters: exact
    /// matches on `motoId` and `setorId`.
    pub async fn get_paginated(
        &self,
        filter: &LocalizacaoFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::localizacao::Model>, u64), DbErr> {
        let mut query = entity::prelude::Localizacao::find();

        if let Some(moto_id) = filter.moto_id {
            query = query.filter(entity::localizacao::Column::IdMoto.eq(moto_id));
        }
        if let Some(setor_id) = filter.setor_id {
            query = query.filter(entity::localizacao::Column::IdSetor.eq(setor_id));
        }

        let paginator = query
            .order_by_asc(entity::localizacao::Column::IdLocalizacao)
            .paginate(self.db, page.page_size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.fetch_page_index(total)).await?;

        Ok((models, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::localizacao::Model>, DbErr> {
        entity::prelude::Localizacao::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        input: LocalizacaoInput,
    ) -> Result<entity::localizacao::Model, DbErr> {
        entity::localizacao::ActiveModel {
            latitude: ActiveValue::Set(input.latitude),
            longitude: ActiveValue::Set(input.longitude),
            id_moto: ActiveValue::Set(input.id_moto),
            id_setor: ActiveValue::Set(input.id_setor),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        model: entity::localizacao::Model,
        input: LocalizacaoInput,
    ) -> Result<entity::localizacao::Model, DbErr> {
        let mut active_model: entity::localizacao::ActiveModel = model.into();
        active_model.latitude = ActiveValue::Set(input.latitude);
        active_model.longitude = ActiveValue::Set(input.longitude);
        active_model.id_moto = ActiveValue::Set(input.id_moto);
        active_model.id_setor = ActiveValue::Set(input.id_setor);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Localizacao::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
