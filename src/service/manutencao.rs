use sea_orm::DatabaseConnection;

use crate::{
    data::{manutencao::ManutencaoRepository, moto::MotoRepository},
    error::AppError,
    model::{
        manutencao::{ManutencaoDto, ManutencaoFilter, ManutencaoInput, BASE_PATH},
        page::{page_links, PageRequest, PaginatedResponse},
    },
};

pub struct ManutencaoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManutencaoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: ManutencaoFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<ManutencaoDto>, AppError> {
        let repo = ManutencaoRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = ManutencaoDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ManutencaoDto, AppError> {
        let model = ManutencaoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Manutenção com Id {id} não encontrada."))
            })?;

        Ok(ManutencaoDto::from_entity(model))
    }

    /// Creates a maintenance record after validating that the referenced
    /// motorcycle exists.
    pub async fn create(&self, input: ManutencaoInput) -> Result<ManutencaoDto, AppError> {
        if !MotoRepository::new(self.db).exists(input.id_moto).await? {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {} não encontrada.",
                input.id_moto
            )));
        }

        let model = ManutencaoRepository::new(self.db).create(input).await?;

        Ok(ManutencaoDto::from_entity(model))
    }

    /// Updates an existing maintenance record. The motorcycle reference is
    /// re-validated only when the payload changes it.
    pub async fn update(&self, id: i32, input: ManutencaoInput) -> Result<(), AppError> {
        let repo = ManutencaoRepository::new(self.db);

        let model = repo.get_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Manutenção com Id {id} não encontrada."))
        })?;

        if model.id_moto != input.id_moto
            && !MotoRepository::new(self.db).exists(input.id_moto).await?
        {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {} não encontrada.",
                input.id_moto
            )));
        }

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ManutencaoRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Manutenção com Id {id} não encontrada."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
