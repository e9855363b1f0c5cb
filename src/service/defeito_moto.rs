use sea_orm::DatabaseConnection;

use crate::{
    data::{defeito::DefeitoRepository, defeito_moto::DefeitoMotoRepository, moto::MotoRepository},
    error::AppError,
    model::{
        defeito_moto::{DefeitoMotoDto, DefeitoMotoFilter, DefeitoMotoInput, BASE_PATH},
        page::{page_links, PageRequest, PaginatedResponse},
    },
};

pub struct DefeitoMotoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DefeitoMotoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: DefeitoMotoFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<DefeitoMotoDto>, AppError> {
        let repo = DefeitoMotoRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = DefeitoMotoDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<DefeitoMotoDto, AppError> {
        let model = DefeitoMotoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Defeito de moto com Id {id} não encontrado."))
            })?;

        Ok(DefeitoMotoDto::from_entity(model))
    }

    /// Creates a defect report after validating that both the motorcycle
    /// and the defect exist, in that order.
    pub async fn create(&self, input: DefeitoMotoInput) -> Result<DefeitoMotoDto, AppError> {
        if !MotoRepository::new(self.db).exists(input.id_moto).await? {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {} não encontrada.",
                input.id_moto
            )));
        }
        if !DefeitoRepository::new(self.db)
            .exists(input.id_defeito)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Defeito com Id {} não encontrado.",
                input.id_defeito
            )));
        }

        let model = DefeitoMotoRepository::new(self.db).create(input).await?;

        Ok(DefeitoMotoDto::from_entity(model))
    }

    /// Updates an existing defect report. Each reference is re-validated
    /// only when the payload changes it.
    pub async fn update(&self, id: i32, input: DefeitoMotoInput) -> Result<(), AppError> {
        let repo = DefeitoMotoRepository::new(self.db);

        let model = repo.get_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Defeito de moto com Id {id} não encontrado."))
        })?;

        if model.id_moto != input.id_moto
            && !MotoRepository::new(self.db).exists(input.id_moto).await?
        {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {} não encontrada.",
                input.id_moto
            )));
        }
        if model.id_defeito != input.id_defeito
            && !DefeitoRepository::new(self.db)
                .exists(input.id_defeito)
                .await?
        {
            return Err(AppError::BadRequest(format!(
                "Defeito com Id {} não encontrado.",
                input.id_defeito
            )));
        }

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DefeitoMotoRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Defeito de moto com Id {id} não encontrado."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
