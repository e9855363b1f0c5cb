use sea_orm::DatabaseConnection;

use crate::{
    data::{localizacao::LocalizacaoRepository, moto::MotoRepository, setor::SetorRepository},
    error::AppError,
    model::{
        localizacao::{LocalizacaoDto, LocalizacaoFilter, LocalizacaoInput, BASE_PATH},
        page::{page_links, PageRequest, PaginatedResponse},
    },
};

pub struct LocalizacaoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocalizacaoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: LocalizacaoFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<LocalizacaoDto>, AppError> {
        let repo = LocalizacaoRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = LocalizacaoDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<LocalizacaoDto, AppError> {
        let model = LocalizacaoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Localização com Id {id} não encontrada."))
            })?;

        Ok(LocalizacaoDto::from_entity(model))
    }

    /// Creates a location sample after validating the motorcycle and the
    /// sector, in that order.
    pub async fn create(&self, input: LocalizacaoInput) -> Result<LocalizacaoDto, AppError> {
        self.validate_references(&input).await?;

        let model = LocalizacaoRepository::new(self.db).create(input).await?;

        Ok(LocalizacaoDto::from_entity(model))
    }

    /// Updates an existing location sample. Each reference is re-validated
    /// only when the payload changes it.
    pub async fn update(&self, id: i32, input: LocalizacaoInput) -> Result<(), AppError> {
        let repo = LocalizacaoRepository::new(self.db);

        let model = repo.get_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Localização com Id {id} não encontrada."))
        })?;

        if model.id_moto != input.id_moto
            && !MotoRepository::new(self.db).exists(input.id_moto).await?
        {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {} não encontrada.",
                input.id_moto
            )));
        }
        if model.id_setor != input.id_setor
            && !SetorRepository::new(self.db).exists(input.id_setor).await?
        {
            return Err(AppError::BadRequest(format!(
                "Setor com Id {} não encontrado.",
                input.id_setor
            )));
        }

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = LocalizacaoRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Localização com Id {id} não encontrada."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    async fn validate_references(&self, input: &LocalizacaoInput) -> Result<(), AppError> {
        if !MotoRepository::new(self.db).exists(input.id_moto).await? {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {} não encontrada.",
                input.id_moto
            )));
        }
        if !SetorRepository::new(self.db).exists(input.id_setor).await? {
            return Err(AppError::BadRequest(format!(
                "Setor com Id {} não encontrado.",
                input.id_setor
            )));
        }

        Ok(())
    }
}
