use sea_orm::DatabaseConnection;

use crate::{
    data::{moto::MotoRepository, setor::SetorRepository},
    error::AppError,
    model::{
        moto::{MotoDto, MotoFilter, MotoInput, BASE_PATH},
        page::{page_links, PageRequest, PaginatedResponse},
    },
};

pub struct MotoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MotoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of motorcycles. Item links inside the page drop the
    /// `all` entry; navigation links re-encode the active filters.
    pub async fn get_paginated(
        &self,
        filter: MotoFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<MotoDto>, AppError> {
        let repo = MotoRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = MotoDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MotoDto, AppError> {
        let model = MotoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Moto com Id {id} não encontrada.")))?;

        Ok(MotoDto::from_entity(model))
    }

    /// Creates a motorcycle after validating that the referenced sector
    /// exists.
    pub async fn create(&self, input: MotoInput) -> Result<MotoDto, AppError> {
        if !SetorRepository::new(self.db).exists(input.id_setor).await? {
            return Err(AppError::BadRequest(format!(
                "Setor {} não encontrado.",
                input.id_setor
            )));
        }

        let model = MotoRepository::new(self.db).create(input).await?;

        Ok(MotoDto::from_entity(model))
    }

    /// Updates an existing motorcycle. The sector reference is re-validated
    /// only when the payload changes it; `dataAtualizacao` is stamped
    /// server-side.
    pub async fn update(&self, id: i32, input: MotoInput) -> Result<(), AppError> {
        let repo = MotoRepository::new(self.db);

        let model = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Moto com Id {id} não encontrada.")))?;

        if model.id_setor != input.id_setor
            && !SetorRepository::new(self.db).exists(input.id_setor).await?
        {
            return Err(AppError::BadRequest(format!(
                "Setor {} não encontrado.",
                input.id_setor
            )));
        }

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = MotoRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Moto com Id {id} não encontrada."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
