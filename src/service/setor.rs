use sea_orm::DatabaseConnection;

use crate::{
    data::{setor::SetorRepository, unidade::UnidadeRepository},
    error::AppError,
    model::{
        page::{page_links, PageRequest, PaginatedResponse},
        setor::{SetorDto, SetorFilter, SetorInput, BASE_PATH},
    },
};

pub struct SetorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: SetorFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<SetorDto>, AppError> {
        let repo = SetorRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = SetorDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<SetorDto, AppError> {
        let model = SetorRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Setor com Id {id} não encontrado.")))?;

        Ok(SetorDto::from_entity(model))
    }

    /// Creates a sector after validating that the referenced unit exists.
    pub async fn create(&self, input: SetorInput) -> Result<SetorDto, AppError> {
        if !UnidadeRepository::new(self.db)
            .exists(input.id_unidade)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Unidade com Id {} não encontrada.",
                input.id_unidade
            )));
        }

        let model = SetorRepository::new(self.db).create(input).await?;

        Ok(SetorDto::from_entity(model))
    }

    /// Updates an existing sector. The unit reference is re-validated only
    /// when the payload changes it.
    pub async fn update(&self, id: i32, input: SetorInput) -> Result<(), AppError> {
        let repo = SetorRepository::new(self.db);

        let model = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Setor com Id {id} não encontrado.")))?;

        if model.id_unidade != input.id_unidade
            && !UnidadeRepository::new(self.db)
                .exists(input.id_unidade)
                .await?
        {
            return Err(AppError::BadRequest(format!(
                "Unidade com Id {} não encontrada.",
                input.id_unidade
            )));
        }

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SetorRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Setor com Id {id} não encontrado."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
