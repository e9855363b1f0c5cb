use sea_orm::DatabaseConnection;

use crate::{
    data::{cidade::CidadeRepository, unidade::UnidadeRepository},
    error::AppError,
    model::{
        page::{page_links, PageRequest, PaginatedResponse},
        unidade::{UnidadeDto, UnidadeFilter, UnidadeInput, BASE_PATH},
    },
};

pub struct UnidadeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnidadeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: UnidadeFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<UnidadeDto>, AppError> {
        let repo = UnidadeRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = UnidadeDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<UnidadeDto, AppError> {
        let model = UnidadeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Unidade com Id {id} não encontrada.")))?;

        Ok(UnidadeDto::from_entity(model))
    }

    /// Creates a unit after validating that the referenced city exists.
    pub async fn create(&self, input: UnidadeInput) -> Result<UnidadeDto, AppError> {
        if !CidadeRepository::new(self.db).exists(input.id_cidade).await? {
            return Err(AppError::BadRequest(format!(
                "Cidade com Id {} não encontrada.",
                input.id_cidade
            )));
        }

        let model = UnidadeRepository::new(self.db).create(input).await?;

        Ok(UnidadeDto::from_entity(model))
    }

    /// Updates an existing unit. The city reference is re-validated only
    /// when the payload changes it.
    pub async fn update(&self, id: i32, input: UnidadeInput) -> Result<(), AppError> {
        let repo = UnidadeRepository::new(self.db);

        let model = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Unidade com Id {id} não encontrada.")))?;

        if model.id_cidade != input.id_cidade
            && !CidadeRepository::new(self.db).exists(input.id_cidade).await?
        {
            return Err(AppError::BadRequest(format!(
                "Cidade com Id {} não encontrada.",
                input.id_cidade
            )));
        }

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UnidadeRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Unidade com Id {id} não encontrada."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
