use sea_orm::DatabaseConnection;

use crate::{
    data::{cidade::CidadeRepository, estado::EstadoRepository},
    error::AppError,
    model::{
        cidade::{CidadeDto, CidadeFilter, CidadeInput, BASE_PATH},
        page::{page_links, PageRequest, PaginatedResponse},
    },
};

pub struct CidadeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CidadeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of cities. Item links inside the page drop the `all`
    /// entry; navigation links re-encode the active filters.
    pub async fn get_paginated(
        &self,
        filter: CidadeFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<CidadeDto>, AppError> {
        let repo = CidadeRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = CidadeDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CidadeDto, AppError> {
        let model = CidadeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cidade com Id {id} não encontrada.")))?;

        Ok(CidadeDto::from_entity(model))
    }

    /// Creates a city after validating that the referenced state exists.
    pub async fn create(&self, input: CidadeInput) -> Result<CidadeDto, AppError> {
        if !EstadoRepository::new(self.db).exists(input.id_estado).await? {
            return Err(AppError::BadRequest(format!(
                "Estado com Id {} não encontrado.",
                input.id_estado
            )));
        }

        let model = CidadeRepository::new(self.db).create(input).await?;

        Ok(CidadeDto::from_entity(model))
    }

    /// Updates an existing city. The state reference is re-validated only
    /// when the payload changes it.
    pub async fn update(&self, id: i32, input: CidadeInput) -> Result<(), AppError> {
        let repo = CidadeRepository::new(self.db);

        let model = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cidade com Id {id} não encontrada.")))?;

        if model.id_estado != input.id_estado
            && !EstadoRepository::new(self.db).exists(input.id_estado).await?
        {
            return Err(AppError::BadRequest(format!(
                "Estado com Id {} não encontrado.",
                input.id_estado
            )));
        }

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CidadeRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Cidade com Id {id} não encontrada."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
