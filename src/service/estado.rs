use sea_orm::DatabaseConnection;

use crate::{
    data::estado::EstadoRepository,
    error::AppError,
    model::{
        estado::{EstadoDto, EstadoFilter, EstadoInput, BASE_PATH},
        page::{page_links, PageRequest, PaginatedResponse},
    },
};

/// States have no outgoing references, so writes need no referential
/// validation.
pub struct EstadoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EstadoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: EstadoFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<EstadoDto>, AppError> {
        let repo = EstadoRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = EstadoDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<EstadoDto, AppError> {
        let model = EstadoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Estado com Id {id} não encontrado.")))?;

        Ok(EstadoDto::from_entity(model))
    }

    pub async fn create(&self, input: EstadoInput) -> Result<EstadoDto, AppError> {
        let model = EstadoRepository::new(self.db).create(input).await?;

        Ok(EstadoDto::from_entity(model))
    }

    pub async fn update(&self, id: i32, input: EstadoInput) -> Result<(), AppError> {
        let repo = EstadoRepository::new(self.db);

        let model = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Estado com Id {id} não encontrado.")))?;

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = EstadoRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Estado com Id {id} não encontrado."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
