use sea_orm::DatabaseConnection;

use crate::{
    data::defeito::DefeitoRepository,
    error::AppError,
    model::{
        defeito::{DefeitoDto, DefeitoFilter, DefeitoInput, BASE_PATH},
        page::{page_links, PageRequest, PaginatedResponse},
    },
};

/// Catalog entries have no outgoing references, so writes need no
/// referential validation.
pub struct DefeitoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DefeitoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: DefeitoFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<DefeitoDto>, AppError> {
        let repo = DefeitoRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = DefeitoDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<DefeitoDto, AppError> {
        let model = DefeitoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Defeito com Id {id} não encontrado.")))?;

        Ok(DefeitoDto::from_entity(model))
    }

    pub async fn create(&self, input: DefeitoInput) -> Result<DefeitoDto, AppError> {
        let model = DefeitoRepository::new(self.db).create(input).await?;

        Ok(DefeitoDto::from_entity(model))
    }

    pub async fn update(&self, id: i32, input: DefeitoInput) -> Result<(), AppError> {
        let repo = DefeitoRepository::new(self.db);

        let model = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Defeito com Id {id} não encontrado.")))?;

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DefeitoRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Defeito com Id {id} não encontrado."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
