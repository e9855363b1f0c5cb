use sea_orm::DatabaseConnection;

use crate::{
    data::{moto::MotoRepository, rfid::RfidRepository},
    error::AppError,
    model::{
        page::{page_links, PageRequest, PaginatedResponse},
        rfid::{RfidDto, RfidFilter, RfidInput, BASE_PATH},
    },
};

pub struct RfidService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RfidService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: RfidFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<RfidDto>, AppError> {
        let repo = RfidRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = RfidDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<RfidDto, AppError> {
        let model = RfidRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rfid com Id {id} não encontrado.")))?;

        Ok(RfidDto::from_entity(model))
    }

    /// Creates a tag after validating that the referenced motorcycle exists.
    pub async fn create(&self, input: RfidInput) -> Result<RfidDto, AppError> {
        if !MotoRepository::new(self.db).exists(input.id_moto).await? {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {} não encontrada.",
                input.id_moto
            )));
        }

        let model = RfidRepository::new(self.db).create(input).await?;

        Ok(RfidDto::from_entity(model))
    }

    /// Updates an existing tag. The motorcycle reference is re-validated
    /// only when the payload changes it.
    pub async fn update(&self, id: i32, input: RfidInput) -> Result<(), AppError> {
        let repo = RfidRepository::new(self.db);

        let model = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rfid com Id {id} não encontrado.")))?;

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
        let repo = RfidRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Rfid com Id {id} não encontrado."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
