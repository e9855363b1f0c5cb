use sea_orm::DatabaseConnection;

use crate::{
    data::{lora::LoraRepository, moto::MotoRepository},
    error::AppError,
    model::{
        lora::{LoraDto, LoraFilter, LoraInput, BASE_PATH},
        page::{page_links, PageRequest, PaginatedResponse},
    },
};

/// LoRa devices may exist unassigned: a missing or zero `moto` in the
/// payload skips motorcycle validation entirely.
pub struct LoraService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoraService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: LoraFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<LoraDto>, AppError> {
        let repo = LoraRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = LoraDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<LoraDto, AppError> {
        let model = LoraRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lora com Id {id} não encontrado.")))?;

        Ok(LoraDto::from_entity(model))
    }

    /// Creates a device. The motorcycle reference is validated only when the
    /// payload assigns one.
    pub async fn create(&self, input: LoraInput) -> Result<LoraDto, AppError> {
        let moto = input.moto_or_zero();

        if moto != 0 && !MotoRepository::new(self.db).exists(moto).await? {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {moto} não encontrada."
            )));
        }

        let model = LoraRepository::new(self.db).create(input).await?;

        Ok(LoraDto::from_entity(model))
    }

    /// Updates an existing device. The motorcycle reference is re-validated
    /// only when the payload changes the assignment to a nonzero value.
    pub async fn update(&self, id: i32, input: LoraInput) -> Result<(), AppError> {
        let repo = LoraRepository::new(self.db);

        let model = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lora com Id {id} não encontrado.")))?;

        let moto = input.moto_or_zero();

        if model.moto != moto && moto != 0 && !MotoRepository::new(self.db).exists(moto).await? {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {moto} não encontrada."
            )));
        }

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = LoraRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Lora com Id {id} não encontrado."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
