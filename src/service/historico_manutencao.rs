use sea_orm::DatabaseConnection;

use crate::{
    data::{
        historico_manutencao::HistoricoManutencaoRepository, moto::MotoRepository,
        setor::SetorRepository,
    },
    error::AppError,
    model::{
        historico_manutencao::{
            HistoricoManutencaoDto, HistoricoManutencaoFilter, HistoricoManutencaoInput, BASE_PATH,
        },
        page::{page_links, PageRequest, PaginatedResponse},
    },
};

pub struct HistoricoManutencaoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistoricoManutencaoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: HistoricoManutencaoFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<HistoricoManutencaoDto>, AppError> {
        let repo = HistoricoManutencaoRepository::new(self.db);
        let (models, total) = repo.get_paginated(&filter, &page).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut dto = HistoricoManutencaoDto::from_entity(model);
                dto.links.retain(|link| link.rel != "all");
                dto
            })
            .collect();

        let links = page_links(BASE_PATH, &page, page.total_pages(total), &filter);

        Ok(PaginatedResponse::new(data, &page, total, links))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<HistoricoManutencaoDto, AppError> {
        let model = HistoricoManutencaoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Histórico com Id {id} não encontrado."))
            })?;

        Ok(HistoricoManutencaoDto::from_entity(model))
    }

    /// Creates a movement entry after validating the motorcycle, origin
    /// sector, and destination sector, in that order.
    pub async fn create(
        &self,
        input: HistoricoManutencaoInput,
    ) -> Result<HistoricoManutencaoDto, AppError> {
        self.validate_references(&input).await?;

        let model = HistoricoManutencaoRepository::new(self.db)
            .create(input)
            .await?;

        Ok(HistoricoManutencaoDto::from_entity(model))
    }

    /// Updates an existing movement entry. Each reference is re-validated
    /// only when the payload changes it.
    pub async fn update(&self, id: i32, input: HistoricoManutencaoInput) -> Result<(), AppError> {
        let repo = HistoricoManutencaoRepository::new(self.db);

        let model = repo.get_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Histórico com Id {id} não encontrado."))
        })?;

        if model.id_moto != input.id_moto
            && !MotoRepository::new(self.db).exists(input.id_moto).await?
        {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {} não encontrada.",
                input.id_moto
            )));
        }

        let setor_repo = SetorRepository::new(self.db);

        if model.id_setor_origem != input.id_setor_origem
            && !setor_repo.exists(input.id_setor_origem).await?
        {
            return Err(AppError::BadRequest(format!(
                "Setor de Origem com Id {} não encontrado.",
                input.id_setor_origem
            )));
        }
        if model.id_setor_destino != input.id_setor_destino
            && !setor_repo.exists(input.id_setor_destino).await?
        {
            return Err(AppError::BadRequest(format!(
                "Setor de Destino com Id {} não encontrado.",
                input.id_setor_destino
            )));
        }

        repo.update(model, input).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = HistoricoManutencaoRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Histórico com Id {id} não encontrado."
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    async fn validate_references(&self, input: &HistoricoManutencaoInput) -> Result<(), AppError> {
        if !MotoRepository::new(self.db).exists(input.id_moto).await? {
            return Err(AppError::BadRequest(format!(
                "Moto com Id {} não encontrada.",
                input.id_moto
            )));
        }

        let setor_repo = SetorRepository::new(self.db);

        if !setor_repo.exists(input.id_setor_origem).await? {
            return Err(AppError::BadRequest(format!(
                "Setor de Origem com Id {} não encontrado.",
                input.id_setor_origem
            )));
        }
        if !setor_repo.exists(input.id_setor_destino).await? {
            return Err(AppError::BadRequest(format!(
                "Setor de Destino com Id {} não encontrado.",
                input.id_setor_destino
            )));
        }

        Ok(())
    }
}
