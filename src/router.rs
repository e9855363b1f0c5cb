//! Axum route configuration.
//!
//! Each resource exposes the same five operations: paginated list and create
//! on the collection route, get/update/delete on the item route.

use axum::{routing::get, Router};

use crate::{
    controller::{
        cidade, defeito, defeito_moto, estado, historico_manutencao, localizacao, lora,
        manutencao, moto, rfid, setor, unidade,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/motos", get(moto::list_motos).post(moto::create_moto))
        .route(
            "/motos/{id}",
            get(moto::get_moto_by_id)
                .put(moto::update_moto)
                .delete(moto::delete_moto),
        )
        .route("/setores", get(setor::list_setores).post(setor::create_setor))
        .route(
            "/setores/{id}",
            get(setor::get_setor_by_id)
                .put(setor::update_setor)
                .delete(setor::delete_setor),
        )
        .route(
            "/unidades",
            get(unidade::list_unidades).post(unidade::create_unidade),
        )
        .route(
            "/unidades/{id}",
            get(unidade::get_unidade_by_id)
                .put(unidade::update_unidade)
                .delete(unidade::delete_unidade),
        )
        .route(
            "/cidades",
            get(cidade::list_cidades).post(cidade::create_cidade),
        )
        .route(
            "/cidades/{id}",
            get(cidade::get_cidade_by_id)
                .put(cidade::update_cidade)
                .delete(cidade::delete_cidade),
        )
        .route(
            "/estados",
            get(estado::list_estados).post(estado::create_estado),
        )
        .route(
            "/estados/{id}",
            get(estado::get_estado_by_id)
                .put(estado::update_estado)
                .delete(estado::delete_estado),
        )
        .route(
            "/defeitos",
            get(defeito::list_defeitos).post(defeito::create_defeito),
        )
        .route(
            "/defeitos/{id}",
            get(defeito::get_defeito_by_id)
                .put(defeito::update_defeito)
                .delete(defeito::delete_defeito),
        )
        .route(
            "/defeitos-moto",
            get(defeito_moto::list_defeitos_moto).post(defeito_moto::create_defeito_moto),
        )
        .route(
            "/defeitos-moto/{id}",
            get(defeito_moto::get_defeito_moto_by_id)
                .put(defeito_moto::update_defeito_moto)
                .delete(defeito_moto::delete_defeito_moto),
        )
        .route(
            "/manutencoes",
            get(manutencao::list_manutencoes).post(manutencao::create_manutencao),
        )
        .route(
            "/manutencoes/{id}",
            get(manutencao::get_manutencao_by_id)
                .put(manutencao::update_manutencao)
                .delete(manutencao::delete_manutencao),
        )
        .route(
            "/historicos",
            get(historico_manutencao::list_historicos)
                .post(historico_manutencao::create_historico),
        )
        .route(
            "/historicos/{id}",
            get(historico_manutencao::get_historico_by_id)
                .put(historico_manutencao::update_historico)
                .delete(historico_manutencao::delete_historico),
        )
        .route(
            "/localizacoes",
            get(localizacao::list_localizacoes).post(localizacao::create_localizacao),
        )
        .route(
            "/localizacoes/{id}",
            get(localizacao::get_localizacao_by_id)
                .put(localizacao::update_localizacao)
                .delete(localizacao::delete_localizacao),
        )
        .route("/lora", get(lora::list_loras).post(lora::create_lora))
        .route(
            "/lora/{id}",
            get(lora::get_lora_by_id)
                .put(lora::update_lora)
                .delete(lora::delete_lora),
        )
        .route("/rfid", get(rfid::list_rfids).post(rfid::create_rfid))
        .route(
            "/rfid/{id}",
            get(rfid::get_rfid_by_id)
                .put(rfid::update_rfid)
                .delete(rfid::delete_rfid),
        )
}
