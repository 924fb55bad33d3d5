use actix_web::http::StatusCode;
use actix_web::{error, middleware, web, HttpResponse, ResponseError, Result as ActixResult};
use anyhow::Context;
use chrono::Local;
use colored::Colorize;

use crate::documentos;
use crate::error::DocumentError;
use crate::models::{DocumentoRequest, GeracaoRequest};
use crate::ui;

impl ResponseError for DocumentError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let DocumentError::Unexpected(detalhe) = self {
            log::error!("Falha inesperada: {}", detalhe);
        }
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "erro": self.to_string()
        }))
    }
}

pub async fn validar_documento(request: web::Json<DocumentoRequest>) -> ActixResult<HttpResponse> {
    let documento = documentos::validar(&request)?;
    Ok(HttpResponse::Ok().json(documento))
}

pub async fn gerar_documento(request: web::Json<GeracaoRequest>) -> ActixResult<HttpResponse> {
    let documento = documentos::gerar(&request)?;
    Ok(HttpResponse::Ok().json(documento))
}

async fn health_check() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "mensagem": "API de documentos está funcionando"
    })))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let resposta = HttpResponse::BadRequest().json(serde_json::json!({
            "erro": format!("Requisição inválida: {}", err)
        }));
        error::InternalError::from_response(err, resposta).into()
    })
}

/// Rotas da API, compartilhadas entre o servidor e os testes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/api/documentos", web::post().to(validar_documento))
        .route("/api/documentos/gerar", web::post().to(gerar_documento))
        .route("/health", web::get().to(health_check));
}

pub async fn start_server(host: &str, port: u16, workers: Option<usize>) -> anyhow::Result<()> {
    let address = format!("{}:{}", host, port);
    let workers = workers.unwrap_or_else(num_cpus::get);

    ui::print_header("🌐 Servidor API REST");
    ui::print_info(&format!("Hora de início: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
    ui::print_success(&format!("Servidor iniciando em http://{} ({} workers)", address, workers));
    ui::print_info("Endpoints disponíveis:");
    println!("  {} POST /api/documentos        - Valida um CPF ou CNPJ", "•".cyan());
    println!("  {} POST /api/documentos/gerar  - Gera um CPF ou CNPJ válido", "•".cyan());
    println!("  {} GET  /health                - Verifica status do servidor", "•".cyan());
    ui::print_verbose(&format!(
        "Exemplo: curl -X POST http://{}/api/documentos -H 'Content-Type: application/json' -d '{{\"tipo\":\"CPF\",\"digitos\":\"529.982.247-25\"}}'",
        address
    ));
    ui::print_separator();

    actix_web::HttpServer::new(|| {
        actix_web::App::new()
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .workers(workers)
    .bind(&address)
    .with_context(|| format!("Falha ao abrir {}", address))?
    .run()
    .await?;

    Ok(())
}
