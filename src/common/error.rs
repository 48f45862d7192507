use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cada fronteira converte sua falha para cá; nenhum erro atravessa
// um componente sem virar uma variante tipada.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Produto não encontrado")]
    ProductNotFound,

    #[error("Leitura do código de barras falhou: {0}")]
    ScanFailed(String),

    // Falha de transporte ao falar com a API da planilha
    #[error("Erro ao comunicar com a planilha: {0}")]
    SheetsError(#[from] reqwest::Error),

    // A API respondeu, mas com um status que não esperávamos
    #[error("Resposta inesperada da planilha: status {0}")]
    SheetsStatus(reqwest::StatusCode),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "Produto não encontrado.".to_string())
            }
            AppError::ScanFailed(reason) => (StatusCode::BAD_REQUEST, reason),

            // Todos os outros erros (SheetsError, SheetsStatus, InternalServerError)
            // viram 500. O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
