// src/sheets/client.rs
//
// A fronteira com o serviço remoto de planilha. O resto da aplicação só conhece
// o trait `RowStore`; a implementação concreta fala com a API REST v4 do Google
// Sheets. Credenciamento é preocupação externa: recebemos um bearer token pronto.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::common::error::AppError;

// As quatro operações que a aplicação precisa do lado remoto.
// Sem lock, sem token de versão: é a semântica crua da planilha.
#[async_trait]
pub trait RowStore: Send + Sync {
    async fn read_range(&self, range: &str) -> Result<Vec<Vec<Value>>, AppError>;

    async fn append_row(&self, range: &str, row: Vec<Value>) -> Result<(), AppError>;

    async fn update_range(&self, range: &str, rows: Vec<Vec<Value>>) -> Result<(), AppError>;

    // Remoção estrutural: as linhas seguintes sobem uma posição.
    // Índices zero-based, fim exclusivo, como na API do Sheets.
    async fn delete_rows(
        &self,
        sheet_gid: i64,
        start_index: i64,
        end_index: i64,
    ) -> Result<(), AppError>;
}

const BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Clone)]
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    spreadsheet_id: String,
    access_token: String,
}

// Corpo de resposta de values.get; `values` some quando o intervalo está vazio.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl GoogleSheetsClient {
    pub fn new(spreadsheet_id: String, access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            spreadsheet_id,
            access_token,
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!("{BASE_URL}/{}/values/{range}", self.spreadsheet_id)
    }

    fn ensure_ok(response: &reqwest::Response) -> Result<(), AppError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AppError::SheetsStatus(status))
        }
    }
}

#[async_trait]
impl RowStore for GoogleSheetsClient {
    async fn read_range(&self, range: &str) -> Result<Vec<Vec<Value>>, AppError> {
        let response = self
            .http
            .get(self.values_url(range))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        Self::ensure_ok(&response)?;

        let body: ValueRange = response.json().await?;
        Ok(body.values)
    }

    async fn append_row(&self, range: &str, row: Vec<Value>) -> Result<(), AppError> {
        let url = format!("{}:append", self.values_url(range));
        let response = self
            .http
            .post(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&self.access_token)
            .json(&json!({ "values": [row] }))
            .send()
            .await?;
        Self::ensure_ok(&response)
    }

    async fn update_range(&self, range: &str, rows: Vec<Vec<Value>>) -> Result<(), AppError> {
        let response = self
            .http
            .put(self.values_url(range))
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&self.access_token)
            .json(&json!({ "values": rows }))
            .send()
            .await?;
        Self::ensure_ok(&response)
    }

    async fn delete_rows(
        &self,
        sheet_gid: i64,
        start_index: i64,
        end_index: i64,
    ) -> Result<(), AppError> {
        let url = format!("{BASE_URL}/{}:batchUpdate", self.spreadsheet_id);
        let body = json!({
            "requests": [{
                "deleteDimension": {
                    "range": {
                        "sheetId": sheet_gid,
                        "dimension": "ROWS",
                        "startIndex": start_index,
                        "endIndex": end_index,
                    }
                }
            }]
        });
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;
        Self::ensure_ok(&response)
    }
}
