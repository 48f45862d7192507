// src/sheets/codec.rs
//
// Conversão entre a linha crua da planilha (10 células heterogêneas, colunas A:J)
// e o Product estruturado. A decodificação NUNCA falha: célula ausente ou ilegível
// degrada para um valor padrão, porque um dashboard parcialmente populado é melhor
// do que um dashboard travado por uma linha ruim. A degradação não é muda: cada
// linha degradada gera um `tracing::warn!` com os campos afetados.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::models::product::Product;

pub const SHEET_NAME: &str = "Productos";
pub const FULL_RANGE: &str = "Productos!A:J";
pub const HEADER_RANGE: &str = "Productos!A1:J1";

// gid da aba dentro da planilha; assumimos a primeira aba.
pub const SHEET_GID: i64 = 0;

// Rótulos da linha 1, na ordem fixa das colunas A..J.
pub const HEADERS: [&str; 10] = [
    "ID",
    "Nombre",
    "Código de Barras",
    "Categoría",
    "Precio Costo",
    "Precio Venta",
    "Stock",
    "Stock Mínimo",
    "Fecha Agregado",
    "Última Actualización",
];

// Intervalo de exatamente uma linha de dados, ex.: "Productos!A5:J5".
pub fn row_range(row_number: usize) -> String {
    format!("{SHEET_NAME}!A{row_number}:J{row_number}")
}

// `index` é a posição zero-based da linha DENTRO dos dados (sem o cabeçalho).
pub fn decode_row(row: &[Value], index: usize) -> Product {
    let mut degraded: Vec<&'static str> = Vec::new();

    let raw_id = cell_text(row, 0);
    let id = if raw_id.is_empty() {
        // Placeholder posicional para linha sem id; melhor do que descartá-la.
        format!("product_{index}")
    } else {
        raw_id
    };

    let product = Product {
        id,
        name: cell_text(row, 1),
        barcode: cell_text(row, 2),
        category: cell_text(row, 3),
        cost_price: cell_decimal(row, 4, Decimal::ZERO, &mut degraded, "costPrice"),
        sell_price: cell_decimal(row, 5, Decimal::ZERO, &mut degraded, "sellPrice"),
        stock: cell_int(row, 6, 0, &mut degraded, "stock"),
        min_stock: cell_int(row, 7, 5, &mut degraded, "minStock"),
        date_added: cell_date(row, 8, &mut degraded, "dateAdded"),
        last_updated: cell_date(row, 9, &mut degraded, "lastUpdated"),
    };

    if !degraded.is_empty() {
        // +2: índice zero-based + linha de cabeçalho = número real na planilha.
        tracing::warn!(
            linha = index + 2,
            campos = ?degraded,
            "Células ilegíveis na planilha, usando valores padrão"
        );
    }

    product
}

// Produz as 10 células na ordem fixa das colunas. Datas viram ISO-8601 ordenável
// (milissegundos, UTC "Z"); números saem como números, sem formatação de moeda.
pub fn encode_row(product: &Product) -> Vec<Value> {
    vec![
        json!(product.id),
        json!(product.name),
        json!(product.barcode),
        json!(product.category),
        json!(product.cost_price),
        json!(product.sell_price),
        json!(product.stock),
        json!(product.min_stock),
        json!(iso(&product.date_added)),
        json!(iso(&product.last_updated)),
    ]
}

pub fn header_row() -> Vec<Value> {
    HEADERS.iter().map(|h| json!(h)).collect()
}

fn iso(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// --- Leitura de células ---
// Ausente/vazio degrada em silêncio; presente mas ilegível degrada com aviso.

fn cell_text(row: &[Value], idx: usize) -> String {
    match row.get(idx) {
        Some(Value::String(s)) => s.clone(),
        // A API pode devolver célula numérica crua (ex.: código de barras).
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn cell_decimal(
    row: &[Value],
    idx: usize,
    default: Decimal,
    degraded: &mut Vec<&'static str>,
    field: &'static str,
) -> Decimal {
    match row.get(idx) {
        None | Some(Value::Null) => default,
        Some(Value::Number(n)) => n.to_string().parse().unwrap_or_else(|_| {
            degraded.push(field);
            default
        }),
        Some(Value::String(s)) if s.trim().is_empty() => default,
        Some(Value::String(s)) => s.trim().parse().unwrap_or_else(|_| {
            degraded.push(field);
            default
        }),
        Some(_) => {
            degraded.push(field);
            default
        }
    }
}

fn cell_int(
    row: &[Value],
    idx: usize,
    default: i64,
    degraded: &mut Vec<&'static str>,
    field: &'static str,
) -> i64 {
    match row.get(idx) {
        None | Some(Value::Null) => default,
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_else(|| {
                degraded.push(field);
                default
            }),
        Some(Value::String(s)) if s.trim().is_empty() => default,
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or_else(|| {
                    degraded.push(field);
                    default
                })
        }
        Some(_) => {
            degraded.push(field);
            default
        }
    }
}

fn cell_date(
    row: &[Value],
    idx: usize,
    degraded: &mut Vec<&'static str>,
    field: &'static str,
) -> DateTime<Utc> {
    match row.get(idx) {
        Some(Value::String(s)) if !s.trim().is_empty() => {
            DateTime::parse_from_rfc3339(s.trim())
                .map(|d| d.with_timezone(&Utc))
                .unwrap_or_else(|_| {
                    degraded.push(field);
                    Utc::now()
                })
        }
        _ => Utc::now(),
    }
}
