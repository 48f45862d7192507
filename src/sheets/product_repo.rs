// src/sheets/product_repo.rs
//
// O adaptador entre o modelo de produto e a tabela posicional remota.
// Não existe índice secundário: localizar um registro é sempre ler a tabela
// inteira e varrer pelo id decodificado ("linear locate"). Atualização e remoção
// reescrevem/removem a linha pela posição encontrada, sem token de concorrência:
// dois escritores simultâneos podem se atropelar. Propriedade conhecida do
// sistema, documentada nos testes, não um contrato a fortalecer aqui.

use std::sync::Arc;

use chrono::Utc;

use crate::common::error::AppError;
use crate::models::product::{NewProduct, Product, ProductUpdate};
use crate::sheets::client::RowStore;
use crate::sheets::codec;

#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn RowStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    // Toda a tabela, sem a linha de cabeçalho. Planilha com só o cabeçalho
    // (ou nada) vira lista vazia.
    pub async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        let rows = self.store.read_range(codec::FULL_RANGE).await?;
        if rows.len() <= 1 {
            return Ok(Vec::new());
        }

        Ok(rows[1..]
            .iter()
            .enumerate()
            .map(|(index, row)| codec::decode_row(row, index))
            .collect())
    }

    // Atribui id baseado no relógio (ordenável para humanos; não é garantia de
    // unicidade contra escritores externos), carimba as datas e anexa no fim.
    pub async fn append(&self, new: NewProduct) -> Result<Product, AppError> {
        let now = Utc::now();
        let product = Product {
            id: now.timestamp_millis().to_string(),
            name: new.name,
            barcode: new.barcode,
            category: new.category,
            cost_price: new.cost_price,
            sell_price: new.sell_price,
            stock: new.stock,
            min_stock: new.min_stock,
            date_added: now,
            last_updated: now,
        };

        self.store
            .append_row(codec::FULL_RANGE, codec::encode_row(&product))
            .await?;

        Ok(product)
    }

    pub async fn replace(&self, id: &str, changes: ProductUpdate) -> Result<Product, AppError> {
        let (position, mut product) = self.locate(id).await?;

        changes.apply_to(&mut product);
        product.last_updated = Utc::now();

        // +2: posição zero-based nos dados + linha de cabeçalho.
        let row_number = position + 2;
        self.store
            .update_range(&codec::row_range(row_number), vec![codec::encode_row(&product)])
            .await?;

        Ok(product)
    }

    pub async fn remove(&self, id: &str) -> Result<(), AppError> {
        let (position, _) = self.locate(id).await?;

        // deleteDimension é zero-based com fim exclusivo.
        let row_number = position + 2;
        self.store
            .delete_rows(codec::SHEET_GID, (row_number - 1) as i64, row_number as i64)
            .await
    }

    // Escreve os rótulos em espanhol na linha 1.
    pub async fn init_sheet(&self) -> Result<(), AppError> {
        self.store
            .update_range(codec::HEADER_RANGE, vec![codec::header_row()])
            .await
    }

    async fn locate(&self, id: &str) -> Result<(usize, Product), AppError> {
        self.list_all()
            .await?
            .into_iter()
            .enumerate()
            .find(|(_, product)| product.id == id)
            .ok_or(AppError::ProductNotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use rust_decimal::Decimal;

    use super::*;
    use crate::sheets::client::fake::FakeSheet;

    fn product(id: &str, name: &str, stock: i64) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            barcode: format!("{id}00"),
            category: "Ficción".into(),
            cost_price: Decimal::from(10),
            sell_price: Decimal::from(13),
            stock,
            min_stock: 5,
            date_added: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
            last_updated: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
        }
    }

    fn repo_over(sheet: FakeSheet) -> (ProductRepository, Arc<FakeSheet>) {
        let store = Arc::new(sheet);
        (ProductRepository::new(store.clone()), store)
    }

    #[tokio::test]
    async fn planilha_vazia_ou_so_com_cabecalho_vira_lista_vazia() {
        let (repo, _) = repo_over(FakeSheet::empty());
        assert!(repo.list_all().await.unwrap().is_empty());

        let (repo, _) = repo_over(FakeSheet::with_header());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn listagem_exclui_o_cabecalho_e_preserva_a_ordem() {
        let (repo, _) = repo_over(FakeSheet::with_products(&[
            product("1", "Quijote", 0),
            product("2", "Atlas", 10),
        ]));

        let products = repo.list_all().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Quijote");
        assert_eq!(products[1].name, "Atlas");
    }

    #[tokio::test]
    async fn append_atribui_id_e_carimba_as_datas() {
        let (repo, store) = repo_over(FakeSheet::with_header());

        let created = repo
            .append(NewProduct {
                name: "Quijote".into(),
                barcode: "111".into(),
                category: "Ficción".into(),
                cost_price: Decimal::from(10),
                sell_price: Decimal::from(13),
                stock: 3,
                min_stock: 5,
            })
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.date_added, created.last_updated);
        assert_eq!(store.row_count(), 2);

        let listed = repo.list_all().await.unwrap();
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].sell_price, Decimal::from(13));
    }

    #[tokio::test]
    async fn replace_mescla_a_atualizacao_sobre_o_registro_atual() {
        let (repo, _) = repo_over(FakeSheet::with_products(&[
            product("1", "Quijote", 3),
            product("2", "Atlas", 10),
        ]));

        let changes = ProductUpdate {
            stock: Some(8),
            ..Default::default()
        };
        let updated = repo.replace("2", changes).await.unwrap();

        assert_eq!(updated.stock, 8);
        assert_eq!(updated.name, "Atlas");
        assert!(updated.last_updated > updated.date_added);

        // A linha certa foi sobrescrita; a vizinha ficou intacta.
        let listed = repo.list_all().await.unwrap();
        assert_eq!(listed[0].stock, 3);
        assert_eq!(listed[1].stock, 8);
    }

    #[tokio::test]
    async fn replace_de_id_desconhecido_falha_e_nao_toca_na_tabela() {
        let (repo, store) = repo_over(FakeSheet::with_products(&[product("1", "Quijote", 3)]));
        let before = store.snapshot();

        let result = repo.replace("999", ProductUpdate::default()).await;

        assert!(matches!(result, Err(AppError::ProductNotFound)));
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn remove_apaga_a_linha_e_desloca_as_seguintes() {
        let (repo, store) = repo_over(FakeSheet::with_products(&[
            product("1", "Quijote", 3),
            product("2", "Atlas", 10),
            product("3", "Cosmos", 1),
        ]));

        repo.remove("2").await.unwrap();

        assert_eq!(store.row_count(), 3); // cabeçalho + 2 produtos
        let listed = repo.list_all().await.unwrap();
        assert_eq!(listed[0].id, "1");
        assert_eq!(listed[1].id, "3");
    }

    #[tokio::test]
    async fn remove_de_id_desconhecido_falha_com_not_found() {
        let (repo, _) = repo_over(FakeSheet::with_products(&[product("1", "Quijote", 3)]));
        let result = repo.remove("999").await;
        assert!(matches!(result, Err(AppError::ProductNotFound)));
    }

    // Fraqueza estrutural conhecida do endereçamento por posição: uma posição
    // calculada antes de outra remoção aponta para a linha errada depois que a
    // tabela desloca. Este teste documenta o defeito, não o corrige.
    #[tokio::test]
    async fn posicao_defasada_apos_remocao_atinge_a_linha_vizinha() {
        let (repo, store) = repo_over(FakeSheet::with_products(&[
            product("1", "Quijote", 3),
            product("2", "Atlas", 10),
            product("3", "Cosmos", 1),
            product("4", "Rayuela", 6),
        ]));

        // Uma sessão concorrente localizou "3" antes da remoção de "2":
        // naquele retrato, "3" estava na linha 4 da planilha.
        let stale_row_of_3 = 4_i64;

        repo.remove("2").await.unwrap();

        // A sessão aplica a posição defasada direto no store, sem re-localizar.
        store
            .delete_rows(codec::SHEET_GID, stale_row_of_3 - 1, stale_row_of_3)
            .await
            .unwrap();

        // A intenção era remover "2" e "3"; sobraram "1" e "3", e a vizinha
        // inocente "4" foi destruída pela posição defasada.
        let listed = repo.list_all().await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
