// src/services/catalog_service.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::product::{NewProduct, Product, ProductUpdate},
    services::pricing,
    sheets::ProductRepository,
};

#[derive(Clone)]
pub struct CatalogService {
    repo: ProductRepository,
}

impl CatalogService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    // Listagem "fail-open": falha de leitura remota degrada para inventário
    // vazio com o erro registrado à parte. Dado obsoleto/vazio é preferível a
    // derrubar a tela inteira por uma falha transitória de rede.
    pub async fn list_products(&self) -> Vec<Product> {
        match self.repo.list_all().await {
            Ok(products) => products,
            Err(err) => {
                tracing::warn!("Falha ao ler a planilha, exibindo inventário vazio: {err}");
                Vec::new()
            }
        }
    }

    // O preço de venda pode vir pronto do chamador; na ausência, é derivado
    // do custo com a margem vigente, passada explicitamente até aqui.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_product(
        &self,
        name: &str,
        barcode: &str,
        category: &str,
        cost_price: Decimal,
        sell_price: Option<Decimal>,
        stock: i64,
        min_stock: i64,
        profit_margin: Decimal,
    ) -> Result<Product, AppError> {
        let sell_price =
            sell_price.unwrap_or_else(|| pricing::sell_price(cost_price, profit_margin));

        self.repo
            .append(NewProduct {
                name: name.to_string(),
                barcode: barcode.to_string(),
                category: category.to_string(),
                cost_price,
                sell_price,
                stock,
                min_stock,
            })
            .await
    }

    // Custo alterado sem preço de venda explícito re-deriva o preço com a
    // margem atual. Produtos não editados mantêm o preço calculado na época.
    pub async fn update_product(
        &self,
        id: &str,
        mut changes: ProductUpdate,
        profit_margin: Decimal,
    ) -> Result<Product, AppError> {
        if changes.sell_price.is_none() {
            if let Some(cost_price) = changes.cost_price {
                changes.sell_price = Some(pricing::sell_price(cost_price, profit_margin));
            }
        }

        self.repo.replace(id, changes).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), AppError> {
        self.repo.remove(id).await
    }

    pub async fn init_sheet(&self) -> Result<(), AppError> {
        self.repo.init_sheet().await
    }

    // Resolução de código escaneado/digitado. Aqui a falha remota propaga:
    // quem escaneia precisa saber que a consulta não aconteceu.
    pub async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, AppError> {
        let products = self.repo.list_all().await?;
        Ok(products.into_iter().find(|p| p.barcode == barcode))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::sheets::client::fake::FakeSheet;

    fn service_over(sheet: FakeSheet) -> (CatalogService, Arc<FakeSheet>) {
        let store = Arc::new(sheet);
        (
            CatalogService::new(ProductRepository::new(store.clone())),
            store,
        )
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn falha_de_leitura_degrada_para_lista_vazia() {
        let (service, store) = service_over(FakeSheet::with_header());
        store.fail_next_calls(true);

        // Sem pânico e sem erro: lista vazia, aviso vai para o log.
        assert!(service.list_products().await.is_empty());
    }

    #[tokio::test]
    async fn criacao_sem_preco_deriva_da_margem_vigente() {
        let (service, _) = service_over(FakeSheet::with_header());

        let created = service
            .create_product("Quijote", "111", "Ficción", dec("10"), None, 3, 5, dec("30"))
            .await
            .unwrap();

        assert_eq!(created.sell_price, dec("13"));
    }

    #[tokio::test]
    async fn preco_explicito_do_chamador_e_respeitado() {
        let (service, _) = service_over(FakeSheet::with_header());

        let created = service
            .create_product("Quijote", "111", "Ficción", dec("10"), Some(dec("15")), 3, 5, dec("30"))
            .await
            .unwrap();

        assert_eq!(created.sell_price, dec("15"));
    }

    #[tokio::test]
    async fn mudanca_de_custo_rederiva_o_preco_na_atualizacao() {
        let (service, _) = service_over(FakeSheet::with_header());
        let created = service
            .create_product("Quijote", "111", "Ficción", dec("10"), None, 3, 5, dec("30"))
            .await
            .unwrap();

        let updated = service
            .update_product(
                &created.id,
                ProductUpdate {
                    cost_price: Some(dec("20")),
                    ..Default::default()
                },
                dec("50"),
            )
            .await
            .unwrap();

        // Margem vigente agora é 50%; o preço antigo não é preservado.
        assert_eq!(updated.sell_price, dec("30"));
    }

    #[tokio::test]
    async fn atualizacao_sem_custo_preserva_o_preco_antigo() {
        let (service, _) = service_over(FakeSheet::with_header());
        let created = service
            .create_product("Quijote", "111", "Ficción", dec("10"), None, 3, 5, dec("30"))
            .await
            .unwrap();

        let updated = service
            .update_product(
                &created.id,
                ProductUpdate {
                    stock: Some(9),
                    ..Default::default()
                },
                dec("50"),
            )
            .await
            .unwrap();

        // A margem global mudou, mas o preço salvo permanece o da época.
        assert_eq!(updated.sell_price, dec("13"));
    }

    #[tokio::test]
    async fn busca_por_codigo_de_barras() {
        let (service, _) = service_over(FakeSheet::with_header());
        service
            .create_product("Atlas", "222", "Ciencia", dec("20"), None, 10, 5, dec("30"))
            .await
            .unwrap();

        let found = service.find_by_barcode("222").await.unwrap();
        assert_eq!(found.unwrap().name, "Atlas");

        assert!(service.find_by_barcode("999").await.unwrap().is_none());
    }
}
