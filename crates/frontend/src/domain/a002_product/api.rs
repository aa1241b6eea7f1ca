use contracts::domain::a002_product::{
    Card, CardUpdate, CreateProductRequest, OtherProduct, OtherProductDto, Product, ProductUpdate,
};
use contracts::enums::ProductType;

use crate::shared::api_utils::{api_url, delete, get_json, send_json, ApiError, Method};

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_json(&api_url("/products")).await
}

pub async fn create_product(request: &CreateProductRequest) -> Result<serde_json::Value, ApiError> {
    send_json(Method::Post, &api_url("/products"), request).await
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    delete(&api_url(&format!("/products/{}", id))).await
}

/// Deletes one by one; returns how many deletions failed
pub async fn delete_products(ids: &[String]) -> usize {
    let mut failed = 0;
    for id in ids {
        if let Err(e) = delete_product(id).await {
            log::error!("Erro ao excluir produto {}: {}", id, e);
            failed += 1;
        }
    }
    failed
}

/// What the edit dialog changes besides the base product
#[derive(Debug, Clone, PartialEq)]
pub enum DetailUpdate {
    Card { id: String, body: CardUpdate },
    Other { id: String, body: OtherProductDto },
    None,
}

impl DetailUpdate {
    /// Card fields left blank keep the stored value; other product
    /// fields are sent as typed
    pub fn for_product(original: &Product, edited_card: &Card, edited_other: &OtherProduct) -> Self {
        if let Some(card) = &original.card {
            return match &card.id {
                Some(id) => DetailUpdate::Card {
                    id: id.clone(),
                    body: CardUpdate::merge(card, edited_card),
                },
                None => DetailUpdate::None,
            };
        }
        if let Some(other) = &original.other_product {
            let Some(id) = other.id.clone() else {
                return DetailUpdate::None;
            };
            let product_type = other
                .product_type
                .as_deref()
                .and_then(ProductType::from_code)
                .unwrap_or_else(|| original.effective_type());
            let text = |v: &Option<String>| v.as_deref().unwrap_or_default().trim().to_string();
            return DetailUpdate::Other {
                id,
                body: OtherProductDto {
                    product_type,
                    nationality: text(&edited_other.nationality),
                    package_contents: text(&edited_other.package_contents),
                    extra_info: text(&edited_other.extra_info),
                },
            };
        }
        DetailUpdate::None
    }
}

/// `PUT /products/{id}` followed by the card or other product record
pub async fn update_product(
    id: &str,
    update: &ProductUpdate,
    detail: &DetailUpdate,
) -> Result<(), ApiError> {
    send_json::<_, serde_json::Value>(Method::Put, &api_url(&format!("/products/{}", id)), update)
        .await?;

    match detail {
        DetailUpdate::Card { id, body } => {
            send_json::<_, serde_json::Value>(Method::Put, &api_url(&format!("/cards/{}", id)), body)
                .await?;
        }
        DetailUpdate::Other { id, body } => {
            send_json::<_, serde_json::Value>(
                Method::Put,
                &api_url(&format!("/other-products/{}", id)),
                body,
            )
            .await?;
        }
        DetailUpdate::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::CardCondition;

    fn product() -> Product {
        Product {
            id: "p1".into(),
            name: "Pikachu".into(),
            description: None,
            price: 10.0,
            condition: CardCondition::Mint,
            store_id: Some("s1".into()),
            store_name: None,
            card: None,
            other_product: None,
            stock: None,
            product_type: None,
        }
    }

    #[test]
    fn test_card_update_keeps_blank_fields() {
        let mut p = product();
        p.card = Some(Card {
            id: Some("c1".into()),
            title: Some("Pikachu".into()),
            rarity: Some("Rara".into()),
            ..Default::default()
        });
        let edited = Card {
            title: Some("  ".into()),
            rarity: Some("Comum".into()),
            ..Default::default()
        };
        match DetailUpdate::for_product(&p, &edited, &OtherProduct::default()) {
            DetailUpdate::Card { id, body } => {
                assert_eq!(id, "c1");
                assert_eq!(body.title, "Pikachu");
                assert_eq!(body.rarity, "Comum");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_other_product_update_keeps_type() {
        let mut p = product();
        p.other_product = Some(OtherProduct {
            id: Some("o1".into()),
            product_type: Some("BOOSTER_BOX".into()),
            ..Default::default()
        });
        let edited = OtherProduct {
            nationality: Some(" JP ".into()),
            ..Default::default()
        };
        assert_eq!(
            DetailUpdate::for_product(&p, &Card::default(), &edited),
            DetailUpdate::Other {
                id: "o1".into(),
                body: OtherProductDto {
                    product_type: ProductType::BoosterBox,
                    nationality: "JP".into(),
                    package_contents: String::new(),
                    extra_info: String::new(),
                },
            }
        );
    }

    #[test]
    fn test_plain_product_has_no_detail_update() {
        assert_eq!(
            DetailUpdate::for_product(&product(), &Card::default(), &OtherProduct::default()),
            DetailUpdate::None
        );
    }
}
