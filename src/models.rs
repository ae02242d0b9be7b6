use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::products::Model as ProductModel;

/// API-facing view of a catalog record. `kind` is stored and serialized as
/// `type`, which is reserved in Rust.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            code: model.code,
            name: model.name,
            category: model.category,
            brand: model.brand,
            kind: model.kind,
            description: model.description,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
