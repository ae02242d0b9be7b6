//! The store gateway: the only module that touches the database. Both the
//! API and web responders consume these operations and do their own
//! presentation, so everything here returns plain domain values and
//! `sea_orm::DbErr`.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::products::ProductPatch,
    entity::products::{ActiveModel, Column, Entity as Products},
    models::Product,
    routes::params::{ListingQuery, SortDirection},
};

/// Fields for a new record, all already validated by the responder.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub kind: Option<String>,
    pub description: String,
}

/// One page of records plus the total count across all pages.
pub async fn find_page(
    orm: &DatabaseConnection,
    query: &ListingQuery,
) -> Result<(Vec<Product>, u64), DbErr> {
    let mut finder = Products::find();
    finder = match query.dir {
        SortDirection::Asc => finder.order_by_asc(query.sort.column()),
        SortDirection::Desc => finder.order_by_desc(query.sort.column()),
    };

    let total = finder.clone().count(orm).await?;

    let rows = finder
        .offset(query.offset())
        .limit(query.size)
        .all(orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    Ok((rows, total))
}

/// Absent is a normal outcome, not an error.
pub async fn find_by_code(
    orm: &DatabaseConnection,
    code: &str,
) -> Result<Option<Product>, DbErr> {
    Products::find()
        .filter(Column::Code.eq(code))
        .one(orm)
        .await
        .map(|found| found.map(Product::from))
}

pub async fn create(orm: &DatabaseConnection, new: NewProduct) -> Result<Product, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        code: Set(new.code),
        name: Set(new.name),
        category: Set(new.category),
        brand: Set(new.brand),
        kind: Set(new.kind),
        description: Set(new.description),
        created_at: NotSet,
    };
    active.insert(orm).await.map(Product::from)
}

/// Apply a partial patch to the record with the given code. Returns the
/// number of rows touched; 0 means no matching record. An empty patch (all
/// submitted values were empty strings) updates nothing and reports zero
/// rows, same as an unknown code.
pub async fn update_by_code(
    orm: &DatabaseConnection,
    code: &str,
    patch: ProductPatch,
) -> Result<u64, DbErr> {
    if patch.is_empty() {
        return Ok(0);
    }

    let mut active = ActiveModel {
        id: NotSet,
        code: NotSet,
        name: NotSet,
        category: NotSet,
        brand: NotSet,
        kind: NotSet,
        description: NotSet,
        created_at: NotSet,
    };
    if let Some(name) = patch.name {
        active.name = Set(name);
    }
    if let Some(category) = patch.category {
        active.category = Set(category);
    }
    if let Some(brand) = patch.brand {
        active.brand = Set(Some(brand));
    }
    if let Some(kind) = patch.kind {
        active.kind = Set(Some(kind));
    }
    if let Some(description) = patch.description {
        active.description = Set(description);
    }

    let result = Products::update_many()
        .set(active)
        .filter(Column::Code.eq(code))
        .exec(orm)
        .await?;
    Ok(result.rows_affected)
}

/// Returns the number of rows removed; 0 means no matching record.
pub async fn delete_by_code(orm: &DatabaseConnection, code: &str) -> Result<u64, DbErr> {
    let result = Products::delete_many()
        .filter(Column::Code.eq(code))
        .exec(orm)
        .await?;
    Ok(result.rows_affected)
}
