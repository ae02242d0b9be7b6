use product_catalog::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    services::product_service::{self, NewProduct},
};
use sea_orm::DatabaseConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let seeded = seed_products(&orm).await?;
    println!("Seed completed. {seeded} products inserted.");
    Ok(())
}

/// Insert the sample catalog, skipping codes that already exist so the seed
/// can run repeatedly.
async fn seed_products(orm: &DatabaseConnection) -> anyhow::Result<usize> {
    let samples = [
        ("P001", "Cordless Drill", "tools", Some("Makira"), Some("power"), "18V cordless drill with two batteries"),
        ("P002", "Claw Hammer", "tools", Some("Stanlee"), Some("hand"), "16oz curved claw hammer"),
        ("P003", "Garden Hose", "garden", None, None, "25m expandable garden hose"),
        ("P004", "LED Work Light", "lighting", Some("Lumina"), Some("portable"), "Rechargeable 2000lm work light"),
        ("P005", "Paint Roller Set", "decorating", None, Some("kit"), "Roller, tray and two spare sleeves"),
    ];

    let mut inserted = 0;
    for (code, name, category, brand, kind, description) in samples {
        if product_service::find_by_code(orm, code).await?.is_some() {
            println!("Skipping {code}, already present");
            continue;
        }
        product_service::create(
            orm,
            NewProduct {
                code: code.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                brand: brand.map(str::to_string),
                kind: kind.map(str::to_string),
                description: description.to_string(),
            },
        )
        .await?;
        inserted += 1;
    }

    Ok(inserted)
}
