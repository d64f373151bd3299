use axum_cart_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::products::{ActiveModel as ProductActive, Column as ProductCol, Entity as Products},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

const CATALOG: [(i32, &str, &str, i64); 3] = [
    (111, "MacBook Air, late 2022", "Boah, cool", 68700),
    (222, "IPhone 14Pro", "Beep Boop", 87000),
    (333, "Dell XPS 13\", Linux Edition", "From Dell but still cool", 99900),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let inserted = seed_products(&orm).await?;
    println!("Seed completed. {inserted} product(s) inserted");
    Ok(())
}

async fn seed_products(orm: &DatabaseConnection) -> anyhow::Result<usize> {
    let mut inserted = 0;
    for (sku, title, description, price) in CATALOG {
        let exists = Products::find()
            .filter(ProductCol::Sku.eq(sku))
            .count(orm)
            .await?
            > 0;
        if exists {
            println!("Skipping SKU {sku}, already present");
            continue;
        }

        ProductActive {
            id: Set(Uuid::new_v4()),
            sku: Set(sku),
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            price_in_euro_cents: Set(price),
        }
        .insert(orm)
        .await?;
        inserted += 1;
    }

    Ok(inserted)
}
