//! Seed data script - loads reference data so orders can be created
//!
//! Run with: cargo run --bin seed-data
//!
//! Uses the same configuration as the server (`DATABASE_URL` or
//! `APP__DATABASE_URL`). Creates the schema if needed and inserts states,
//! cities, supermarkets, vendors, purchasing representatives, categories,
//! products, payment methods and two sample orders. Does nothing when
//! reference rows are already present.

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{
    ActiveModelTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};
use tracing::info;

use dairy_sales_api::entities::{
    category, city, order, order_line, payment_method, product, purchasing_representative,
    state, supermarket, vendor,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = dairy_sales_api::config::load_config().context("failed to load configuration")?;
    dairy_sales_api::config::init_tracing(cfg.log_level(), cfg.log_json);

    info!("=== Dairy Sales seed data ===");

    let db = dairy_sales_api::db::establish_connection_from_app_config(&cfg)
        .await
        .context("failed to connect to the database")?;
    dairy_sales_api::db::create_schema(&db).await?;

    let existing = state::Entity::find().count(&db).await?;
    if existing > 0 {
        info!(
            "Reference data already present ({} states); nothing to do",
            existing
        );
        dairy_sales_api::db::close_pool(db).await?;
        return Ok(());
    }

    let txn = db.begin().await?;

    info!("Creating locations...");
    let cities = create_locations(&txn).await?;
    info!("  Created {} cities", cities.len());

    info!("Creating supermarkets and representatives...");
    let supermarkets = create_supermarkets(&txn, &cities).await?;
    let representatives = create_representatives(&txn).await?;
    info!(
        "  Created {} supermarkets, {} representatives",
        supermarkets.len(),
        representatives.len()
    );

    info!("Creating vendors and payment methods...");
    let vendors = create_vendors(&txn).await?;
    let payment_methods = create_payment_methods(&txn).await?;
    info!(
        "  Created {} vendors, {} payment methods",
        vendors.len(),
        payment_methods.len()
    );

    info!("Creating catalog...");
    let products = create_catalog(&txn).await?;
    info!("  Created {} products", products.len());

    info!("Creating sample orders...");
    let order_count = create_orders(
        &txn,
        &vendors,
        &supermarkets,
        &representatives,
        &payment_methods,
        &products,
    )
    .await?;
    info!("  Created {} orders with lines", order_count);

    txn.commit().await?;
    dairy_sales_api::db::close_pool(db).await?;

    info!("=== Seed data complete ===");
    info!("Try: curl http://localhost:{}/orders", cfg.port);

    Ok(())
}

async fn create_locations(txn: &DatabaseTransaction) -> anyhow::Result<Vec<city::Model>> {
    let data = [
        ("Carabobo", &["Valencia", "Puerto Cabello"][..]),
        ("Zulia", &["Maracaibo"][..]),
    ];

    let mut cities = Vec::new();
    for (state_name, city_names) in data {
        let state = state::ActiveModel {
            name: Set(state_name.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        for city_name in city_names {
            let city = city::ActiveModel {
                name: Set(city_name.to_string()),
                state_id: Set(state.id),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            cities.push(city);
        }
    }

    Ok(cities)
}

async fn create_supermarkets(
    txn: &DatabaseTransaction,
    cities: &[city::Model],
) -> anyhow::Result<Vec<supermarket::Model>> {
    let names = ["Central Madeirense", "Excelsior Gama", "Automercado Plaza"];

    let mut created = Vec::new();
    for (name, city) in names.iter().zip(cities.iter().cycle()) {
        let model = supermarket::ActiveModel {
            name: Set(name.to_string()),
            city_id: Set(city.id),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        created.push(model);
    }
    Ok(created)
}

async fn create_representatives(
    txn: &DatabaseTransaction,
) -> anyhow::Result<Vec<purchasing_representative::Model>> {
    let mut created = Vec::new();
    for name in ["Maria Perez", "Jose Rodriguez", "Carmen Gonzalez"] {
        let model = purchasing_representative::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        created.push(model);
    }
    Ok(created)
}

async fn create_vendors(txn: &DatabaseTransaction) -> anyhow::Result<Vec<vendor::Model>> {
    let data = [
        ("Ana Torres", "ana.torres@lacteos.example"),
        ("Luis Mendoza", "luis.mendoza@lacteos.example"),
    ];

    let mut created = Vec::new();
    for (name, email) in data {
        let model = vendor::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        created.push(model);
    }
    Ok(created)
}

async fn create_payment_methods(
    txn: &DatabaseTransaction,
) -> anyhow::Result<Vec<payment_method::Model>> {
    let mut created = Vec::new();
    for name in ["Transferencia", "Efectivo", "Credito 30 dias"] {
        let model = payment_method::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        created.push(model);
    }
    Ok(created)
}

async fn create_catalog(txn: &DatabaseTransaction) -> anyhow::Result<Vec<product::Model>> {
    let catalog = vec![
        (
            "Leches",
            vec![
                ("Leche completa", "Carton 1 L", dec!(1.85)),
                ("Leche descremada", "Carton 1 L", dec!(1.95)),
            ],
        ),
        (
            "Quesos",
            vec![
                ("Queso blanco", "Pieza 1 kg", dec!(6.40)),
                ("Queso mozzarella", "Bolsa 500 g", dec!(4.25)),
            ],
        ),
    ];

    let mut created = Vec::new();
    for (category_name, products) in catalog {
        let category = category::ActiveModel {
            name: Set(category_name.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        for (name, presentation, price) in products {
            let model = product::ActiveModel {
                name: Set(name.to_string()),
                presentation: Set(presentation.to_string()),
                unit_price_usd: Set(price),
                category_id: Set(category.id),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            created.push(model);
        }
    }
    Ok(created)
}

async fn create_orders(
    txn: &DatabaseTransaction,
    vendors: &[vendor::Model],
    supermarkets: &[supermarket::Model],
    representatives: &[purchasing_representative::Model],
    payment_methods: &[payment_method::Model],
    products: &[product::Model],
) -> anyhow::Result<usize> {
    let dates = [
        NaiveDate::from_ymd_opt(2024, 1, 15),
        NaiveDate::from_ymd_opt(2024, 2, 3),
    ];

    let mut count = 0;
    for (i, date) in dates.into_iter().enumerate() {
        let date = date.context("invalid sample date")?;
        let order = order::ActiveModel {
            date: Set(date),
            vendor_id: Set(vendors[i % vendors.len()].id),
            supermarket_id: Set(supermarkets[i % supermarkets.len()].id),
            representative_id: Set(representatives[i % representatives.len()].id),
            payment_method_id: Set(payment_methods[i % payment_methods.len()].id),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        for (j, product) in products.iter().enumerate().skip(i).take(2) {
            let quantity = (j as i32 + 1) * 12;
            order_line::ActiveModel {
                order_id: Set(order.id),
                product_id: Set(product.id),
                quantity: Set(quantity),
                total_value_usd: Set(product.unit_price_usd * Decimal::from(quantity)),
                ..Default::default()
            }
            .insert(txn)
            .await?;
        }
        count += 1;
    }

    Ok(count)
}
