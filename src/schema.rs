//! Table creation for the sales schema.
//!
//! Tables are derived from the entity declarations in [`crate::entities`] and
//! created with `IF NOT EXISTS`, so running this on every start is safe. There
//! is no migration history: an existing table is left as it is.

use sea_orm::sea_query::{Expr, TableCreateStatement};
use sea_orm::{ConnectionTrait, DbBackend, DbErr, EntityName, EntityTrait, Schema};
use std::time::Instant;
use tracing::{debug, error, info};

use crate::entities::{
    category, city, order, order_line, payment_method, product, purchasing_representative,
    state, supermarket, vendor,
};

fn table<E>(schema: &Schema, entity: E) -> (String, TableCreateStatement)
where
    E: EntityTrait,
{
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    (entity.table_name().to_string(), statement)
}

/// CREATE TABLE statements for every entity, parents before children.
pub fn create_table_statements(backend: DbBackend) -> Vec<(String, TableCreateStatement)> {
    let schema = Schema::new(backend);

    let mut order_lines = table(&schema, order_line::Entity);
    order_lines
        .1
        .check(Expr::col(order_line::Column::Quantity).gt(0));

    vec![
        table(&schema, state::Entity),
        table(&schema, city::Entity),
        table(&schema, supermarket::Entity),
        table(&schema, vendor::Entity),
        table(&schema, purchasing_representative::Entity),
        table(&schema, category::Entity),
        table(&schema, product::Entity),
        table(&schema, payment_method::Entity),
        table(&schema, order::Entity),
        order_lines,
    ]
}

/// Table names in creation order.
pub fn table_names() -> Vec<String> {
    create_table_statements(DbBackend::Postgres)
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

/// Creates every missing table on the given connection.
pub async fn create_tables<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    let start = Instant::now();
    info!(?backend, "Ensuring sales schema exists");

    for (name, statement) in create_table_statements(backend) {
        debug!(table = %name, "Creating table if absent");
        db.execute(backend.build(&statement)).await.map_err(|e| {
            error!(table = %name, error = %e, "Failed to create table");
            e
        })?;
    }

    info!("Sales schema ready in {:?}", start.elapsed());
    Ok(())
}
