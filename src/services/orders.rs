use crate::{
    db::DbPool,
    dto::OrderCreateRequest,
    entities::order::{self, Entity as OrderEntity, Model as OrderModel},
    errors::ServiceError,
};
use metrics::{counter, histogram};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, TransactionTrait};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Reads and writes orders. Each call runs as its own unit of work on a
/// connection borrowed from the shared pool.
#[derive(Clone)]
pub struct OrderService {
    db_pool: Arc<DbPool>,
}

impl OrderService {
    /// Creates a new order service instance
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Inserts a new order and returns the stored row with its generated id.
    ///
    /// The insert runs inside a transaction. Any failure drops it, which
    /// rolls back and hands the connection back to the pool.
    #[instrument(
        skip(self, request),
        fields(
            vendor_id = request.id_vendedor,
            supermarket_id = request.id_supermercado,
            representative_id = request.id_representante,
            payment_method_id = request.id_forma_pago,
        )
    )]
    pub async fn create_order(
        &self,
        request: OrderCreateRequest,
    ) -> Result<OrderModel, ServiceError> {
        let db = &*self.db_pool;
        let start = Instant::now();

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for order creation");
            counter!("dairy_sales.orders.create_failed", 1);
            ServiceError::db_error(e)
        })?;

        let order_model = request.into_active_model().insert(&txn).await.map_err(|e| {
            error!(error = %e, "Failed to insert order");
            counter!("dairy_sales.orders.create_failed", 1);
            ServiceError::db_error(e)
        })?;

        txn.commit().await.map_err(|e| {
            error!(error = %e, order_id = order_model.id, "Failed to commit order creation");
            counter!("dairy_sales.orders.create_failed", 1);
            ServiceError::db_error(e)
        })?;

        counter!("dairy_sales.orders.created", 1);
        histogram!("dairy_sales.orders.create_duration", start.elapsed());
        info!(order_id = order_model.id, "Order created successfully");

        Ok(order_model)
    }

    /// Returns every order, oldest id first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<OrderModel>, ServiceError> {
        let db = &*self.db_pool;

        let orders = OrderEntity::find()
            .order_by_asc(order::Column::Id)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch orders");
                ServiceError::db_error(e)
            })?;

        debug!(count = orders.len(), "Orders retrieved");
        Ok(orders)
    }
}
