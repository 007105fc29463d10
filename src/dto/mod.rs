//! Request and response shapes exposed over HTTP.

pub mod orders;

pub use orders::{OrderCreateRequest, OrderResponse};
