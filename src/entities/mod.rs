//! Relational model of the sales domain.
//!
//! Reference tables (states, cities, supermarkets, vendors, representatives,
//! categories, products, payment methods) are seeded externally. Orders are
//! the only rows this service inserts.

pub mod category;
pub mod city;
pub mod order;
pub mod order_line;
pub mod payment_method;
pub mod product;
pub mod purchasing_representative;
pub mod state;
pub mod supermarket;
pub mod vendor;
