//! Product domain module.
//!
//! Products are read-only for this service: the catalogue is maintained
//! elsewhere and only queried here.

mod product;

pub use product::Product;
