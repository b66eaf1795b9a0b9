//! Product query handlers.

mod get_product_by_id;
mod get_product_by_name;
mod list_products;

pub use get_product_by_id::{
    GetProductByIdHandler, GetProductByIdQuery, GetProductByIdRequest, ProductIdParams,
};
pub use get_product_by_name::{
    GetProductByNameHandler, GetProductByNameQuery, GetProductByNameRequest, ProductNameParams,
};
pub use list_products::{ListProductsHandler, ListProductsRequest};
