//! Product price handlers. Prices are always addressed through their product.

mod create_product_price;
mod delete_product_price;
mod get_product_price;
mod update_product_price;

// Commands
pub use create_product_price::{
    CreateProductPriceCommand, CreateProductPriceHandler, CreateProductPriceResult,
};
pub use delete_product_price::{DeleteProductPriceCommand, DeleteProductPriceHandler};
pub use update_product_price::{
    UpdateProductPriceCommand, UpdateProductPriceHandler, UpdateProductPriceResult,
};

// Queries
pub use get_product_price::{
    GetProductPriceHandler, GetProductPriceQuery, ListProductPricesHandler, ListProductPricesQuery,
};
