//! Form rendering module
//!
//! - `field_renderer`: text and multi-select field widgets
//! - `product_form`: the product entry form

mod field_renderer;
mod product_form;

pub use product_form::draw_product_form;
