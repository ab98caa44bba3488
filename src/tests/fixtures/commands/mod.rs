pub mod submit_product;
