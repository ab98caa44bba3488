pub mod product_submitted_v1;
