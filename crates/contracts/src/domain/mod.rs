pub mod common;

pub mod a001_shop_management;
pub mod a002_review_management;
pub mod a003_review_statistics;
pub mod a004_product_management;
pub mod a005_customer_service;
pub mod a006_jd_orders;
pub mod a007_order_sync;
