pub mod app;
pub mod catalog;
pub mod error;
pub mod models;
pub mod rating;
pub mod seed;
