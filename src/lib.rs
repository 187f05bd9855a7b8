pub mod api;
pub mod config;
pub mod data;
pub mod presenter;
pub mod render;
pub mod repository;
pub mod view;
