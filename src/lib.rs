pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod service;
