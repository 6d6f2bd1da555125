// src/lib.rs
pub mod dao;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod images;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod util;
