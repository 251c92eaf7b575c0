// Library exports for the binary and the integration tests

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod sweeper;
