//! Library crate for revealo-back, exposing modules for binaries and integration tests.

pub mod config;
pub mod dao;
pub mod dto;
pub mod error;
pub mod puzzle;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
