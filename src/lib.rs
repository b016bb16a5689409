pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod recommend;
pub mod session;
