//! Heroku platform API client and report commands

pub mod aggregate;
mod api;
mod client;
pub mod credentials;
pub mod fanout;
mod info;
pub mod models;

pub mod apps;
pub mod domains;
pub mod env;
pub mod postgres;
pub mod redis;
pub mod users;

pub use client::HerokuClient;
pub use credentials::ApiKeyResolver;
