pub mod api;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod fixtures;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod openapi;

#[cfg(feature = "server")]
pub mod portal;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod role_header;

#[cfg(feature = "server")]
pub mod telemetry;
