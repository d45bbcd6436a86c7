//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod client_service;

pub use client_service::*;
