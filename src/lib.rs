//! Leptos Heroes
//!
//! A catalog of presentational hero-section components rendered via Leptos
//! SSR, browsable through a built-in Axum preview server.
//!
//! # Architecture
//!
//! - **Components**: pure, stateless Leptos components with defaulted props
//!   and explicit conditional branches (image vs. placeholder, optional
//!   badge/disclaimer, toggleable email capture)
//! - **Catalog**: a static registry of component metadata, prop contracts,
//!   and named variants
//! - **Preview server**: Axum routes rendering any component with defaults
//!   or query-string overrides, plus a JSON discovery endpoint
//!
//! # Modules
//!
//! - [`catalog`]: component registry and preview parameter contracts
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`server`]: Axum preview server and routes
//! - [`ui`]: Leptos components and page chrome

pub mod catalog;
pub mod config;
pub mod server;
pub mod ui;
