//! UI components and layouts.
//!
//! This module provides Leptos SSR components for the catalog and its
//! preview pages.
//!
//! # Structure
//!
//! - [`app`]: page chrome (document shell, catalog index, preview wrapper)
//! - [`components`]: the cataloged hero sections

pub mod app;
pub mod components;
