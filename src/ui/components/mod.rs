//! Catalog components.
//!
//! Presentational hero sections rendered via Leptos SSR. Each component is a
//! pure function of its props, every prop has a default, and conditional
//! sub-elements (badge, image, disclaimer) are omitted entirely rather than
//! rendered empty.
//!
//! # Components
//!
//! - [`HeroSplit`]: two-column hero with an image-or-placeholder panel
//! - [`HeroCentered`]: centered hero with optional badge, email capture,
//!   and disclaimer

pub mod hero_centered;
pub mod hero_split;

pub use hero_centered::HeroCentered;
pub use hero_split::HeroSplit;
