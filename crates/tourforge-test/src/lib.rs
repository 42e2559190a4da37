//! Shared test fixtures for TourForge crates.
//!
//! This crate provides board lists and an independent closed-tour checker.
//! It depends only on `tourforge-core` so every other crate can use it as a
//! dev-dependency.
//!
//! - [`knight`] - closed knight tour assertions
//! - [`shapes`] - boards the builder must accept or reject
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tourforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use tourforge_test::{assert_closed_tour, ACCEPTED_SHAPES};
//! ```

pub mod knight;
pub mod shapes;

pub use knight::{assert_closed_tour, closed_tour_error};
pub use shapes::{ACCEPTED_SHAPES, LARGE_ACCEPTED_SHAPES, REJECTED_SHAPES};
