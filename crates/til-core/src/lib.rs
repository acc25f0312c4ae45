//! til-core - Core library for Today I Learned
//!
//! This crate contains the fact models, the Supabase table client, and the
//! board state shared by the Today I Learned interfaces.

pub mod api;
pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod flow;
pub mod models;
pub mod util;

pub use board::{FactBoard, Notice};
pub use controller::FactsController;
pub use error::{Error, Result};
pub use models::{Category, CategoryFilter, Fact, FactId};
