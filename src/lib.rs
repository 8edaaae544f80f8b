//! Promptforge - rule-based prompt analysis and optimization
//!
//! The library exposes two pure, deterministic engines:
//!
//! - [`scoring::ScoreEngine`] scores a prompt on five quality dimensions
//!   (clarity, specificity, structure, context, creativity) using fixed
//!   indicator sets and bounded bonuses/penalties.
//! - [`optimize::OptimizationEngine`] rewrites a prompt dimension by
//!   dimension, weakest score first, and derives strengths, weaknesses,
//!   and suggestions.
//!
//! Everything else (validation, reporters, config, CLI) is glue around
//! those two engines.

pub mod cli;
pub mod config;
pub mod models;
pub mod optimize;
pub mod reporters;
pub mod scoring;
pub mod textutil;
pub mod validate;
