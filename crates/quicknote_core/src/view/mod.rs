//! Visible-set computation and display projections.
//!
//! # Responsibility
//! - Compute the filtered, ordered subset of notes for given criteria.
//! - Project notes into render-ready models decoupled from any UI toolkit.
//!
//! # Invariants
//! - Projection is pure; notes are never mutated.
//! - Visible order always equals store order.

pub mod projector;
pub mod render;
