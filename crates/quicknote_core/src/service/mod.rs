//! Core use-case services.
//!
//! # Responsibility
//! - Turn UI events into store mutations and criteria changes.
//! - Keep UI collaborators decoupled from store and projector details.

pub mod board;
