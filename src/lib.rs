//! Employee Rules Engine
//!
//! This crate provides the hiring and commercial performance rules of an HR
//! management service: matricule generation, starting salary calculation
//! from education level, and revenue-driven performance scoring, all on top
//! of a pluggable employee repository.

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod repository;
pub mod rules;
