// potpie/src/lib.rs
//! # potpie CLI Application
//!
//! This crate provides the command-line interface for the potpie
//! pseudo-translation engine in `potpie-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
