// src/lib.rs

#[macro_use]
pub mod log;

pub mod config;
pub mod dataset;
pub mod error;
pub mod schema;

pub mod export;
pub mod filter;
pub mod gui;
pub mod loader;
pub mod present;
pub mod render;

#[cfg(feature = "cli")]
pub mod cli;
