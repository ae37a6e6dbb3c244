// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod table;

pub use error::{Result, ScrapeError};
