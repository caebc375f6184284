// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod progress;

pub mod browser;
pub mod extract;
pub mod align;
pub mod events;
pub mod specs;

pub mod knowledge;
pub mod chat;

pub mod csv;
pub mod file;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
