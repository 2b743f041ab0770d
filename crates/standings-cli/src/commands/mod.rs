//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod clear;
pub mod config;
pub mod demo;
pub mod export;
pub mod load;
pub mod show;
