//! Repo-Showcase: categorized repository tables for profile READMEs
//!
//! This library provides the fetch, classification and rendering stages
//! behind the `repo-showcase` binary.

pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod render;
pub mod utils;
