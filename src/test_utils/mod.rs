//! Consolidated test utilities for the indiarace monthly scraper.
//!
//! Shared fixtures, race-page markup builders and wiremock responders used
//! by the unit tests across the codebase.

#![cfg(test)]

pub mod config;
pub mod fixtures;
pub mod html;
pub mod mocks;
