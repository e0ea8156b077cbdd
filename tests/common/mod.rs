//! Shared test utilities.

#![allow(dead_code)]

pub mod fake_unsplash;
pub mod fixtures;
