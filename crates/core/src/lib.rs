//! Core conversion logic for Convertly.
//!
//! This crate contains pure conversion logic with ZERO web or config dependencies.
//! Currency codes, the rate table and the conversion engine live here.
//!
//! # Modules
//!
//! - `currency` - Supported currencies, rate table, conversion and swap

pub mod currency;
