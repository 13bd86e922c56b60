//! Vacation Pay Calculator
//!
//! This crate computes statutory vacation pay from an average wage, a number
//! of requested vacation days and a start date, paying only for days that
//! are neither configured weekends nor fixed-date public holidays. The
//! [`api`] module exposes the calculation over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
