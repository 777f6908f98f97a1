//! Payroll settlement engine for Colombian payroll (nómina).
//!
//! This crate computes itemized pay settlements (wages, overtime premiums,
//! Sunday/holiday surcharges, health/pension deductions, non-salary bonuses)
//! for a roster of employees and aggregates them into per-period payroll
//! batches with a draft/approved lifecycle.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
