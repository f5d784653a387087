//! Weekly shift roster generation for a staffed shop.
//!
//! Employees submit the hour slots they can work; the shop lists the hour
//! slots it needs covered. [`solver::generate_schedule`] assigns slots
//! greedily, scarcest slot first and least-loaded employee first, and reports
//! coverage, workload balance and warnings for anything left unstaffed.

pub mod assigner;
pub mod constraints;
pub mod index;
pub mod model;
pub mod priority;
pub mod solver;
pub mod stats;
pub mod validator;
