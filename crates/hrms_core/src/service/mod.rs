//! Use-case services over the stores.
//!
//! # Responsibility
//! - Normalize caller input and turn missing rows into `NotFound` errors.
//! - Emit metadata-only log events for mutations.
//! - Stay storage-agnostic: every service is generic over its store trait.

pub mod aggregation_service;
pub mod attendance_service;
pub mod employee_service;
