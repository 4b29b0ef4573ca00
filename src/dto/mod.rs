//! Wire-level request and response shapes for the mentoring backend.

pub mod api;
pub mod entity;
