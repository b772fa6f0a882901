//! Thermal systems models.

pub mod layered_hx;
