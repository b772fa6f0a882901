//! # Layered HX
//!
//! A layered counterflow heat exchanger model for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a wall material's overall heat-transfer coefficient and per-layer
//! weight, the model integrates the hot-stream temperature along the exchanger
//! length and derives the cold-stream profile, heat duty, LMTD, weight, and
//! pressure drops.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] implementation.
//! - [`support`]: Supporting utilities used by the model.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable.

pub mod models;
pub mod support;
