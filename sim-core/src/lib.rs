//! Core 2-D disordered-oscillator lattice simulation library.
//!
//! Main components:
//! - [`lattice`] — sites, toroidal neighbor wiring, and the grid itself.
//! - [`frequency`] — random natural-frequency assignment.
//! - [`phases`] — force evaluation and the leapfrog integration step.
//! - [`force_buffer`] — temporary buffer for per-site forces.
//! - [`model`] — configuration-owning simulation model.
//! - [`config`] — global configuration for the simulation.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod force_buffer;
pub mod frequency;
pub mod lattice;
pub mod model;
pub mod phases;
pub mod types;
