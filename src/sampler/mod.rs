//! Curves sampled on the client without a backend round-trip.

pub mod polynomial;
pub mod rose;

pub use rose::{RoseParams, Trig};
