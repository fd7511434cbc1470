//! Conformance validators.
//!
//! Each validator drives the `cayley` core on known inputs and turns every
//! comparison into a [`TestResult`](crate::report::TestResult).

pub mod counts;
pub mod fixtures;
