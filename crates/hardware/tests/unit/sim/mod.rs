//! # Simulation Unit Tests
//!
//! Session driver behaviour and program file round trips.


/// Session driver tests.
pub mod simulator;
