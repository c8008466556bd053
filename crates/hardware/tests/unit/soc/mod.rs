//! # SoC Unit Tests
//!
//! Tests for the memory system.
