//! # Unit Tests
//!
//! Mirrors the source tree: one module per policy plus the factory and
//! the configuration surface.
