//! Consolidated test utilities for buddy
//!
//! This module provides unified testing utilities for integration tests,
//! each test running the real binary against its own temporary workspace.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
