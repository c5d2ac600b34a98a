// system-tests/src/config/mod.rs
// ============================================================================
// Module: System Test Configuration
// Description: Centralized configuration for MAX Question Answering system tests.
// Purpose: Provide typed access to test environment settings and defaults.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! System-test configuration is read from environment variables and mapped into
//! a small typed structure for reuse across test helpers. Scenarios run live
//! when an endpoint is configured or the live switch is set (which targets the
//! default local server); otherwise they run against the in-process stub.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::SystemTestConfig;
pub use env::SystemTestEnv;
pub use env::parse_timeout_seconds;
pub use env::read_env_strict;
