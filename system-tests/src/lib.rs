// system-tests/src/lib.rs
// ============================================================================
// Module: MAX Question Answering System Tests Library
// Description: Shared configuration for system test scenarios.
// Purpose: Provide common utilities for the acceptance test binaries.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the MAX Question Answering
//! acceptance binaries in `system-tests/tests`. The scenarios exercise the
//! model server over HTTP only; the model itself is an external collaborator.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
