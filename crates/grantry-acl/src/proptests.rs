//! Property-based tests for grant resolution, extraction, and the write guard.
