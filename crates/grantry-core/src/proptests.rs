//! Property-based tests for [`GrantSet`](crate::GrantSet) set algebra.
