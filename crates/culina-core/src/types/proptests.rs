//! Property-based tests for core types and policy.
