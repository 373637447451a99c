//! Multi-component workflow tests for the full pipeline.

mod failure_tests;
