//! Shared test utilities for mvo-feed unit tests.
