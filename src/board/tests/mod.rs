//! Unit tests for the board module.

mod store_tests;
