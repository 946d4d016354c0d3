//! Operator tests, kept out of the implementation files.

mod operators_tests;
