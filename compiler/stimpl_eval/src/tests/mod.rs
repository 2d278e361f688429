//! Operator tests relocated from the implementation files.

mod unary_operators_tests;
