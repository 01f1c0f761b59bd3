//! Fixtures shared by the test suites of the other crates.

pub mod contact;
