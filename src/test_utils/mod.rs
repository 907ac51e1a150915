//! the test_utils folder here will share utils or test components between unit
//! tests and integrations tests
mod common;

pub use common::*;
