//! Arithmetic kernels used to build test cases.

pub mod dot_product;
