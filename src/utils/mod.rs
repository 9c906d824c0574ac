//! Shared helpers.

mod patterns;

pub use patterns::compile_regex_unsafe;
