#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

pub mod errors;
pub mod gc;
pub mod json;
pub mod keys;
pub mod pretty_impl;
pub mod props;
pub mod values;
