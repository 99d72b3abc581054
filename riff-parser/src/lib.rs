#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]
extern crate core;

pub mod chunk;
pub mod error;
pub mod fourcc;
pub mod source;
