#![warn(missing_docs)]

pub mod alloc;
pub mod panic;
pub mod result;
