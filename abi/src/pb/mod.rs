#[allow(clippy::all, non_camel_case_types)]
mod rental;

pub use rental::*;
