//! Host surface - protocol types and the stdio pump

pub mod protocol;
pub mod stdio;
