//! The blocks of a binary font resource

pub mod cmap;
pub mod finf;
pub mod rfnt;
pub mod tglp;
