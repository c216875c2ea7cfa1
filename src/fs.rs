//! Filesystem bookkeeping: finding source images and naming the files derived from them.

mod discover;
mod naming;

pub use self::discover::*;
pub use self::naming::*;
