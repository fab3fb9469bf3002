mod now;
mod subject_hash;

pub use now::*;
pub use subject_hash::*;
