pub mod error;
pub mod random;
pub mod seed;
pub mod sequence;
pub mod shuffle;
