pub mod sample;
pub mod sweep;

pub use sample::Sample;
pub use sweep::Sweep;
