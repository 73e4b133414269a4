pub mod tone;

pub use tone::Tone;
