pub mod classifier;
pub mod types;

pub use classifier::{classify, classify_date, SignRange, SIGN_RANGES};
pub use types::{Element, UnknownSign, ZodiacSign};
