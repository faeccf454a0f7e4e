pub mod dignities;
pub mod signs;

pub use dignities::{is_in_detriment, is_in_exaltation, is_in_fall, is_in_ruling, ruled_signs};
pub use signs::{Element, Modality, Polarity, Sign};
