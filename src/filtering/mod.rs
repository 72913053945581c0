//! Binary/text classification of candidate files.

mod text_detection;

pub use text_detection::{buffer_is_text, ContentDetector, TextDetector};
