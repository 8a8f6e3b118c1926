//! Shared utility functions

pub mod identity;
pub mod media;

pub use identity::{is_blank, mask_identity};
pub use media::is_valid_media_url;
