pub mod animation;
pub mod preferences;
