pub mod feature_card;
pub mod footer;
pub mod guardian;
pub mod navbar;
pub mod testimonial;
