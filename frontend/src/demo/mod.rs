pub mod camera;
pub mod catalog;
pub mod clock;
pub mod detector;
pub mod driver;
pub mod sequencer;
pub mod session;
