pub mod constants;
pub mod controller;
pub mod input;
pub mod settings;
pub mod sound;
pub mod spring;
pub mod weapon;

pub use controller::*;
pub use input::*;
pub use settings::*;
pub use sound::*;
pub use spring::*;
pub use weapon::*;
