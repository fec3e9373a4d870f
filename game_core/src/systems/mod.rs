pub mod collision;
pub mod input;
pub mod invulnerability;
pub mod movement;
pub mod photons;
pub mod spawner;

pub use collision::*;
pub use input::*;
pub use invulnerability::*;
pub use movement::*;
pub use photons::*;
pub use spawner::*;
