// Library exports for testing
pub use game::{Enemy, Game, Intent, Phase, Player, Projectile, Rect, Surface, TickReport};

pub mod app;
pub mod audio;
pub mod game;
pub mod input;
pub mod renderer;
