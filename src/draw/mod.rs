// Draw domain: the player roster, the group table, and the roulette engine.

pub mod engine;
pub mod group;
pub mod player;
