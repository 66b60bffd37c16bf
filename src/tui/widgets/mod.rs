// Widget rendering functions, one module per dashboard zone.

pub mod groups;
pub mod help_bar;
pub mod message_bar;
pub mod players;
pub mod quit_confirm;
pub mod roulette;
pub mod status_bar;
