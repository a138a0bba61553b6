//! Settings for the player, layered from the environment, an optional TOML
//! file and built-in defaults. See `Settings::load`.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
