//! Resource schema registry.
//!
//! # Design
//! Every resource kind has two distinct types: a write shape (`…Attributes`,
//! implementing `WriteAttributes`) whose cross-resource references are bare
//! `IdRef`s, and a read shape (`…Resource`, implementing `ReadAttributes`)
//! where the server has expanded those references into full resource
//! objects. `ToRequest` maps a read shape back to its write shape.
//!
//! Kinds with no writable form (`hm_names`, `tm_names`, `roms`, `savs`,
//! `rom_patches`) only have a read shape; access tokens only have write
//! shapes.

pub mod access_tokens;
pub mod evolutions;
pub mod machines;
pub mod maps;
pub mod marts;
pub mod moves;
pub mod names;
pub mod player;
pub mod pokedex;
pub mod pokemon;
pub mod storage;
pub mod trades;
pub mod trainers;
pub mod type_chart;

pub use access_tokens::*;
pub use evolutions::*;
pub use machines::*;
pub use maps::*;
pub use marts::*;
pub use moves::*;
pub use names::*;
pub use player::*;
pub use pokedex::*;
pub use pokemon::*;
pub use storage::*;
pub use trades::*;
pub use trainers::*;
pub use type_chart::*;
