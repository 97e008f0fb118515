//! Tabletop spell records and the raw JSON catalogue they are loaded from.

pub mod error;
pub mod raws;

pub use error::RawsError;
pub use raws::{
    load_raws, load_raws_from_path, parse_raws, rawsmaster::RawMaster, read_raws,
    spell_structs::Spell, write_raws, Raws, RAWS,
};
