pub mod rawsmaster;
pub mod spell_structs;
use self::spell_structs::Spell;
use crate::{error::RawsError, raws::rawsmaster::RawMaster};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
    sync::{Mutex, MutexGuard, PoisonError},
};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Raws {
    pub spells: Vec<Spell>,
}

const RAW_FILE: &str = include_str!("../../raws/spells.json");

lazy_static! {
    pub static ref RAWS: Mutex<RawMaster> = Mutex::new(RawMaster::default());
}

/// Locks the global catalogue, recovering it if a previous holder panicked.
pub fn raws() -> MutexGuard<'static, RawMaster> {
    RAWS.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn parse_raws(raw_string: &str) -> Result<Raws, RawsError> {
    Ok(serde_json::from_str(raw_string)?)
}

pub fn read_raws<P: AsRef<Path>>(path: P) -> Result<Raws, RawsError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub fn write_raws<P: AsRef<Path>>(raws: &Raws, path: P) -> Result<(), RawsError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, raws)?;
    writer.flush()?;
    Ok(())
}

/// Loads the embedded spell list into [`RAWS`].
pub fn load_raws() -> Result<(), RawsError> {
    let decoder = parse_raws(RAW_FILE)?;
    raws().load(decoder);
    Ok(())
}

pub fn load_raws_from_path<P: AsRef<Path>>(path: P) -> Result<(), RawsError> {
    let path = path.as_ref();
    tracing::debug!("Loading raws from {}", path.display());
    let decoder = read_raws(path)?;
    raws().load(decoder);
    Ok(())
}
