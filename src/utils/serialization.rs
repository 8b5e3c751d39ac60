use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use bincode::Options;

use crate::errors::BoggleError;

pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(data: &T, path: TPath) -> Result<(), BoggleError> {
    let options = bincode::DefaultOptions::new().with_no_limit();
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    options.serialize_into(writer, data)?;
    Ok(())
}

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T, BoggleError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let options = bincode::DefaultOptions::new().with_no_limit();
    Ok(options.deserialize_from(reader)?)
}
