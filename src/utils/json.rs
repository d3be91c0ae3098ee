use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

pub fn load_json<T, P>(path: P) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_json(BufReader::new(file)).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn read_json<T, R>(reader: R) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    R: Read,
{
    let data = serde_json::from_reader(reader)?;
    Ok(data)
}
