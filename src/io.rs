use crate::error::{ExpDistError, Result};
use serde::{Deserialize, Serialize};
use std::any::type_name;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExpDistError + '_ {
    move |source| ExpDistError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads the whole file at `path` into memory.
pub fn load_raw_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut f = File::open(path).map_err(io_error(path))?;
    let mut buf: Vec<u8> = vec![];
    f.read_to_end(&mut buf).map_err(io_error(path))?;
    debug!("read {} bytes from {:?}", buf.len(), path);
    Ok(buf)
}

/// Creates `path` up front so a bad output location fails before any work is done.
pub fn create_output_file(path: &Path) -> Result<File> {
    File::create(path).map_err(io_error(path))
}

pub fn dump_data_to_file<T: Serialize>(data: &T, file: File) -> Result<()> {
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, data)?;
    writer.flush().map_err(bincode::Error::from)?;
    Ok(())
}

pub fn load_data_from_file<T: for<'a> Deserialize<'a>>(path: &Path) -> Result<T> {
    let f = File::open(path).map_err(io_error(path))?;
    let data = bincode::deserialize_from(BufReader::new(f))?;
    debug!("deserialized {:?} into {}", path, type_name::<T>());
    Ok(data)
}
