use crate::error::{ConvertError, ConvertResult};
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Create `dir` and any missing parents
pub fn ensure_dir(dir: &Path) -> ConvertResult<()> {
    fs::create_dir_all(dir).map_err(|e| ConvertError::io(dir, e))
}

/// Write `value` as pretty-printed JSON, replacing any existing file.
///
/// The buffer is flushed explicitly so write errors surface here instead of
/// being lost on drop; the file handle is closed on every return path.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> ConvertResult<()> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| ConvertError::json(path, e))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::io(path, e))?;

    Ok(())
}

/// Read a JSON file back into a value
pub fn read_json(path: &Path) -> ConvertResult<Value> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| ConvertError::json(path, e))
}
