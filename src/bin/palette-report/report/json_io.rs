#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Serialize `value` as pretty JSON into `path`.
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<PathBuf> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, value)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(path.to_path_buf())
}
