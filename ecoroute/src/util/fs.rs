use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::app::EcorouteAppError;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), EcorouteAppError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|e| {
            let msg = format!(
                "error building output directory '{}': {e}",
                dirspath.to_str().unwrap_or_default()
            );
            EcorouteAppError::InvalidUserInput(msg)
        })
    } else {
        Ok(())
    }
}

/// writes a value as pretty-printed JSON to `output_directory/filename`,
/// returning the path written.
pub fn write_json<T>(
    value: &T,
    output_directory: &Path,
    filename: &str,
) -> Result<PathBuf, EcorouteAppError>
where
    T: Serialize,
{
    create_dirs(output_directory)?;
    let path = output_directory.join(filename);
    let file = File::create(&path).map_err(|e| EcorouteAppError::WriteError {
        path: path.clone(),
        message: e.to_string(),
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
        EcorouteAppError::WriteError {
            path: path.clone(),
            message: format!("failed to serialize to JSON: {e}"),
        }
    })?;
    writer.flush().map_err(|e| EcorouteAppError::WriteError {
        path: path.clone(),
        message: e.to_string(),
    })?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

/// reads and deserializes a JSON file.
pub fn read_json<T>(path: &Path) -> Result<T, EcorouteAppError>
where
    T: DeserializeOwned,
{
    let contents = std::fs::read(path).map_err(|e| EcorouteAppError::ReadError {
        path: path.to_owned(),
        message: e.to_string(),
    })?;
    serde_json::from_slice::<T>(&contents).map_err(|e| EcorouteAppError::ReadError {
        path: path.to_owned(),
        message: format!("failed to deserialize from JSON: {e}"),
    })
}
