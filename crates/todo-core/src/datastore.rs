use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use tempfile::NamedTempFile;
use todo_model::SlotStore;
use tracing::{debug, info, warn};

/// One JSON file per slot under `data_dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    pub data_dir: PathBuf,
}

impl FileStore {
    #[tracing::instrument(skip(data_dir))]
    pub fn open(data_dir: &Path) -> anyhow::Result<Self> {
        let data_dir = data_dir.to_path_buf();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create {}", data_dir.display()))?;

        info!(data_dir = %data_dir.display(), "opened datastore");
        Ok(Self { data_dir })
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileStore {
    #[tracing::instrument(skip(self))]
    fn read_slot(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.slot_path(key);
        debug!(file = %path.display(), "reading slot");
        match fs::read(&path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "slot is not valid UTF-8");
                    Ok(Some(String::from_utf8_lossy(err.as_bytes()).into_owned()))
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed reading {}", path.display())),
        }
    }

    #[tracing::instrument(skip(self, value), fields(bytes = value.len()))]
    fn write_slot(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.slot_path(key);
        debug!(file = %path.display(), "saving slot atomically");

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(value.as_bytes())?;
        writeln!(temp)?;
        temp.flush()?;

        temp.persist(&path)
            .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;

        Ok(())
    }
}
