use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default location of the backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/dramaData.json";

/// Which backend holds the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// JSON file on disk, cached in memory and flushed on every mutation.
    File,
    /// In-process only; lost on restart.
    Memory,
}

impl StorageMode {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageMode::File => "file",
            StorageMode::Memory => "memory",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageMode::File),
            "memory" => Ok(StorageMode::Memory),
            other => Err(format!("unknown storage mode '{other}' (expected 'file' or 'memory')")),
        }
    }
}

/// Storage settings for [`crate::create_pool`].
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub mode: StorageMode,
    /// Backing file for [`StorageMode::File`]; ignored otherwise.
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            mode: StorageMode::File,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes_case_insensitively() {
        assert_eq!("file".parse::<StorageMode>(), Ok(StorageMode::File));
        assert_eq!(" Memory ".parse::<StorageMode>(), Ok(StorageMode::Memory));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!("sqlite".parse::<StorageMode>().is_err());
    }

    #[test]
    fn default_uses_file_backend() {
        let config = StorageConfig::default();
        assert_eq!(config.mode, StorageMode::File);
        assert_eq!(config.data_file, PathBuf::from("data/dramaData.json"));
    }
}
