use std::path::PathBuf;
use thiserror::Error;

/// The configuration cannot be used. Nothing is rendered when this is raised.
#[derive(Debug, Error)]
pub enum ConfigError {
    // IO / Parsing
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Plugin resolution
    #[error("'{identifier}' isn't a plugin identifier (expected '<namespace>.<Name>')")]
    MalformedIdentifier { identifier: String },

    #[error("error importing plugin '{identifier}': unknown namespace '{namespace}'")]
    UnknownNamespace {
        identifier: String,
        namespace: String,
    },

    #[error("plugin namespace '{namespace}' does not define a '{name}' report")]
    MissingPlugin {
        identifier: String,
        namespace: String,
        name: String,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
