//! Error types for decree-core

use thiserror::Error;

/// Result type alias using decree-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Decree
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config declares no sources
    #[error("No sources defined in config")]
    NoSources,

    /// Config declares no package lists
    #[error("No package lists defined in config")]
    NoPackageLists,

    /// A source or package list is missing a required field
    #[error("Missing `{field}` for {kind} \"{name}\"")]
    MissingField {
        kind: &'static str,
        name: String,
        field: &'static str,
    },

    /// Two sources or two package lists share a name
    #[error("Duplicate {kind} name: \"{name}\"")]
    DuplicateName { kind: &'static str, name: String },

    /// A package list's default source does not exist
    #[error("Default source \"{source_name}\" for package list \"{list}\" does not exist")]
    UnknownDefaultSource { list: String, source_name: String },

    /// A source references a package list that does not exist
    #[error("Package list \"{list}\" for source \"{source_name}\" does not exist")]
    UnknownPackageList { source_name: String, list: String },

    /// More than one source is marked as the default
    #[error("Multiple default sources: \"{first}\" and \"{second}\"")]
    MultipleDefaults { first: String, second: String },

    /// Empty source annotation in a manifest
    #[error("Empty source annotation: {token}")]
    EmptyAnnotation { token: String },

    /// Two temporary source annotations with no package between them
    #[error("Cannot have two adjacent temporary sources: ({first}) and ({second})")]
    AdjacentTemporaries { first: String, second: String },

    /// A temporary source annotation with no package after it
    #[error("Temporary source ({source_name}) is not followed by a package")]
    DanglingTemporary { source_name: String },

    /// A package with no temporary, current, or default source
    #[error("No source defined for package: {package}")]
    NoSourceForPackage { package: String },

    /// A manifest references a source that is not in the config
    #[error("No such source found: {name}")]
    UnknownSource { name: String },

    /// The same package is declared twice for one package list
    #[error("Package \"{package}\" is declared twice for list \"{list}\": by \"{first}\" and \"{second}\"")]
    DuplicatePackage {
        list: String,
        package: String,
        first: String,
        second: String,
    },

    /// Manifest directory missing
    #[error("Manifest directory not found: {path}. Perhaps run `decree generate`")]
    ManifestDirNotFound { path: String },

    /// Parse failure inside a specific manifest file
    #[error("{path}: {source}")]
    Manifest {
        path: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(kind: &'static str, name: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            kind,
            name: name.into(),
            field,
        }
    }

    /// Create a duplicate name error
    pub fn duplicate_name(kind: &'static str, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            kind,
            name: name.into(),
        }
    }

    /// Create an unknown source error
    pub fn unknown_source(name: impl Into<String>) -> Self {
        Self::UnknownSource { name: name.into() }
    }

    /// Create an error for a package with no resolvable source
    pub fn no_source_for_package(package: impl Into<String>) -> Self {
        Self::NoSourceForPackage {
            package: package.into(),
        }
    }

    /// Wrap a parse error with the manifest file it came from
    pub fn in_manifest(path: impl Into<String>, source: Error) -> Self {
        Self::Manifest {
            path: path.into(),
            source: Box::new(source),
        }
    }
}
