//! Configuration file loading

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::config::types::ConfigFile;
use crate::config::validate::validate;
use crate::error::{Error, Result};

/// Configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["config.yaml", "config.yml"];

/// Directory under the config dir that holds manifest files
const MANIFEST_DIR_NAME: &str = "pkgs";

/// Loaded and validated decree configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// The parsed configuration
    file: ConfigFile,

    /// Directory the configuration lives in
    config_dir: Utf8PathBuf,

    /// Path to the configuration file itself
    config_path: Utf8PathBuf,
}

impl Config {
    /// Load configuration from the given directory, or from the default
    /// config directory (`~/.config/decree` on Linux) when `None`.
    pub fn load(dir: Option<&Utf8Path>) -> Result<Self> {
        let config_dir = match dir {
            Some(d) => d.to_owned(),
            None => default_config_dir()?,
        };

        let (config_path, content) = find_config(&config_dir)?;
        let file: ConfigFile = serde_yaml_ng::from_str(&content)?;
        validate(&file)?;

        Ok(Self {
            file,
            config_dir,
            config_path,
        })
    }

    /// Load configuration from an explicit file path instead of
    /// searching a directory.
    pub fn load_file(path: &Utf8Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::config_not_found(path.to_string()));
            }
            Err(e) => return Err(Error::Io(e)),
        };
        let file: ConfigFile = serde_yaml_ng::from_str(&content)?;
        validate(&file)?;

        let config_dir = match path.parent() {
            Some(dir) if !dir.as_str().is_empty() => dir.to_owned(),
            _ => Utf8PathBuf::from("."),
        };
        Ok(Self {
            file,
            config_dir,
            config_path: path.to_owned(),
        })
    }

    /// Get the parsed configuration
    pub fn file(&self) -> &ConfigFile {
        &self.file
    }

    /// Get the path of the loaded configuration file
    pub fn path(&self) -> &Utf8Path {
        &self.config_path
    }

    /// Get the directory the configuration lives in
    pub fn dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the directory holding package manifests
    pub fn manifest_dir(&self) -> Utf8PathBuf {
        self.config_dir.join(MANIFEST_DIR_NAME)
    }
}

/// Locate and read the config file inside `dir`
fn find_config(dir: &Utf8Path) -> Result<(Utf8PathBuf, String)> {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => return Ok((path, content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(Error::Io(e)),
        }
    }
    Err(Error::config_not_found(dir.join(CONFIG_FILE_NAMES[0])))
}

/// Platform config directory for decree (`~/.config/decree` on Linux)
fn default_config_dir() -> Result<Utf8PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| Error::invalid_config("Could not determine the user config directory"))?;
    let base = Utf8PathBuf::from_path_buf(base).map_err(|p| {
        Error::invalid_config(format!(
            "Config directory path is not valid UTF-8: {}",
            p.display()
        ))
    })?;
    Ok(base.join("decree"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = r#"
sources:
  - name: pacman
    list: native
    install-cmd: sudo pacman -S $PKGS
    default: true
lists:
  - name: native
    list-cmd: pacman -Qqe
    remove-cmd: sudo pacman -Rns $PKGS
    default-source: pacman
"#;

    fn dir_with(name: &str, content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(name), content).unwrap();
        dir
    }

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("path should be valid UTF-8")
    }

    #[test]
    fn test_load_valid_config() {
        let dir = dir_with("config.yaml", VALID);
        let config = Config::load(Some(&utf8(&dir))).unwrap();
        assert_eq!(config.file().sources.len(), 1);
        assert_eq!(config.file().default_source().unwrap().name, "pacman");
        assert!(config.path().as_str().ends_with("config.yaml"));
    }

    #[test]
    fn test_load_yml_fallback() {
        let dir = dir_with("config.yml", VALID);
        let config = Config::load(Some(&utf8(&dir))).unwrap();
        assert!(config.path().as_str().ends_with("config.yml"));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&utf8(&dir))).unwrap_err();
        assert!(
            matches!(err, Error::ConfigNotFound { .. }),
            "Expected ConfigNotFound, got: {:?}",
            err
        );
    }

    #[test]
    fn test_invalid_yaml_syntax() {
        let dir = dir_with("config.yaml", "sources:\n  bad_indent: [[[");
        let err = Config::load(Some(&utf8(&dir))).unwrap_err();
        assert!(
            matches!(err, Error::YamlParse(_)),
            "Expected YamlParse, got: {:?}",
            err
        );
    }

    #[test]
    fn test_validation_failure_surfaces() {
        let yaml = r#"
sources:
  - name: pacman
    list: native
    install-cmd: sudo pacman -S $PKGS
lists:
  - name: native
    list-cmd: pacman -Qqe
    remove-cmd: sudo pacman -Rns $PKGS
    default-source: nix
"#;
        let dir = dir_with("config.yaml", yaml);
        let err = Config::load(Some(&utf8(&dir))).unwrap_err();
        assert!(
            matches!(err, Error::UnknownDefaultSource { .. }),
            "Expected UnknownDefaultSource, got: {:?}",
            err
        );
    }

    #[test]
    fn test_manifest_dir_location() {
        let dir = dir_with("config.yaml", VALID);
        let config = Config::load(Some(&utf8(&dir))).unwrap();
        assert_eq!(config.manifest_dir(), config.dir().join("pkgs"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = dir_with("other-name.yaml", VALID);
        let path = utf8(&dir).join("other-name.yaml");
        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.path(), path);
        assert_eq!(config.dir(), utf8(&dir));
    }

    #[test]
    fn test_load_explicit_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_file(&utf8(&dir).join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }
}
