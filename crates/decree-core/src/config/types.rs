//! Typed configuration schema: sources and package lists

use serde::{Deserialize, Serialize};

/// A package source: a way of installing packages into a package list.
///
/// A source is usually a package manager invocation (`pacman`, an AUR
/// helper, `cargo install`, ...) but any shell command that reads the
/// `PKGS` environment variable works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Source {
    /// Unique name, referenced from manifest annotations
    pub name: String,

    /// Name of the package list this source installs into
    pub list: String,

    /// Shell template run to install packages; receives `PKGS`
    pub install_cmd: String,

    /// Optional shell template that expands raw targets into concrete
    /// package names; receives `TARGETS` and prints one name per line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_cmd: Option<String>,

    /// Whether unannotated manifest packages fall back to this source
    #[serde(default)]
    pub default: bool,
}

/// A package list: one installed-package namespace owned by a package
/// manager (pacman's local database, the set of `cargo install`ed
/// binaries, and so on).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PackageList {
    /// Unique name, referenced from `Source::list`
    pub name: String,

    /// Shell template that prints installed package names, one per line
    pub list_cmd: String,

    /// Shell template run to remove packages; receives `PKGS`
    pub remove_cmd: String,

    /// Source that `decree generate` annotates snapshot entries with
    pub default_source: String,
}

/// Root of config.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// All configured sources, in declaration order
    pub sources: Vec<Source>,

    /// All configured package lists, in declaration order
    pub lists: Vec<PackageList>,
}

impl ConfigFile {
    /// Look up a source by name
    pub fn source(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Look up a package list by name
    pub fn list(&self, name: &str) -> Option<&PackageList> {
        self.lists.iter().find(|l| l.name == name)
    }

    /// The config-wide default source, if one is marked
    pub fn default_source(&self) -> Option<&Source> {
        self.sources.iter().find(|s| s.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
sources:
  - name: pacman
    list: native
    install-cmd: sudo pacman -S $PKGS
    default: true
  - name: aur
    list: native
    install-cmd: paru -S $PKGS
    expand-cmd: paru -Sp --print-format '%n' $TARGETS
lists:
  - name: native
    list-cmd: pacman -Qqe
    remove-cmd: sudo pacman -Rns $PKGS
    default-source: pacman
"#;

    #[test]
    fn test_parse_full_config() {
        let config: ConfigFile = serde_yaml_ng::from_str(FULL).unwrap();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.lists.len(), 1);

        let pacman = config.source("pacman").unwrap();
        assert_eq!(pacman.install_cmd, "sudo pacman -S $PKGS");
        assert!(pacman.default);
        assert!(pacman.expand_cmd.is_none());

        let aur = config.source("aur").unwrap();
        assert!(!aur.default);
        assert!(aur.expand_cmd.is_some());

        let native = config.list("native").unwrap();
        assert_eq!(native.default_source, "pacman");
    }

    #[test]
    fn test_default_source_lookup() {
        let config: ConfigFile = serde_yaml_ng::from_str(FULL).unwrap();
        assert_eq!(config.default_source().unwrap().name, "pacman");
        assert!(config.source("nix").is_none());
        assert!(config.list("flatpak").is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
sources:
  - name: pacman
    list: native
    install-cmd: pacman -S $PKGS
    color: blue
lists: []
"#;
        let err = serde_yaml_ng::from_str::<ConfigFile>(yaml).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let yaml = r#"
sources:
  - name: pacman
    list: native
lists: []
"#;
        let err = serde_yaml_ng::from_str::<ConfigFile>(yaml).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }
}
