//! Structural validation of a parsed config

use std::collections::HashSet;

use crate::config::types::ConfigFile;
use crate::error::{Error, Result};

/// Check a parsed config for problems serde cannot catch: empty
/// collections, blank command templates, dangling references, duplicate
/// names, and more than one default source.
pub fn validate(config: &ConfigFile) -> Result<()> {
    if config.sources.is_empty() {
        return Err(Error::NoSources);
    }
    if config.lists.is_empty() {
        return Err(Error::NoPackageLists);
    }

    for list in &config.lists {
        if list.list_cmd.is_empty() {
            return Err(Error::missing_field("package list", &list.name, "list-cmd"));
        }
        if list.remove_cmd.is_empty() {
            return Err(Error::missing_field(
                "package list",
                &list.name,
                "remove-cmd",
            ));
        }
        if list.default_source.is_empty() {
            return Err(Error::missing_field(
                "package list",
                &list.name,
                "default-source",
            ));
        }
        if config.source(&list.default_source).is_none() {
            return Err(Error::UnknownDefaultSource {
                list: list.name.clone(),
                source_name: list.default_source.clone(),
            });
        }
    }

    for source in &config.sources {
        if source.install_cmd.is_empty() {
            return Err(Error::missing_field("source", &source.name, "install-cmd"));
        }
        if source.list.is_empty() {
            return Err(Error::missing_field("source", &source.name, "list"));
        }
        if config.list(&source.list).is_none() {
            return Err(Error::UnknownPackageList {
                source_name: source.name.clone(),
                list: source.list.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for list in &config.lists {
        if !seen.insert(list.name.as_str()) {
            return Err(Error::duplicate_name("package list", &list.name));
        }
    }
    seen.clear();
    for source in &config.sources {
        if !seen.insert(source.name.as_str()) {
            return Err(Error::duplicate_name("source", &source.name));
        }
    }

    let mut default: Option<&str> = None;
    for source in &config.sources {
        if source.default {
            if let Some(first) = default {
                return Err(Error::MultipleDefaults {
                    first: first.to_string(),
                    second: source.name.clone(),
                });
            }
            default = Some(&source.name);
        }
    }

    Ok(())
}
