//! Desired-state aggregation: manifest entries grouped per source, then
//! mapped onto package lists.

use std::collections::BTreeMap;

use crate::config::ConfigFile;
use crate::error::{Error, Result};
use crate::manifest::ManifestEntry;

/// Raw manifest targets grouped per source name, in manifest order.
///
/// Values are what the manifests literally said. For sources with an
/// expand command these are fed through it before aggregation.
pub type TargetSet = BTreeMap<String, Vec<String>>;

/// Desired package state: list name -> package name -> owning source name.
pub type DesiredState = BTreeMap<String, BTreeMap<String, String>>;

/// Group manifest entries by source, verifying every referenced source
/// exists in the config.
pub fn collect_targets(config: &ConfigFile, entries: &[ManifestEntry]) -> Result<TargetSet> {
    let mut targets = TargetSet::new();
    for entry in entries {
        if config.source(&entry.source).is_none() {
            return Err(Error::unknown_source(&entry.source));
        }
        targets
            .entry(entry.source.clone())
            .or_default()
            .push(entry.package.clone());
    }
    Ok(targets)
}

/// Map per-source targets onto their package lists.
///
/// Each package lands in the list its source installs into. A package
/// claimed twice for the same list is an error naming both claimants.
pub fn build_desired(config: &ConfigFile, targets: &TargetSet) -> Result<DesiredState> {
    let mut desired = DesiredState::new();
    for (source_name, packages) in targets {
        let source = config
            .source(source_name)
            .ok_or_else(|| Error::unknown_source(source_name))?;
        let list = desired.entry(source.list.clone()).or_default();
        for package in packages {
            if let Some(first) = list.get(package) {
                return Err(Error::DuplicatePackage {
                    list: source.list.clone(),
                    package: package.clone(),
                    first: first.clone(),
                    second: source_name.clone(),
                });
            }
            list.insert(package.clone(), source_name.clone());
        }
    }
    Ok(desired)
}
