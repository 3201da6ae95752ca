//! Pure reconciliation of desired state against installed state

use std::collections::{BTreeMap, BTreeSet};

use crate::targets::DesiredState;

/// Installed package state: list name -> set of installed package names.
pub type InstalledState = BTreeMap<String, BTreeSet<String>>;

/// Pending work for one package list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPlan {
    /// Packages to install, grouped by source name, ascending within
    /// each group
    pub install: BTreeMap<String, Vec<String>>,

    /// Packages to remove, ascending
    pub remove: Vec<String>,
}

impl ListPlan {
    fn is_empty(&self) -> bool {
        self.install.is_empty() && self.remove.is_empty()
    }
}

/// The batches that bring installed state in line with desired state.
/// Lists with nothing to do are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub lists: BTreeMap<String, ListPlan>,
}

impl Plan {
    /// True when there is nothing to install or remove
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Install batches merged across lists: one batch per source,
    /// packages ascending
    pub fn installs_by_source(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut merged: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for list in self.lists.values() {
            for (source, packages) in &list.install {
                merged
                    .entry(source)
                    .or_default()
                    .extend(packages.iter().map(String::as_str));
            }
        }
        for packages in merged.values_mut() {
            packages.sort_unstable();
        }
        merged
    }

    /// Removal batches, one per list with removals
    pub fn removals_by_list(&self) -> BTreeMap<&str, &[String]> {
        self.lists
            .iter()
            .filter(|(_, list)| !list.remove.is_empty())
            .map(|(name, list)| (name.as_str(), list.remove.as_slice()))
            .collect()
    }
}

/// Diff desired state against installed state.
///
/// A desired package missing from its list's installed set becomes an
/// install; an installed package absent from the desired map becomes a
/// removal; a package present on both sides is untouched. Lists known
/// to only one side are still reconciled.
pub fn reconcile(desired: &DesiredState, installed: &InstalledState) -> Plan {
    let mut plan = Plan::default();

    let list_names: BTreeSet<&String> = desired.keys().chain(installed.keys()).collect();
    for name in list_names {
        let want = desired.get(name);
        let have = installed.get(name);
        let mut work = ListPlan::default();

        if let Some(want) = want {
            for (package, source) in want {
                if !have.is_some_and(|h| h.contains(package)) {
                    work.install
                        .entry(source.clone())
                        .or_default()
                        .push(package.clone());
                }
            }
        }
        if let Some(have) = have {
            for package in have {
                if !want.is_some_and(|w| w.contains_key(package)) {
                    work.remove.push(package.clone());
                }
            }
        }

        if !work.is_empty() {
            plan.lists.insert(name.clone(), work);
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a desired state from (list, package, source) triples
    fn desired(entries: &[(&str, &str, &str)]) -> DesiredState {
        let mut state = DesiredState::new();
        for (list, package, source) in entries {
            state
                .entry(list.to_string())
                .or_default()
                .insert(package.to_string(), source.to_string());
        }
        state
    }

    /// Build an installed state from (list, packages) pairs
    fn installed(entries: &[(&str, &[&str])]) -> InstalledState {
        let mut state = InstalledState::new();
        for (list, packages) in entries {
            state.insert(
                list.to_string(),
                packages.iter().map(|p| p.to_string()).collect(),
            );
        }
        state
    }

    #[test]
    fn test_overlap_is_untouched() {
        let plan = reconcile(
            &desired(&[("native", "b", "pacman"), ("native", "c", "pacman")]),
            &installed(&[("native", &["a", "b"])]),
        );
        let work = &plan.lists["native"];
        assert_eq!(work.install["pacman"], vec!["c"]);
        assert_eq!(work.remove, vec!["a"]);
    }

    #[test]
    fn test_empty_states_give_empty_plan() {
        let plan = reconcile(&DesiredState::new(), &InstalledState::new());
        assert!(plan.is_empty());
        assert!(plan.installs_by_source().is_empty());
        assert!(plan.removals_by_list().is_empty());
    }

    #[test]
    fn test_converged_state_gives_empty_plan() {
        let plan = reconcile(
            &desired(&[("native", "vim", "pacman"), ("crates", "ripgrep", "cargo")]),
            &installed(&[("native", &["vim"]), ("crates", &["ripgrep"])]),
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_installs_grouped_by_source() {
        let plan = reconcile(
            &desired(&[
                ("native", "vim", "pacman"),
                ("native", "paru", "aur"),
                ("native", "git", "pacman"),
            ]),
            &installed(&[("native", &[])]),
        );
        let work = &plan.lists["native"];
        assert_eq!(work.install["pacman"], vec!["git", "vim"]);
        assert_eq!(work.install["aur"], vec!["paru"]);
        assert!(work.remove.is_empty());
    }

    #[test]
    fn test_list_only_in_installed_is_drained() {
        let plan = reconcile(
            &DesiredState::new(),
            &installed(&[("native", &["vim", "git"])]),
        );
        assert_eq!(plan.lists["native"].remove, vec!["git", "vim"]);
    }

    #[test]
    fn test_list_only_in_desired_is_installed() {
        let plan = reconcile(
            &desired(&[("crates", "ripgrep", "cargo")]),
            &InstalledState::new(),
        );
        assert_eq!(plan.lists["crates"].install["cargo"], vec!["ripgrep"]);
    }

    #[test]
    fn test_batches_are_sorted() {
        let plan = reconcile(
            &desired(&[
                ("native", "zsh", "pacman"),
                ("native", "bat", "pacman"),
                ("native", "fd", "pacman"),
            ]),
            &installed(&[("native", &["yazi", "eza"])]),
        );
        let work = &plan.lists["native"];
        assert_eq!(work.install["pacman"], vec!["bat", "fd", "zsh"]);
        assert_eq!(work.remove, vec!["eza", "yazi"]);
    }

    #[test]
    fn test_reconcile_is_deterministic() {
        let want = desired(&[
            ("native", "vim", "pacman"),
            ("crates", "ripgrep", "cargo"),
            ("native", "paru", "aur"),
        ]);
        let have = installed(&[("native", &["old-tool"]), ("crates", &["ripgrep"])]);
        assert_eq!(reconcile(&want, &have), reconcile(&want, &have));
    }

    #[test]
    fn test_installs_by_source_merges_lists() {
        // One source feeding two lists still gets a single merged batch.
        let plan = reconcile(
            &desired(&[("native", "vim", "pacman"), ("extra", "bat", "pacman")]),
            &InstalledState::new(),
        );
        let merged = plan.installs_by_source();
        assert_eq!(merged["pacman"], vec!["bat", "vim"]);
    }

    #[test]
    fn test_removals_by_list_skips_clean_lists() {
        let plan = reconcile(
            &desired(&[("native", "vim", "pacman"), ("crates", "ripgrep", "cargo")]),
            &installed(&[("native", &["vim", "doomed"]), ("crates", &[])]),
        );
        let removals = plan.removals_by_list();
        assert_eq!(removals.len(), 1);
        assert_eq!(removals["native"], ["doomed"]);
    }
}
