//! Dependency installation integration tests
//!
//! Tests the recursive installer including:
//! - Idempotent reinstall
//! - Circular dependency detection
//! - Diamond dependency deduplication
//! - Fetch failure isolation
//! - Declaration-order traversal

mod common;

use common::*;
use drip_modules::{InstallError, ModuleReference, NodeStatus};

#[cfg(test)]
mod install_tests {
    use super::*;

    #[test]
    fn test_install_requires_project() {
        let project = TestProject::without_manifest();
        let fetcher = FakeFetcher::new().module("A", &[]);

        let err = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("A")))
            .unwrap_err();

        assert!(matches!(err, InstallError::ProjectNotFound { .. }));
        assert_eq!(fetcher.total_fetches(), 0);
    }

    #[test]
    fn test_install_chain_records_edges() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new()
            .module("A", &["B"])
            .module("B", &["C"])
            .module("C", &[]);

        let report = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("A")))
            .unwrap();

        assert!(report.is_complete());
        assert_eq!(report.root.names(), vec!["A", "B", "C"]);

        let manifest = project.manifest();
        assert_dependencies(&manifest, "A", &["B"]);
        assert_dependencies(&manifest, "B", &["C"]);
        assert_dependencies(&manifest, "C", &[]);
        assert_consistent(&manifest);

        let record = manifest.module("B").unwrap();
        assert_eq!(record.source, locator("B"));
        assert_eq!(record.version, "latest");
        assert_eq!(record.installed, install_date());
        assert!(project.is_on_disk("C"));
    }

    #[test]
    fn test_install_is_idempotent() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new()
            .module("A", &["B", "C"])
            .module("B", &[])
            .module("C", &[]);

        project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("A")))
            .unwrap();
        let first_text = project.manifest_text();
        let first_fetches = fetcher.total_fetches();

        let report = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("A")))
            .unwrap();

        assert_eq!(fetcher.total_fetches(), first_fetches);
        assert_eq!(project.manifest_text(), first_text);
        assert_eq!(report.root.status, NodeStatus::AlreadyInstalled);
        assert!(report
            .root
            .children
            .iter()
            .all(|child| child.status == NodeStatus::AlreadyInstalled));
    }

    #[test]
    fn test_cycle_is_reported_with_full_path() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new()
            .module("A", &["B"])
            .module("B", &["C"])
            .module("C", &["A"]);

        let err = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("A")))
            .unwrap_err();

        match err {
            InstallError::CircularDependency { path } => assert_eq!(path, "A -> B -> C -> A"),
            other => panic!("Expected a circular dependency, got: {}", other),
        }
        assert_eq!(fetcher.fetch_count("A"), 1);
    }

    #[test]
    fn test_cycle_aborts_remaining_siblings() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new()
            .module("root", &["loop1", "after"])
            .module("loop1", &["loop2"])
            .module("loop2", &["loop1"])
            .module("after", &[]);

        let err = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("root")))
            .unwrap_err();

        assert!(matches!(err, InstallError::CircularDependency { .. }));
        assert_eq!(fetcher.fetch_count("after"), 0);

        // Modules recorded before the cycle was found stay recorded
        let manifest = project.manifest();
        assert!(manifest.has_module("root"));
        assert!(manifest.has_module("loop1"));
        assert!(manifest.has_module("loop2"));
        assert_not_recorded(&manifest, "after");
    }

    #[test]
    fn test_diamond_fetches_shared_dependency_once() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new()
            .module("A", &["B", "C"])
            .module("B", &["D"])
            .module("C", &["D"])
            .module("D", &[]);

        let report = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("A")))
            .unwrap();

        assert_eq!(fetcher.fetch_count("D"), 1);
        assert_eq!(fetcher.total_fetches(), 4);

        let manifest = project.manifest();
        assert_dependencies(&manifest, "A", &["B", "C"]);
        assert_dependencies(&manifest, "B", &["D"]);
        assert_dependencies(&manifest, "C", &["D"]);
        assert_eq!(manifest.modules.len(), 4);
        assert_consistent(&manifest);

        let c = &report.root.children[1];
        assert_eq!(c.name, "C");
        assert_eq!(c.children[0].status, NodeStatus::AlreadyVisited);
    }

    #[test]
    fn test_fetch_failure_is_isolated_to_its_branch() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new()
            .module("A", &["B", "C"])
            .module("B", &[])
            .failing("C");

        let report = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("A")))
            .unwrap();

        assert!(!report.is_complete());
        assert!(matches!(
            report.last_failure(),
            Some(InstallError::FetchFailure { name, .. }) if name == "C"
        ));

        let manifest = project.manifest();
        assert_dependencies(&manifest, "A", &["B"]);
        assert_not_recorded(&manifest, "C");
        assert!(!project.is_on_disk("C"));
        assert_consistent(&manifest);
    }

    #[test]
    fn test_failed_module_is_not_recorded_through_a_second_parent() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new()
            .module("A", &["B", "C"])
            .module("B", &["D"])
            .module("C", &["D"])
            .failing("D");

        let report = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("A")))
            .unwrap();

        assert_eq!(fetcher.fetch_count("D"), 1);
        assert_eq!(report.failures.len(), 2);

        let manifest = project.manifest();
        assert_dependencies(&manifest, "B", &[]);
        assert_dependencies(&manifest, "C", &[]);
        assert_consistent(&manifest);
    }

    #[test]
    fn test_dependencies_follow_declaration_order() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new()
            .module("app", &["zlib", "alpha", "mid"])
            .module("zlib", &[])
            .module("alpha", &[])
            .module("mid", &[]);

        project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("app")))
            .unwrap();

        let order: Vec<String> = fetcher.calls().into_iter().map(|c| c.locator).collect();
        assert_eq!(
            order,
            vec![
                locator("app"),
                locator("zlib"),
                locator("alpha"),
                locator("mid")
            ]
        );
        assert_dependencies(&project.manifest(), "app", &["zlib", "alpha", "mid"]);
    }

    #[test]
    fn test_declared_versions_are_passed_to_fetcher() {
        let project = TestProject::new();
        let manifest = format!(
            "[modules.B]\nsource = \"{}\"\nversion = \"v2.1\"\n\n[modules.nolocator]\nversion = \"v1\"\n",
            locator("B")
        );
        let fetcher = FakeFetcher::new()
            .module_with_manifest("A", &manifest)
            .module("B", &[]);

        project
            .walker(&fetcher)
            .install(&ModuleReference::new(locator("A"), Some("main".into())))
            .unwrap();

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].version.as_deref(), Some("main"));
        assert_eq!(calls[1].version.as_deref(), Some("v2.1"));
        assert_eq!(calls[1].destination, project.layout().module_dir("B"));

        let manifest = project.manifest();
        assert_eq!(manifest.module("A").unwrap().version, "main");
        assert_eq!(manifest.module("B").unwrap().version, "v2.1");
        assert_dependencies(&manifest, "A", &["B"]);
    }

    #[test]
    fn test_first_version_wins() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new().module("json", &[]);

        project
            .walker(&fetcher)
            .install(&ModuleReference::new(locator("json"), Some("v1".into())))
            .unwrap();
        project
            .walker(&fetcher)
            .install(&ModuleReference::new(locator("json"), Some("v2".into())))
            .unwrap();

        assert_eq!(fetcher.total_fetches(), 1);
        assert_eq!(project.manifest().module("json").unwrap().version, "v1");
    }

    #[test]
    fn test_colliding_locators_share_identity() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new().module("json", &[]);

        project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("json")))
            .unwrap();

        let fork = "https://other.example/fork/json";
        let report = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(fork))
            .unwrap();

        assert_eq!(report.root.status, NodeStatus::AlreadyInstalled);
        assert_eq!(project.manifest().module("json").unwrap().source, locator("json"));
    }

    #[test]
    fn test_root_fetch_failure_is_an_error() {
        let project = TestProject::new();
        let fetcher = FakeFetcher::new().failing("A");

        let err = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("A")))
            .unwrap_err();

        assert!(matches!(err, InstallError::FetchFailure { .. }));
        assert!(project.manifest().modules.is_empty());
    }

    #[test]
    fn test_unusable_dependency_locator_is_isolated_to_its_branch() {
        let project = TestProject::new();
        let manifest = format!(
            "[modules.B]\nsource = \"{}\"\n\n[modules.bad]\nsource = \"https://git.example/.git\"\n\n[modules.C]\nsource = \"{}\"\n",
            locator("B"),
            locator("C")
        );
        let fetcher = FakeFetcher::new()
            .module_with_manifest("A", &manifest)
            .module("B", &[])
            .module("C", &[]);

        let report = project
            .walker(&fetcher)
            .install(&ModuleReference::latest(locator("A")))
            .unwrap();

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.last_failure(),
            Some(InstallError::InvalidLocator { locator }) if locator == "https://git.example/.git"
        ));
        assert!(fetcher
            .calls()
            .iter()
            .all(|call| call.locator != "https://git.example/.git"));

        let manifest = project.manifest();
        assert_dependencies(&manifest, "A", &["B", "C"]);
        assert_eq!(manifest.modules.len(), 3);
        assert!(project.is_on_disk("B"));
        assert!(project.is_on_disk("C"));
        assert_consistent(&manifest);
    }
}
