//! Materialization of isolated scenario projects.
//!
//! Every scenario compiles in its own directory with its own manifest and
//! target tree, so build artifacts and partial state never leak between
//! scenarios and execution order cannot affect verdicts.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::error::ConformanceError;
use crate::error::Result;
use crate::scenario::Scenario;

const MAIN_TEMPLATE: &str = r"mod common;

#[allow(unused_imports)]
use common::*;
use runstage_core::RunManager;

fn main() {
    {snippet}
}
";

// Stand-in configuration values, the analogue of the opaque geometry,
// physics and actions objects a real application would supply.
const COMMON_SOURCE: &str = r#"#![allow(dead_code)]

use runstage_core::Actions;
use runstage_core::Event;
use runstage_core::Geometry;
use runstage_core::PhysicsList;
use runstage_core::WorldVolume;

pub struct DummyGeometry;

impl Geometry for DummyGeometry {
    fn construct(&self) -> WorldVolume {
        WorldVolume::new("box").with_half_extents([1.0, 1.0, 1.0])
    }
}

pub struct DummyPhysicsList;

impl PhysicsList for DummyPhysicsList {
    fn label(&self) -> &str {
        "reference-physics"
    }
}

pub struct DummyActions;

impl Actions for DummyActions {
    fn generate_primaries(&self, event: &mut Event) {
        event.add_primary("geantino", [1.0, 0.0, 0.0]);
    }
}

pub fn dummy_geometry() -> DummyGeometry {
    DummyGeometry
}

pub fn dummy_physics_list() -> DummyPhysicsList {
    DummyPhysicsList
}

pub fn dummy_actions() -> DummyActions {
    DummyActions
}
"#;

/// Resolve the core crate directory to an absolute path.
///
/// Scenario manifests embed this path, so it must exist before any
/// project is written.
pub fn resolve_core_dir(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .map_err(|_| ConformanceError::MissingCoreDir(path.to_path_buf()))
}

/// An on-disk Cargo project holding one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioProject {
    pub root: PathBuf,
}

/// Write the scenario project under `parent`.
pub fn materialize(scenario: &Scenario, parent: &Path, core_dir: &Path) -> Result<ScenarioProject> {
    let root = parent.join(scenario.dir_name());
    fs::create_dir_all(root.join("src"))?;

    fs::write(root.join("Cargo.toml"), manifest(core_dir))?;
    fs::write(root.join("src").join("main.rs"), main_source(scenario))?;
    fs::write(root.join("src").join("common.rs"), COMMON_SOURCE)?;

    debug!(scenario = %scenario.name, root = %root.display(), "scenario project written");
    Ok(ScenarioProject { root })
}

fn manifest(core_dir: &Path) -> String {
    format!(
        r"[package]
name = 'protocol-scenario'
version = '0.0.0'
edition = '2024'
publish = false

[dependencies]
runstage-core = {{ path = '{}' }}

[workspace]
",
        core_dir.display()
    )
}

fn main_source(scenario: &Scenario) -> String {
    MAIN_TEMPLATE.replace("{snippet}", &scenario.snippet)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Scenario {
        Scenario::new(
            "Sample scenario",
            "no method named 'initialize'",
            "RunManager::create()\n    .initialize();",
        )
    }

    #[test]
    fn writes_a_complete_cargo_project() {
        let scratch = tempfile::tempdir().unwrap();
        let project = materialize(&sample(), scratch.path(), Path::new("/some/core")).unwrap();

        assert_eq!(project.root, scratch.path().join("sample_scenario"));
        assert!(project.root.join("Cargo.toml").is_file());
        assert!(project.root.join("src").join("main.rs").is_file());
        assert!(project.root.join("src").join("common.rs").is_file());
    }

    #[test]
    fn main_embeds_the_snippet_inside_the_template() {
        let source = main_source(&sample());

        assert!(source.contains("mod common;"));
        assert!(source.contains("fn main() {"));
        assert!(source.contains("RunManager::create()\n    .initialize();"));
        assert!(!source.contains("{snippet}"));
    }

    #[test]
    fn manifest_points_at_the_core_crate() {
        let manifest = manifest(Path::new("/workspace/core"));

        assert!(manifest.contains("runstage-core = { path = '/workspace/core' }"));
        assert!(manifest.contains("[workspace]"));
    }

    #[test]
    fn missing_core_dir_is_reported_as_such() {
        let err = resolve_core_dir(Path::new("/definitely/not/a/core/crate")).unwrap_err();
        assert!(matches!(err, ConformanceError::MissingCoreDir(_)));
    }

    #[test]
    fn common_defines_every_dummy_input() {
        for needle in ["dummy_geometry", "dummy_physics_list", "dummy_actions"] {
            assert!(COMMON_SOURCE.contains(needle));
        }
    }
}
