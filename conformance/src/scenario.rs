//! Named negative scenarios.
//!
//! Each scenario pairs an expected diagnostic fragment with a source
//! snippet that must not compile against the staged run manager. The
//! built-in table is the protocol's enforcement boundary written out:
//! every mandatory step skipped, every ordering violated, plus the
//! single-use rule for consumed stage values.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConformanceError;
use crate::error::Result;

/// One (expected-diagnostic, snippet) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub expected_diagnostic: String,
    pub snippet: String,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        expected_diagnostic: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expected_diagnostic: expected_diagnostic.into(),
            snippet: snippet.into(),
        }
    }

    /// Folder-safe rendition of the scenario name.
    pub fn dir_name(&self) -> String {
        self.name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

/// Insertion-ordered scenario collection with unique names.
#[derive(Debug, Clone, Default)]
pub struct ScenarioTable {
    scenarios: Vec<Scenario>,
}

impl ScenarioTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scenario: Scenario) -> Result<()> {
        if self.scenarios.iter().any(|s| s.name == scenario.name) {
            return Err(ConformanceError::DuplicateScenario {
                name: scenario.name,
            });
        }
        self.scenarios.push(scenario);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

// NAME : (ERROR_MATCH, SNIPPET)
const BUILTIN: &[(&str, &str, &str)] = &[
    (
        "Run manager without anything",
        "no method named 'initialize'",
        r"RunManager::create()
    .initialize();",
    ),
    (
        "Run manager without physics",
        "no method named 'geometry'",
        r"RunManager::create()
    .geometry(dummy_geometry())
    .actions(dummy_actions())
    .initialize();",
    ),
    (
        "Run manager without physics 2",
        "no method named 'actions'",
        r"RunManager::create()
    .actions(dummy_actions())
    .geometry(dummy_geometry())
    .initialize();",
    ),
    (
        "Run manager without geometry",
        "no method named 'initialize'",
        r"RunManager::create()
    .physics(dummy_physics_list())
    .initialize();",
    ),
    (
        "Run manager without geometry 2",
        "no method named 'actions'",
        r"RunManager::create()
    .physics(dummy_physics_list())
    .actions(dummy_actions())
    .initialize();",
    ),
    (
        "Run manager without actions",
        "no method named 'initialize'",
        r"RunManager::create()
    .physics(dummy_physics_list())
    .geometry(dummy_geometry())
    .initialize();",
    ),
    (
        "Run manager wrong order 1",
        "no method named 'geometry'",
        r"RunManager::create()
    .geometry(dummy_geometry())
    .physics(dummy_physics_list())
    .actions(dummy_actions())
    .initialize();",
    ),
    (
        "Run manager wrong order 2",
        "no method named 'actions'",
        r"RunManager::create()
    .actions(dummy_actions())
    .physics(dummy_physics_list())
    .geometry(dummy_geometry())
    .initialize();",
    ),
    (
        "Run manager wrong order 3",
        "no method named 'actions'",
        r"RunManager::create()
    .physics(dummy_physics_list())
    .actions(dummy_actions())
    .geometry(dummy_geometry())
    .initialize();",
    ),
    (
        "Run manager ui only",
        "no method named 'initialize'",
        r#"RunManager::create()
    .ui("scenario-app", &[], false)
    .initialize();"#,
    ),
    (
        "Run manager ui twice",
        "no method named 'ui'",
        r#"RunManager::create()
    .ui("scenario-app", &[], false)
    .ui("scenario-app", &[], false)
    .physics(dummy_physics_list());"#,
    ),
    (
        "Run manager ui after physics",
        "no method named 'ui'",
        r#"RunManager::create()
    .physics(dummy_physics_list())
    .ui("scenario-app", &[], false);"#,
    ),
    (
        "Run manager reuse consumed stage",
        "use of moved value",
        r"let fresh = RunManager::create();
    let _ready = fresh.physics(dummy_physics_list());
    let _again = fresh.physics(dummy_physics_list());",
    ),
];

/// The full negative-scenario table, in reporting order.
pub fn builtin_table() -> ScenarioTable {
    let mut table = ScenarioTable::new();
    for (name, expected, snippet) in BUILTIN {
        if let Err(err) = table.insert(Scenario::new(*name, *expected, *snippet)) {
            unreachable!("builtin scenario table: {err}");
        }
    }
    table
}
