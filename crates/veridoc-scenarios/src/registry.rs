//! The static scenario registry.
//!
//! Scenarios are registered in plain code in [`SCENARIOS`]; there is no
//! runtime discovery. Selection mirrors the CLI contract: explicit names
//! keep their provided order (optionally filtered by category), while a
//! pure category selection is sorted alphabetically.

use std::fmt;
use std::str::FromStr;

use veridoc_types::Node;

use crate::error::ScenarioError;
use crate::generation;

/// Grouping of scenarios selectable as a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Scenarios checking that a generator produces a conformant document.
    Generation,
}

impl Category {
    /// All known categories.
    pub const ALL: &'static [Category] = &[Category::Generation];

    /// The CLI name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Generation => "generation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| ScenarioError::UnknownCategory {
                name: s.to_string(),
                known: known_categories(),
            })
    }
}

/// One registered conformance scenario.
#[derive(Debug)]
pub struct Scenario {
    /// Name used to select the scenario from the CLI.
    pub name: &'static str,
    /// One-line description for listings.
    pub description: &'static str,
    /// The batch this scenario belongs to.
    pub category: Category,
    build: fn() -> Node,
}

impl Scenario {
    /// Build the reference document a candidate is compared against.
    pub fn reference_document(&self) -> Node {
        (self.build)()
    }
}

/// The registry, sorted by scenario name.
static SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "generationBaselineSbomTest",
        description: "the smallest package-centric SBOM with analysis turned off",
        category: Category::Generation,
        build: generation::baseline_sbom,
    },
    Scenario {
        name: "generationDocumentTest",
        description: "document-level properties: creators, comments, annotations, external refs",
        category: Category::Generation,
        build: generation::document,
    },
    Scenario {
        name: "generationExtractedLicenseInfoTest",
        description: "extracted licensing info referenced from a file",
        category: Category::Generation,
        build: generation::extracted_license_info,
    },
    Scenario {
        name: "generationFileTest",
        description: "a file carrying the full set of file-level properties",
        category: Category::Generation,
        build: generation::file,
    },
    Scenario {
        name: "generationLicenseTest",
        description: "license expressions across files, a snippet, and a package",
        category: Category::Generation,
        build: generation::license,
    },
    Scenario {
        name: "generationMinimalTest",
        description: "the smallest conformant document describing one file",
        category: Category::Generation,
        build: generation::minimal,
    },
    Scenario {
        name: "generationPackageTest",
        description: "a package carrying the full set of package-level properties",
        category: Category::Generation,
        build: generation::package,
    },
    Scenario {
        name: "generationRelationshipTest",
        description: "two files connected by relationships",
        category: Category::Generation,
        build: generation::relationship,
    },
    Scenario {
        name: "generationSnippetTest",
        description: "a snippet with ranges and an annotation",
        category: Category::Generation,
        build: generation::snippet,
    },
];

/// All registered scenarios, sorted by name.
pub fn all() -> &'static [Scenario] {
    SCENARIOS
}

/// Look up a scenario by name.
pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.name == name)
}

/// All scenarios in a category, sorted by name.
pub fn by_category(category: Category) -> Vec<&'static Scenario> {
    SCENARIOS
        .iter()
        .filter(|scenario| scenario.category == category)
        .collect()
}

/// Resolve a selection of scenario names and/or category names.
///
/// Names are resolved in the provided order; when categories are also
/// given they act as a filter on the named scenarios. A selection by
/// categories alone is sorted alphabetically. An empty selection is an
/// error.
pub fn select(
    names: &[String],
    categories: &[String],
) -> Result<Vec<&'static Scenario>, ScenarioError> {
    if names.is_empty() && categories.is_empty() {
        return Err(ScenarioError::EmptySelection);
    }

    let parsed_categories = categories
        .iter()
        .map(|name| name.parse::<Category>())
        .collect::<Result<Vec<_>, _>>()?;

    if names.is_empty() {
        let mut selected: Vec<&'static Scenario> = SCENARIOS
            .iter()
            .filter(|scenario| parsed_categories.contains(&scenario.category))
            .collect();
        selected.sort_by_key(|scenario| scenario.name);
        return Ok(selected);
    }

    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        let scenario = find(name).ok_or_else(|| ScenarioError::UnknownScenario {
            name: name.clone(),
            known: known_scenarios(),
        })?;
        selected.push(scenario);
    }
    if !parsed_categories.is_empty() {
        selected.retain(|scenario| parsed_categories.contains(&scenario.category));
    }
    Ok(selected)
}

fn known_scenarios() -> String {
    SCENARIOS
        .iter()
        .map(|scenario| scenario.name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn known_categories() -> String {
    Category::ALL
        .iter()
        .map(Category::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_sorted_by_name() {
        let names: Vec<&str> = SCENARIOS.iter().map(|s| s.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn find_known_scenario() {
        let scenario = find("generationMinimalTest").unwrap();
        assert_eq!(scenario.category, Category::Generation);
        assert!(!scenario.reference_document().is_missing());
    }

    #[test]
    fn find_unknown_scenario() {
        assert!(find("nope").is_none());
    }

    #[test]
    fn category_roundtrip() {
        assert_eq!("generation".parse::<Category>().unwrap(), Category::Generation);
        assert_eq!(Category::Generation.to_string(), "generation");
    }

    #[test]
    fn unknown_category_lists_known_ones() {
        let err = "conversion".parse::<Category>().unwrap_err();
        assert_eq!(
            err,
            ScenarioError::UnknownCategory {
                name: "conversion".into(),
                known: "generation".into(),
            }
        );
    }

    #[test]
    fn select_by_names_keeps_order() {
        let selected = select(
            &["generationSnippetTest".into(), "generationMinimalTest".into()],
            &[],
        )
        .unwrap();
        let names: Vec<&str> = selected.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["generationSnippetTest", "generationMinimalTest"]);
    }

    #[test]
    fn select_by_category_is_sorted() {
        let selected = select(&[], &["generation".into()]).unwrap();
        assert_eq!(selected.len(), SCENARIOS.len());
        assert_eq!(selected[0].name, "generationBaselineSbomTest");
    }

    #[test]
    fn categories_filter_named_selection() {
        let selected = select(&["generationMinimalTest".into()], &["generation".into()]).unwrap();
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn empty_selection_is_an_error() {
        assert!(matches!(select(&[], &[]), Err(ScenarioError::EmptySelection)));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = select(&["bogus".into()], &[]).unwrap_err();
        assert!(matches!(err, ScenarioError::UnknownScenario { name, .. } if name == "bogus"));
    }
}
