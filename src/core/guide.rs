//! Immutable guide definitions supplied by a content source.
//!
//! A guide is an ordered, non-empty list of steps. Only the step count and
//! ordering matter to navigation; display fields are carried through untouched
//! for whoever renders them.

use super::error::{ContentIssue, GuideError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// One unit of a guide.
///
/// Everything except `id` is opaque to progress tracking and navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub expected_result: String,
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl Step {
    /// Create a step with an id and title and no other content.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            instruction: String::new(),
            expected_result: String::new(),
            equipment: Vec::new(),
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn with_expected_result(mut self, expected: impl Into<String>) -> Self {
        self.expected_result = expected.into();
        self
    }

    pub fn with_equipment<I, T>(mut self, equipment: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.equipment = equipment.into_iter().map(Into::into).collect();
        self
    }
}

/// Raw guide shape as it arrives from a content source, before validation.
#[derive(Deserialize)]
struct RawGuide {
    id: String,
    steps: Vec<Step>,
}

/// A validated guide: a non-empty id and at least one step.
///
/// Construction is the only place content is checked. Once a value exists,
/// `step_count()` is at least 1 and `last_index()` is always valid.
///
/// # Example
///
/// ```rust
/// use waymark::core::{GuideDefinition, Step};
///
/// let guide = GuideDefinition::new(
///     "continuity-r1-r2",
///     vec![
///         Step::new("isolate", "Safe isolation"),
///         Step::new("link", "Link line and cpc"),
///         Step::new("measure", "Measure at each point"),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(guide.step_count(), 3);
/// assert_eq!(guide.last_index(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GuideDefinition {
    id: String,
    steps: Vec<Step>,
}

impl GuideDefinition {
    /// Validate and build a guide, reporting every content issue at once.
    pub fn new(id: impl Into<String>, steps: Vec<Step>) -> Result<Self, GuideError> {
        let id = id.into();
        match validate(&id, &steps) {
            Validation::Success(_) => Ok(Self { id, steps }),
            Validation::Failure(issues) => {
                Err(GuideError::Invalid(issues.iter().cloned().collect()))
            }
        }
    }

    /// Parse a guide from JSON content and validate it.
    pub fn from_json(json: &str) -> Result<Self, GuideError> {
        let raw: RawGuide = serde_json::from_str(json)?;
        Self::new(raw.id, raw.steps)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Number of steps, always at least 1.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the final step.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.steps.len()
    }
}

fn validate(id: &str, steps: &[Step]) -> Validation<(), NonEmptyVec<ContentIssue>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ContentIssue>>> = Vec::new();

    if id.trim().is_empty() {
        checks.push(Validation::fail(ContentIssue::EmptyGuideId));
    }

    if steps.is_empty() {
        checks.push(Validation::fail(ContentIssue::NoSteps));
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, step) in steps.iter().enumerate() {
        if step.id.trim().is_empty() {
            checks.push(Validation::fail(ContentIssue::EmptyStepId { index }));
            continue;
        }
        if let Some(&first) = seen.get(step.id.as_str()) {
            checks.push(Validation::fail(ContentIssue::DuplicateStepId {
                id: step.id.clone(),
                first,
                duplicate: index,
            }));
        } else {
            seen.insert(step.id.as_str(), index);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
