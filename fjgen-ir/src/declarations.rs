use serde::{Deserialize, Serialize};

use crate::{ChoiceSpec, SourceSpec, SpecError};

/// Every generation request of one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declarations {
    #[serde(default)]
    pub structs: Vec<SourceSpec>,
    #[serde(default)]
    pub choices: Vec<ChoiceSpec>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_struct(mut self, spec: SourceSpec) -> Self {
        self.structs.push(spec);
        self
    }

    pub fn with_choice(mut self, spec: ChoiceSpec) -> Self {
        self.choices.push(spec);
        self
    }

    pub fn len(&self) -> usize {
        self.structs.len() + self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structs.is_empty() && self.choices.is_empty()
    }

    /// Full names of every target type, structs first.
    pub fn type_names(&self) -> Vec<String> {
        self.structs
            .iter()
            .map(|s| s.target_type().full_name())
            .chain(self.choices.iter().map(|c| c.target_type().full_name()))
            .collect()
    }

    /// Validate every request and collect all failures.
    pub fn validate(&self) -> Vec<SpecError> {
        self.structs
            .iter()
            .filter_map(|s| s.validate().err())
            .chain(self.choices.iter().filter_map(|c| c.validate().err()))
            .collect()
    }
}
