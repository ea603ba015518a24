use serde::{Deserialize, Serialize};

/// Dictionary name shared by every Power Trio device
pub const DEFAULT_DICTIONARY_NAME: &str = "power_trio_brain";

/// Functional classification of a node, derived from its content text
///
/// The patcher format has no type tag for these roles, so they are inferred
/// once at graph-build time by substring markers (see [`RoleMarkers`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Runs a JavaScript file (`node.script ...`)
    ScriptRunner,
    /// Named dictionary (`dict ---power_trio_brain ...`)
    DictionaryStore,
    /// Message prepender feeding dictionary replies back (`prepend dict_response`)
    Prepender,
    /// Anything else
    Generic,
}

/// Substring markers used to classify node content into a [`Role`]
///
/// Markers are tested in the order script runner, dictionary store,
/// prepender; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMarkers {
    pub script_runner: String,
    pub dictionary_store: String,
    pub prepender: String,
}

impl RoleMarkers {
    /// Markers for a dictionary with the given shared name
    pub fn for_dictionary(name: &str) -> Self {
        Self {
            dictionary_store: format!("dict ---{}", name),
            ..Self::default()
        }
    }

    /// Classify a node's content text
    pub fn classify(&self, content: &str) -> Role {
        if content.contains(&self.script_runner) {
            Role::ScriptRunner
        } else if content.contains(&self.dictionary_store) {
            Role::DictionaryStore
        } else if content.contains(&self.prepender) {
            Role::Prepender
        } else {
            Role::Generic
        }
    }

    /// The marker text for a role (`None` for [`Role::Generic`])
    pub fn marker(&self, role: Role) -> Option<&str> {
        match role {
            Role::ScriptRunner => Some(&self.script_runner),
            Role::DictionaryStore => Some(&self.dictionary_store),
            Role::Prepender => Some(&self.prepender),
            Role::Generic => None,
        }
    }
}

impl Default for RoleMarkers {
    fn default() -> Self {
        Self {
            script_runner: "node.script".to_string(),
            dictionary_store: format!("dict ---{}", DEFAULT_DICTIONARY_NAME),
            prepender: "prepend dict_response".to_string(),
        }
    }
}
