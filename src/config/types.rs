use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-group overrides. A group may appear in the config with no body at
/// all, which means "use the defaults".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Extra label matchers appended to the default filter, verbatim
    /// (e.g. `container!~"job|nginx|POD"`).
    #[serde(default)]
    pub label_args: Option<String>,

    /// Pod keys dropped from the aggregated data before calculation.
    #[serde(default)]
    pub remove_pods: Vec<String>,
}

/// The loaded group configuration: group name to optional overrides.
///
/// Groups iterate in name order, so an all-groups run is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalcConfig {
    pub groups: BTreeMap<String, Option<GroupConfig>>,
}

impl CalcConfig {
    /// Effective config for a group: its overrides, or defaults when the
    /// group is absent or has an empty body.
    pub fn group(&self, name: &str) -> GroupConfig {
        self.groups
            .get(name)
            .and_then(|g| g.clone())
            .unwrap_or_default()
    }

    /// Group names in iteration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
