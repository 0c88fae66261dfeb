//! Build resource types
//!
//! The concrete resource versions a build consumed and produced.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inputs and outputs of a single build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInputsOutputs {
    #[serde(default)]
    pub inputs: Vec<PublicBuildInput>,
    #[serde(default)]
    pub outputs: Vec<PublicBuildOutput>,
}

/// A resource version fetched as a build input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicBuildInput {
    pub name: String,
    pub resource: String,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub version: Version,
    #[serde(default)]
    pub metadata: Vec<MetadataField>,
    /// True when this build is the first to use this version
    #[serde(default)]
    pub first_occurrence: bool,
}

/// A resource version put by a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicBuildOutput {
    pub resource: String,
    #[serde(default)]
    pub version: Version,
}

/// Resource version, kept sorted by key so output is stable
pub type Version = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataField {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_build_resources() {
        let json = r#"{
            "inputs": [{
                "name": "src",
                "resource": "repo",
                "type": "git",
                "version": {"ref": "abc123"},
                "metadata": [{"name": "author", "value": "someone"}],
                "first_occurrence": true
            }],
            "outputs": [{"resource": "image", "version": {"digest": "sha256:1"}}]
        }"#;

        let resources: BuildInputsOutputs = serde_json::from_str(json).unwrap();
        let input = &resources.inputs[0];
        assert_eq!(input.resource_type, "git");
        assert_eq!(input.version.get("ref").map(String::as_str), Some("abc123"));
        assert_eq!(input.metadata[0].name, "author");
        assert_eq!(resources.outputs.len(), 1);
    }

    #[test]
    fn test_empty_object_yields_no_inputs() {
        let resources: BuildInputsOutputs = serde_json::from_str("{}").unwrap();
        assert_eq!(resources, BuildInputsOutputs::default());
    }
}
