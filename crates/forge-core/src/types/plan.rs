//! Test plan, test cases, and generated code.
//!
//! This module provides the result-side domain types: [`TestCase`] for a
//! single planned scenario, [`CaseKind`] for its category, and
//! [`GenerationResult`] for the full response payload (ordered plan plus
//! a per-case code mapping).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Category of a planned test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum CaseKind {
    /// Happy-path test against a valid request.
    #[default]
    Positive,
    /// Invalid-input test expecting a 4xx response.
    Negative,
    /// Boundary-value test.
    Boundary,
    /// Any category this client does not recognize.
    ///
    /// Kept tolerant so a newer service cannot break result browsing.
    #[serde(other)]
    Unknown,
}

impl CaseKind {
    /// Returns a human-readable label for this kind.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Boundary => "Boundary",
            Self::Unknown => "Other",
        }
    }
}

/// One planned test scenario returned by the generation service.
///
/// Identity is `id`; ordering is the order the service returned the
/// cases in (never re-sorted by this client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Unique identifier of this case within its plan.
    pub id: String,

    /// Short case name.
    pub name: String,

    /// Longer description of what the case covers.
    #[serde(default)]
    pub description: String,

    /// Case category (wire name `type`).
    #[serde(rename = "type", default)]
    pub kind: CaseKind,

    /// API endpoint path under test.
    #[serde(default)]
    pub endpoint: String,

    /// HTTP method under test.
    #[serde(default)]
    pub method: String,

    /// Expected HTTP status code.
    #[serde(default)]
    pub expected_status: u16,

    /// Free-form description of required test data, when the service
    /// provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_requirements: Option<String>,
}

/// The full response payload of a completed generation: the ordered test
/// plan plus per-case generated code.
///
/// `generated_code` may contain fewer entries than `test_plan`: a case
/// with no code yet is a valid, non-error state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Planned test cases, in service order.
    #[serde(default)]
    pub test_plan: Vec<TestCase>,

    /// Mapping from case id to generated source code.
    #[serde(default)]
    pub generated_code: FxHashMap<String, String>,
}

impl GenerationResult {
    /// Returns the id of the first planned case, if any.
    ///
    /// This is the initial selection after a generation completes.
    #[must_use]
    pub fn first_case_id(&self) -> Option<&str> {
        self.test_plan.first().map(|case| case.id.as_str())
    }

    /// Returns the case with the given id, if present in the plan.
    #[must_use]
    pub fn case(&self, id: &str) -> Option<&TestCase> {
        self.test_plan.iter().find(|case| case.id == id)
    }

    /// Resolves the code snippet to display for the given selection.
    ///
    /// Resolution order:
    ///
    /// 1. the selected id, when it has code;
    /// 2. the first case in plan order that has code (plan order keeps
    ///    the fallback deterministic — the code map itself has no stable
    ///    iteration order);
    /// 3. `None`, meaning "no code generated" should be shown.
    ///
    /// A stale or absent selection therefore never produces an error
    /// state while any code exists at all.
    #[must_use]
    pub fn code_for(&self, selected: Option<&str>) -> Option<&str> {
        if let Some(id) = selected {
            if let Some(code) = self.generated_code.get(id) {
                return Some(code.as_str());
            }
        }

        self.test_plan
            .iter()
            .find_map(|case| self.generated_code.get(case.id.as_str()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(id: &str) -> TestCase {
        TestCase {
            id: id.to_owned(),
            name: format!("case {id}"),
            description: String::new(),
            kind: CaseKind::Positive,
            endpoint: "/pets".to_owned(),
            method: "GET".to_owned(),
            expected_status: 200,
            data_requirements: None,
        }
    }

    fn result_with(plan: &[&str], code: &[(&str, &str)]) -> GenerationResult {
        GenerationResult {
            test_plan: plan.iter().map(|id| case(id)).collect(),
            generated_code: code
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }

    #[test]
    fn test_first_case_id() {
        let result = result_with(&["t1", "t2"], &[]);
        assert_eq!(result.first_case_id(), Some("t1"));

        let empty = GenerationResult::default();
        assert_eq!(empty.first_case_id(), None);
    }

    #[test]
    fn test_code_for_selected_case() {
        let result = result_with(&["t1", "t2"], &[("t1", "curl ..."), ("t2", "code2")]);
        assert_eq!(result.code_for(Some("t2")), Some("code2"));
    }

    #[test]
    fn test_code_for_falls_back_in_plan_order() {
        // Selection points at a case without code; the first case that
        // has code wins.
        let result = result_with(&["t1", "t2"], &[("t2", "code2")]);
        assert_eq!(result.code_for(Some("t1")), Some("code2"));
        assert_eq!(result.code_for(None), Some("code2"));
    }

    #[test]
    fn test_code_for_empty_mapping() {
        let result = result_with(&["t1"], &[]);
        assert_eq!(result.code_for(Some("t1")), None);
        assert_eq!(result.code_for(None), None);
    }

    #[test]
    fn test_code_for_never_empty_when_code_exists() {
        let result = result_with(&["t1", "t2", "t3"], &[("t3", "code3")]);
        // Stale selection, missing selection, selection without code:
        // all resolve to something.
        for selected in [Some("gone"), Some("t2"), None] {
            assert_eq!(result.code_for(selected), Some("code3"));
        }
    }

    #[test]
    fn test_case_kind_tolerates_unknown_values() {
        let kind: CaseKind = serde_json::from_str(r#""fuzz""#).unwrap();
        assert_eq!(kind, CaseKind::Unknown);
    }

    #[test]
    fn test_test_case_deserializes_wire_shape() {
        let json = r#"{
            "id": "t1",
            "name": "Create pet",
            "description": "POST a valid pet",
            "type": "positive",
            "endpoint": "/pets",
            "method": "POST",
            "expected_status": 201,
            "data_requirements": "a unique pet name"
        }"#;
        let case: TestCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.kind, CaseKind::Positive);
        assert_eq!(case.expected_status, 201);
        assert_eq!(case.data_requirements.as_deref(), Some("a unique pet name"));
    }

    #[test]
    fn test_result_deserializes_with_partial_code_map() {
        let json = r#"{
            "test_plan": [
                {"id": "t1", "name": "a", "type": "positive"},
                {"id": "t2", "name": "b", "type": "negative"}
            ],
            "generated_code": {"t2": "curl -X POST ..."}
        }"#;
        let result: GenerationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.test_plan.len(), 2);
        assert_eq!(result.generated_code.len(), 1);
        assert_eq!(result.code_for(Some("t1")), Some("curl -X POST ..."));
    }
}
