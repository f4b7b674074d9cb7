//! `reference` and `type-reference` element payloads.

use serde_json::Value;

use super::fields::{
    MATCH_TYPE, OVERRIDE_DATE, OVERRIDE_PREVIEW, OVERRIDE_TITLE, OVERRIDE_TYPE, Object,
    TARGET_ASSIGNMENT, TARGET_CLASS, TARGET_COMBINED, TARGET_ID, as_text, first_non_empty,
    first_str,
};

/// Where a reference points, before the route class fills any gap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSpec {
    pub cls: Option<String>,
    pub id: Option<String>,
}

impl TargetSpec {
    /// Read a target from an element (or a nested target object).
    ///
    /// - explicit `targetClass`/`class`/`cls` and `targetId`/`assignmentId`
    ///   win when present;
    /// - a combined object fills whatever is still missing;
    /// - a combined string is `"{cls}/{id}"` split on the first slash, or a
    ///   bare id when it has no slash or an explicit class is given (a
    ///   leading `"{cls}/"` is then dropped);
    /// - `assignment` is a last-resort id.
    pub fn from_object(obj: &Object) -> Self {
        let mut spec = Self {
            cls: first_str(obj, TARGET_CLASS),
            id: first_str(obj, TARGET_ID),
        };

        if spec.id.is_none() {
            match first_non_empty(obj, TARGET_COMBINED) {
                Some(Value::Object(nested)) => {
                    let nested = Self::from_object(nested);
                    spec.cls = spec.cls.or(nested.cls);
                    spec.id = nested.id;
                }
                Some(value) => {
                    if let Some(combined) = as_text(value) {
                        spec.fill_from_combined(&combined);
                    }
                }
                None => {}
            }
        }

        if spec.id.is_none() {
            spec.id = first_str(obj, TARGET_ASSIGNMENT);
        }
        spec
    }

    fn fill_from_combined(&mut self, combined: &str) {
        let combined = combined.trim_matches('/');
        let explicit = self.cls.clone();
        match (explicit.as_deref(), combined.split_once('/')) {
            (Some(cls), _) => {
                let id = combined
                    .strip_prefix(cls)
                    .and_then(|rest| rest.strip_prefix('/'))
                    .unwrap_or(combined);
                self.id = Some(id.to_string());
            }
            (None, Some((cls, id))) if !cls.is_empty() && !id.is_empty() => {
                self.cls = Some(cls.to_string());
                self.id = Some(id.to_string());
            }
            (None, _) => self.id = Some(combined.to_string()),
        }
        if self.id.as_deref().is_some_and(str::is_empty) {
            self.id = None;
        }
    }

    /// `(cls, id)` with the route class as the class fallback.
    pub fn resolve(&self, route_cls: &str) -> Option<(String, String)> {
        let id = self.id.clone()?;
        let cls = self
            .cls
            .clone()
            .or_else(|| (!route_cls.is_empty()).then(|| route_cls.to_string()))?;
        Some((cls, id))
    }
}

/// Field overrides carried by a reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub date: Option<String>,
}

/// A `reference` element: one card for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub label: Option<String>,
    pub target: TargetSpec,
    pub overrides: Overrides,
    /// Element rendered inline instead of the target's own single element.
    pub preview: Option<Value>,
}

impl Reference {
    pub fn from_object(obj: &Object) -> Self {
        let preview = first_non_empty(obj, OVERRIDE_PREVIEW)
            .filter(|value| value.is_object())
            .cloned();
        Self {
            label: obj.get("label").and_then(as_text),
            target: TargetSpec::from_object(obj),
            overrides: Overrides {
                title: first_str(obj, OVERRIDE_TITLE),
                kind: first_str(obj, OVERRIDE_TYPE),
                date: first_str(obj, OVERRIDE_DATE),
            },
            preview,
        }
    }
}

/// A `type-reference` element: cards for every page of one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    pub label: Option<String>,
    /// Type to match, empty when none was given.
    pub kind: String,
}

impl TypeReference {
    pub fn from_object(obj: &Object) -> Self {
        Self {
            label: obj.get("label").and_then(as_text),
            kind: first_str(obj, MATCH_TYPE).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(value: Value) -> TargetSpec {
        TargetSpec::from_object(value.as_object().unwrap())
    }

    fn target(cls: Option<&str>, id: Option<&str>) -> TargetSpec {
        TargetSpec {
            cls: cls.map(String::from),
            id: id.map(String::from),
        }
    }

    #[test]
    fn test_explicit_fields() {
        assert_eq!(
            spec(json!({ "targetClass": "CIM", "class": "DE", "assignmentId": "x" })),
            target(Some("CIM"), Some("x"))
        );
        assert_eq!(spec(json!({ "targetId": "x" })), target(None, Some("x")));
    }

    #[test]
    fn test_combined_string() {
        assert_eq!(
            spec(json!({ "target": "DE/labs/foo" })),
            target(Some("DE"), Some("labs/foo"))
        );
        assert_eq!(spec(json!({ "lookup": "foo" })), target(None, Some("foo")));
        assert_eq!(
            spec(json!({ "cls": "DE", "reference": "DE/labs/foo" })),
            target(Some("DE"), Some("labs/foo"))
        );
        assert_eq!(
            spec(json!({ "cls": "DE", "value": "labs/foo" })),
            target(Some("DE"), Some("labs/foo"))
        );
    }

    #[test]
    fn test_combined_object() {
        assert_eq!(
            spec(json!({ "target": { "class": "EDD", "targetId": "cube" } })),
            target(Some("EDD"), Some("cube"))
        );
        assert_eq!(
            spec(json!({ "cls": "DE", "target": { "class": "EDD", "targetId": "cube" } })),
            target(Some("DE"), Some("cube"))
        );
    }

    #[test]
    fn test_assignment_fallback() {
        let s = spec(json!({ "assignment": "1.1.9" }));
        assert_eq!(s, target(None, Some("1.1.9")));
        assert_eq!(s.resolve("DE"), Some(("DE".into(), "1.1.9".into())));
        assert_eq!(s.resolve(""), None);
    }

    #[test]
    fn test_nothing_resolves() {
        assert_eq!(spec(json!({ "label": "x" })).resolve("DE"), None);
        assert_eq!(spec(json!({ "target": "/" })).resolve("DE"), None);
    }

    #[test]
    fn test_reference_overrides() {
        let obj = json!({
            "type": "reference",
            "target": "DE/a",
            "entryTitle": "Custom",
            "targetType": "Lab",
            "date": "2025-01-01",
            "preview": { "type": "synopsis", "content": "hi" }
        });
        let reference = Reference::from_object(obj.as_object().unwrap());
        assert_eq!(reference.overrides.title.as_deref(), Some("Custom"));
        assert_eq!(reference.overrides.kind.as_deref(), Some("Lab"));
        assert_eq!(reference.overrides.date.as_deref(), Some("2025-01-01"));
        assert!(reference.preview.is_some());
    }

    #[test]
    fn test_type_reference_match_priority() {
        let obj = json!({ "label": "Labs", "targetType": "Lab" });
        let tr = TypeReference::from_object(obj.as_object().unwrap());
        assert_eq!(tr.kind, "Lab");
        let obj = json!({ "label": "Project" });
        assert_eq!(TypeReference::from_object(obj.as_object().unwrap()).kind, "Project");
        let obj = json!({});
        assert_eq!(TypeReference::from_object(obj.as_object().unwrap()).kind, "");
    }
}
