use serde::Deserialize;
use utoipa::ToSchema;

/// Create payload. Every field is optional at the deserialization layer so
/// that missing-field reporting stays in one place (`missing_fields`) and
/// can name all absent fields at once instead of failing on the first.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
}

const REQUIRED_ON_CREATE: [&str; 4] = ["code", "name", "category", "description"];

impl CreateProductRequest {
    /// Names of required fields that are absent or empty, in declaration
    /// order. An empty string counts as missing, matching the web form
    /// behavior where untouched inputs submit as `""`.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            self.code.as_deref(),
            self.name.as_deref(),
            self.category.as_deref(),
            self.description.as_deref(),
        ];
        REQUIRED_ON_CREATE
            .iter()
            .zip(values)
            .filter(|(_, v)| v.is_none_or(str::is_empty))
            .map(|(name, _)| *name)
            .collect()
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
}

/// Fields to apply in a partial update. Only present-and-non-empty request
/// values make it in; a field submitted as `""` is treated as not provided,
/// so update cannot clear a field to empty. Questionable contract, but it is
/// the documented one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
}

impl UpdateProductRequest {
    /// True when no updatable field appears in the body at all (empty
    /// strings still count as present here; they only drop out of the
    /// patch).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.brand.is_none()
            && self.kind.is_none()
            && self.description.is_none()
    }

    pub fn into_patch(self) -> ProductPatch {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }
        ProductPatch {
            name: keep(self.name),
            category: keep(self.category),
            brand: keep(self.brand),
            kind: keep(self.kind),
            description: keep(self.description),
        }
    }
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.brand.is_none()
            && self.kind.is_none()
            && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_from_json(value: serde_json::Value) -> CreateProductRequest {
        serde_json::from_value(value).expect("deserialize create request")
    }

    fn update_from_json(value: serde_json::Value) -> UpdateProductRequest {
        serde_json::from_value(value).expect("deserialize update request")
    }

    #[test]
    fn complete_create_request_has_no_missing_fields() {
        let req = create_from_json(serde_json::json!({
            "code": "P001",
            "name": "Widget",
            "category": "tools",
            "description": "A widget."
        }));
        assert!(req.missing_fields().is_empty());
    }

    #[test]
    fn missing_fields_lists_exact_names_in_order() {
        let req = create_from_json(serde_json::json!({ "name": "Widget" }));
        assert_eq!(req.missing_fields(), vec!["code", "category", "description"]);
    }

    #[test]
    fn empty_string_counts_as_missing_on_create() {
        let req = create_from_json(serde_json::json!({
            "code": "",
            "name": "Widget",
            "category": "tools",
            "description": "A widget."
        }));
        assert_eq!(req.missing_fields(), vec!["code"]);
    }

    #[test]
    fn brand_and_type_are_optional_on_create() {
        let req = create_from_json(serde_json::json!({
            "code": "P001",
            "name": "Widget",
            "category": "tools",
            "description": "A widget."
        }));
        assert!(req.missing_fields().is_empty());
        assert!(req.brand.is_none());
        assert!(req.kind.is_none());
    }

    #[test]
    fn update_with_no_fields_is_empty() {
        assert!(update_from_json(serde_json::json!({})).is_empty());
        assert!(!update_from_json(serde_json::json!({ "brand": "Acme" })).is_empty());
    }

    #[test]
    fn update_with_only_empty_string_is_present_but_patches_nothing() {
        let req = update_from_json(serde_json::json!({ "description": "" }));
        assert!(!req.is_empty());
        assert!(req.into_patch().is_empty());
    }

    #[test]
    fn patch_keeps_only_non_empty_fields() {
        let req = update_from_json(serde_json::json!({
            "name": "Renamed",
            "brand": "",
            "type": "gadget"
        }));
        let patch = req.into_patch();
        assert_eq!(patch.name.as_deref(), Some("Renamed"));
        assert_eq!(patch.kind.as_deref(), Some("gadget"));
        assert!(patch.brand.is_none());
        assert!(patch.category.is_none());
    }
}
