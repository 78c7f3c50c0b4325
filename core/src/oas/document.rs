//! # OpenAPI Document Model
//!
//! A deliberately tolerant representation of an OpenAPI description: only
//! `paths`, the per-verb operations and their `parameters` lists are
//! interpreted. Everything else (info, components, responses, tags,
//! vendor extensions, ...) is captured in flattened maps and round-tripped
//! untouched.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// One input to an operation (location, name, schema, ...).
///
/// `in` and `name` are optional so that `$ref` entries and otherwise
/// malformed declarations pass through instead of failing the whole parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Where the parameter lives: `path`, `query`, `header`, `cookie`, ...
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// The parameter name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Preserved fields: `required`, `schema`, `description`, examples, ...
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Parameter {
    /// Whether this is a path parameter with the given name.
    pub fn is_path_param_named(&self, name: &str) -> bool {
        self.location.as_deref() == Some("path") && self.name.as_deref() == Some(name)
    }
}

/// One HTTP verb's definition under a path item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Ordered parameter declarations. Absent stays absent on output:
    /// no empty list is fabricated for operations that declared none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    /// Preserved fields: responses, tags, summary, operationId, ...
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// The set of operations defined for one path pattern, plus the optional
/// path-level parameter list shared by all of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// GET operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// PUT operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// POST operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// DELETE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    /// HEAD operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    /// PATCH operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    /// TRACE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,

    /// Path-level parameter declarations, shared by every operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    /// Preserved fields: summary, description, servers, `$ref`, ...
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl PathItem {
    /// Iterates over every parameter list on this path item: the path-level
    /// list first, then each present operation's list.
    pub fn parameter_lists_mut(&mut self) -> impl Iterator<Item = &mut Vec<Parameter>> {
        let PathItem {
            get,
            put,
            post,
            delete,
            options,
            head,
            patch,
            trace,
            parameters,
            extra: _,
        } = self;

        parameters.as_mut().into_iter().chain(
            [get, put, post, delete, options, head, patch, trace]
                .into_iter()
                .filter_map(|op| op.as_mut())
                .filter_map(|op| op.parameters.as_mut()),
        )
    }
}

/// A parsed OpenAPI description document.
///
/// Path key order is preserved (`IndexMap`) so the written copy keeps the
/// source's path ordering. Top-level keys are emitted with `paths` last:
/// the other fields round-trip intact but a source that declared `paths`
/// before `components` comes back with them swapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Preserved top-level fields: `openapi`, `info`, `components`, ...
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,

    /// Path pattern -> path item. Required: a document without `paths`
    /// fails to parse.
    pub paths: IndexMap<String, PathItem>,
}

/// Loads an OpenAPI document from a YAML file.
///
/// # Errors
///
/// * `AppError::NotFound` - the file does not exist.
/// * `AppError::Parse` - the content is not well-formed YAML or does not
///   match the expected document shape (e.g. missing `paths`).
pub fn load_document(path: &Path) -> AppResult<Document> {
    if !path.exists() {
        return Err(AppError::NotFound(format!(
            "OpenAPI document not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content)
        .map_err(|e| AppError::Parse(format!("{}: {}", path.display(), e)))
}

/// Saves an OpenAPI document to a YAML file.
///
/// The document is serialized fully in memory before any write call, so a
/// serialization failure leaves no partial file behind.
///
/// # Errors
///
/// * `AppError::Write` - serialization failed, or the destination is not
///   writable (permissions, missing parent directory).
pub fn save_document(path: &Path, document: &Document) -> AppResult<()> {
    let yaml = serde_yaml::to_string(document)
        .map_err(|e| AppError::Write(format!("{}: {}", path.display(), e)))?;

    fs::write(path, yaml).map_err(|e| AppError::Write(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PETSTORE_YAML: &str = r#"
openapi: 3.0.0
info:
  title: Pets
  version: 1.0.0
paths:
  /pets/{petId}:
    summary: One pet
    get:
      operationId: getPet
      tags: [pets]
      parameters:
        - name: petId
          in: path
          required: true
          schema:
            type: string
      responses:
        "200":
          description: ok
  /pets:
    post:
      operationId: createPet
      responses:
        "201":
          description: created
components:
  schemas:
    Pet:
      type: object
"#;

    #[test]
    fn test_parse_preserves_untouched_fields() {
        let doc: Document = serde_yaml::from_str(PETSTORE_YAML).unwrap();

        assert!(doc.extra.contains_key("openapi"));
        assert!(doc.extra.contains_key("info"));
        assert!(doc.extra.contains_key("components"));
        assert_eq!(doc.paths.len(), 2);

        let pet_item = &doc.paths["/pets/{petId}"];
        assert!(pet_item.extra.contains_key("summary"));

        let get = pet_item.get.as_ref().unwrap();
        assert!(get.extra.contains_key("responses"));
        assert!(get.extra.contains_key("tags"));

        let params = get.parameters.as_ref().unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].location.as_deref(), Some("path"));
        assert_eq!(params[0].name.as_deref(), Some("petId"));
        assert!(params[0].extra.contains_key("schema"));
        assert!(params[0].extra.contains_key("required"));
    }

    #[test]
    fn test_roundtrip_is_structurally_identical() {
        let doc: Document = serde_yaml::from_str(PETSTORE_YAML).unwrap();
        let written = serde_yaml::to_string(&doc).unwrap();
        let reparsed: Document = serde_yaml::from_str(&written).unwrap();
        assert_eq!(doc, reparsed);
    }

    #[test]
    fn test_absent_parameters_stay_absent() {
        let doc: Document = serde_yaml::from_str(PETSTORE_YAML).unwrap();
        let written = serde_yaml::to_string(&doc).unwrap();
        // /pets post declared no parameters; none must be fabricated
        let reparsed: Document = serde_yaml::from_str(&written).unwrap();
        assert!(reparsed.paths["/pets"].post.as_ref().unwrap().parameters.is_none());
        assert!(!written.contains("parameters: []"));
    }

    #[test]
    fn test_missing_paths_is_parse_failure() {
        let res: Result<Document, _> = serde_yaml::from_str("openapi: 3.0.0\ninfo: {}\n");
        assert!(res.is_err());
    }

    #[test]
    fn test_ref_parameter_is_tolerated() {
        let yaml = r#"
paths:
  /users/{id}:
    get:
      parameters:
        - $ref: '#/components/parameters/Id'
"#;
        let doc: Document = serde_yaml::from_str(yaml).unwrap();
        let get = doc.paths["/users/{id}"].get.as_ref().unwrap();
        let params = get.parameters.as_ref().unwrap();
        assert!(params[0].location.is_none());
        assert!(params[0].name.is_none());
        assert!(params[0].extra.contains_key("$ref"));
    }

    #[test]
    fn test_load_document_missing_file() {
        let res = load_document(Path::new("/nonexistent/openapi.yaml"));
        assert!(matches!(res, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_save_document_missing_parent_directory() {
        // Robust regardless of the user: a missing parent directory fails
        // the write even where permission bits are bypassed (root).
        let doc: Document = serde_yaml::from_str(PETSTORE_YAML).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("missing_parent").join("openapi_updated.yaml");

        let res = save_document(&destination, &doc);
        assert!(matches!(res, Err(AppError::Write(_))));
        assert!(!destination.exists());
    }
}
