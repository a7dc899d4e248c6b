//! API documentation
//!
//! Builds an OpenAPI 3 document from the attached route groups. Tags keep the
//! attachment order so the document is stable between runs.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// One documented endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    /// Lower-case HTTP method
    pub method: &'static str,
    /// OpenAPI-style path (`{id}` placeholders)
    pub path: String,
    pub summary: String,
    /// Optional query parameters
    pub query: Vec<&'static str>,
    pub success_status: u16,
}

/// Documentation for one attached route group
#[derive(Debug, Clone)]
pub struct GroupDoc {
    pub name: &'static str,
    pub base_path: &'static str,
    pub operations: Vec<Operation>,
}

/// Build the OpenAPI document
pub fn openapi(title: &str, version: &str, groups: &[GroupDoc]) -> Value {
    let tags: Vec<Value> = groups
        .iter()
        .map(|g| json!({ "name": g.name, "description": format!("Endpoints under {}", g.base_path) }))
        .collect();

    let mut paths = Map::new();
    for group in groups {
        for op in &group.operations {
            let entry = paths
                .entry(op.path.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(methods) = entry {
                methods.insert(op.method.to_string(), operation_object(group.name, op));
            }
        }
    }

    json!({
        "openapi": "3.0.3",
        "info": { "title": title, "version": version },
        "tags": tags,
        "paths": paths,
    })
}

fn operation_object(tag: &str, op: &Operation) -> Value {
    let mut parameters: Vec<Value> = op
        .query
        .iter()
        .map(|name| json!({ "name": name, "in": "query", "required": false }))
        .collect();

    if op.path.contains("{id}") {
        parameters.push(json!({
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer" }
        }));
    }

    let mut responses = Map::new();
    responses.insert(
        op.success_status.to_string(),
        json!({ "description": "Successful response" }),
    );

    let mut object = json!({
        "tags": [tag],
        "summary": op.summary,
        "responses": responses,
    });

    if !parameters.is_empty() {
        object["parameters"] = Value::Array(parameters);
    }
    if op.method == "post" {
        object["requestBody"] = json!({ "required": true, "content": { "application/json": {} } });
    }

    object
}

/// GET /openapi.json
pub async fn openapi_json(State(doc): State<Arc<Value>>) -> Json<Value> {
    Json(doc.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &'static str, base_path: &'static str) -> GroupDoc {
        GroupDoc {
            name,
            base_path,
            operations: vec![Operation {
                method: "get",
                path: format!("{}/", base_path),
                summary: format!("List {}", name),
                query: vec![],
                success_status: 200,
            }],
        }
    }

    #[test]
    fn test_tags_keep_attachment_order() {
        let doc = openapi("T", "0.1.0", &[group("zeta", "/zeta"), group("alpha", "/alpha")]);
        let tags: Vec<&str> = doc["tags"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(tags, vec!["zeta", "alpha"]);
        assert_eq!(doc["info"]["title"], "T");
    }

    #[test]
    fn test_same_input_same_document() {
        let groups = [group("a", "/a"), group("b", "/b")];
        assert_eq!(openapi("T", "1", &groups), openapi("T", "1", &groups));
    }
}
