//! Rendering of Textract responses as JSON.
//!
//! SDK output types are not serializable, so the response is rebuilt using
//! Textract's own wire field names. Fields the service did not return are
//! omitted rather than written as `null`. The request id goes under
//! `$metadata.requestId`, the shape other AWS SDKs use for response metadata.

use aws_sdk_textract::operation::analyze_document::AnalyzeDocumentOutput;
use aws_sdk_textract::operation::RequestId;
use aws_sdk_textract::types::{Block, BoundingBox, Geometry, Point, Relationship};
use serde::Serialize;
use serde_json::{Map, Value};

/// Insert `value` under `key` unless it serializes to `null`.
fn put<T: Serialize>(map: &mut Map<String, Value>, key: &str, value: T) {
    match serde_json::to_value(value) {
        Ok(Value::Null) | Err(_) => {}
        Ok(v) => {
            map.insert(key.to_string(), v);
        }
    }
}

pub fn analyze_output_to_json(output: &AnalyzeDocumentOutput) -> Value {
    let mut root = Map::new();

    if let Some(metadata) = output.document_metadata() {
        let mut meta = Map::new();
        put(&mut meta, "Pages", metadata.pages());
        root.insert("DocumentMetadata".to_string(), Value::Object(meta));
    }

    root.insert(
        "Blocks".to_string(),
        Value::Array(output.blocks().iter().map(block_to_json).collect()),
    );

    put(
        &mut root,
        "AnalyzeDocumentModelVersion",
        output.analyze_document_model_version(),
    );

    if let Some(metadata) = response_metadata(output.request_id()) {
        root.insert("$metadata".to_string(), metadata);
    }

    Value::Object(root)
}

fn response_metadata(request_id: Option<&str>) -> Option<Value> {
    let mut map = Map::new();
    put(&mut map, "requestId", request_id);
    (!map.is_empty()).then_some(Value::Object(map))
}

fn block_to_json(block: &Block) -> Value {
    let mut map = Map::new();
    put(&mut map, "BlockType", block.block_type().map(|t| t.as_str()));
    put(&mut map, "Confidence", block.confidence());
    put(&mut map, "Text", block.text());
    put(&mut map, "TextType", block.text_type().map(|t| t.as_str()));
    put(&mut map, "RowIndex", block.row_index());
    put(&mut map, "ColumnIndex", block.column_index());
    put(&mut map, "RowSpan", block.row_span());
    put(&mut map, "ColumnSpan", block.column_span());
    if let Some(geometry) = block.geometry() {
        map.insert("Geometry".to_string(), geometry_to_json(geometry));
    }
    put(&mut map, "Id", block.id());

    let relationships = block.relationships();
    if !relationships.is_empty() {
        map.insert(
            "Relationships".to_string(),
            Value::Array(relationships.iter().map(relationship_to_json).collect()),
        );
    }

    let entity_types = block.entity_types();
    if !entity_types.is_empty() {
        let names: Vec<&str> = entity_types.iter().map(|e| e.as_str()).collect();
        put(&mut map, "EntityTypes", names);
    }

    put(
        &mut map,
        "SelectionStatus",
        block.selection_status().map(|s| s.as_str()),
    );
    put(&mut map, "Page", block.page());

    Value::Object(map)
}

fn geometry_to_json(geometry: &Geometry) -> Value {
    let mut map = Map::new();
    if let Some(bbox) = geometry.bounding_box() {
        map.insert("BoundingBox".to_string(), bounding_box_to_json(bbox));
    }
    let polygon = geometry.polygon();
    if !polygon.is_empty() {
        map.insert(
            "Polygon".to_string(),
            Value::Array(polygon.iter().map(point_to_json).collect()),
        );
    }
    Value::Object(map)
}

fn bounding_box_to_json(bbox: &BoundingBox) -> Value {
    let mut map = Map::new();
    put(&mut map, "Width", bbox.width());
    put(&mut map, "Height", bbox.height());
    put(&mut map, "Left", bbox.left());
    put(&mut map, "Top", bbox.top());
    Value::Object(map)
}

fn point_to_json(point: &Point) -> Value {
    let mut map = Map::new();
    put(&mut map, "X", point.x());
    put(&mut map, "Y", point.y());
    Value::Object(map)
}

fn relationship_to_json(relationship: &Relationship) -> Value {
    let mut map = Map::new();
    put(&mut map, "Type", relationship.r#type().map(|t| t.as_str()));
    put(&mut map, "Ids", relationship.ids());
    Value::Object(map)
}
