use bson::{Bson, Document};
use chrono::SecondsFormat;
use serde_json::{Map, Value};

/// Convert a stored document into the public wire format.
///
/// Plain JSON values pass through unchanged. BSON-only types are flattened
/// to strings: dates become RFC 3339 UTC with millisecond precision and
/// ObjectIds become their hex form.
pub fn document_to_value(document: Document) -> Value {
    let mut obj = Map::new();
    for (key, value) in document {
        obj.insert(key, bson_to_value(value));
    }
    Value::Object(obj)
}

/// Convert a list of documents, preserving order
pub fn documents_to_values(documents: Vec<Document>) -> Vec<Value> {
    documents.into_iter().map(document_to_value).collect()
}

fn bson_to_value(value: Bson) -> Value {
    match value {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(b) => Value::Bool(b),
        Bson::String(s) => Value::String(s),
        Bson::Int32(i) => Value::from(i),
        Bson::Int64(i) => Value::from(i),
        Bson::Double(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        Bson::DateTime(dt) => Value::String(
            dt.to_chrono()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_value).collect()),
        Bson::Document(document) => document_to_value(document),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn dates_render_as_rfc3339_millis() {
        let created_at = bson::DateTime::from_millis(1_760_769_000_123);
        let value = document_to_value(doc! { "created_at": created_at });
        assert_eq!(value, json!({ "created_at": "2025-10-18T06:30:00.123Z" }));
    }

    #[test]
    fn scalars_pass_through_and_order_is_kept() {
        let value = document_to_value(doc! {
            "employee_name": "Asha",
            "visits_count": 5_i64,
            "employee_query": Bson::Null,
            "nested": { "ok": true, "ratio": 0.5 },
        });
        assert_eq!(
            value,
            json!({
                "employee_name": "Asha",
                "visits_count": 5,
                "employee_query": null,
                "nested": { "ok": true, "ratio": 0.5 },
            })
        );
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["employee_name", "visits_count", "employee_query", "nested"]);
    }

    #[test]
    fn object_ids_render_as_hex() {
        let id = ObjectId::parse_str("65f1c2a9e4b0a1b2c3d4e5f6").unwrap();
        let value = documents_to_values(vec![doc! { "ref": id }]);
        assert_eq!(value, vec![json!({ "ref": "65f1c2a9e4b0a1b2c3d4e5f6" })]);
    }
}
