//! JSON output formatting

use crate::engine::executor::{ExecutionResult, ResultData};
use serde_json::{json, Value};

pub fn format_json(result: &ExecutionResult) -> String {
    let mut data: Value = match &result.data {
        ResultData::Created { path, kind, created } => {
            json!({ "path": path, "kind": kind, "created": created })
        }
        ResultData::Written { path, append } => json!({ "path": path, "append": append }),
        ResultData::Content { path, text } => json!({ "path": path, "content": text }),
        ResultData::Names(names) => json!({ "names": names }),
        ResultData::Files(files) => serde_json::to_value(files).unwrap_or(json!(null)),
        ResultData::Words(words) => json!({ "words": words }),
        ResultData::Matched { text, pattern, matched } => {
            json!({ "text": text, "pattern": pattern, "matched": matched })
        }
        ResultData::Text(text) => json!({ "text": text }),
        ResultData::Numbers(numbers) => json!({ "numbers": numbers }),
        ResultData::Maximum(max) => json!({ "max": max }),
        ResultData::Same { left, right, same } => {
            json!({ "left": left, "right": right, "same": same })
        }
        ResultData::Selected(path) => json!({ "selected": path }),
    };

    if let (Some(message), Value::Object(map)) = (&result.message, &mut data) {
        map.insert("message".to_string(), json!(message));
    }

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}
