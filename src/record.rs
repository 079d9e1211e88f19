use serde::Serialize;
use serde_json::Value;

use crate::printer::PrintError;

/// Convert serialisable records into headers plus a grid of cell strings.
///
/// The first record's field names become the headers, in declaration order;
/// every later record is looked up by those names and must carry all of them.
pub(crate) fn extract_records<Data, Row>(
    records: Data,
) -> Result<(Vec<String>, Vec<Vec<String>>), PrintError>
where
    Data: IntoIterator<Item = Row>,
    Row: Serialize,
{
    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();

    for record in records {
        let value = serde_json::to_value(&record)
            .map_err(|err| PrintError::Serialization(err.to_string()))?;
        let map = match value {
            Value::Object(map) => map,
            _ => return Err(PrintError::NotARecord),
        };

        if headers.is_empty() && rows.is_empty() {
            headers = map.keys().cloned().collect();
        }

        let mut cells = Vec::with_capacity(headers.len());
        for key in &headers {
            let field = map
                .get(key)
                .ok_or_else(|| PrintError::MissingField(key.clone()))?;
            cells.push(cell_text(field));
        }
        rows.push(cells);
    }

    Ok((headers, rows))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
