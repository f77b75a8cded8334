use serde_json::Value;
use tracing::warn;

use crate::error::BotError;
use crate::models::Homework;
use crate::practicum::schema::schema_warnings;

/// Validates the raw poll payload and extracts the homework records.
///
/// The payload may be the envelope object itself or an array whose first
/// element is the envelope. An empty or absent envelope is an error; an
/// envelope with zero homeworks is not. Field-level schema drift inside the
/// records is logged and never fails the call.
pub fn check_response(raw: &Value) -> Result<Vec<Homework>, BotError> {
    let envelope = match raw {
        Value::Array(items) => items.first().ok_or(BotError::EmptyAnswer)?,
        other => other,
    };

    let fields = match envelope {
        Value::Null => return Err(BotError::EmptyAnswer),
        Value::Object(map) if map.is_empty() => return Err(BotError::EmptyAnswer),
        Value::Object(map) => map,
        other => {
            return Err(BotError::WrongAnswer(format!("answer is not an object: {other}")));
        }
    };

    let homeworks = fields.get("homeworks").ok_or(BotError::MissingHomeworksKey)?;
    let records = homeworks
        .as_array()
        .ok_or_else(|| BotError::WrongAnswer("\"homeworks\" is not a list".to_string()))?;

    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let Some(raw_record) = record.as_object() else {
            warn!("skipping non-object homework record: {record}");
            continue;
        };
        for warning in schema_warnings(raw_record) {
            warn!("{warning}");
        }
        match Homework::from_raw(raw_record) {
            Some(homework) => out.push(homework),
            None => warn!("skipping homework record without a usable id/status: {record}"),
        }
    }
    Ok(out)
}
