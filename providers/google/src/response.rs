use serde_json::{Map, Value};
use verba_translator::{RawPayload, TranslateError};

/// Positions of the named sections in the `translate_a/single` response
const SECTIONS: [(&str, usize); 11] = [
    ("translation", 0),
    ("all-translations", 1),
    ("original-language", 2),
    ("possible-translations", 5),
    ("confidence", 6),
    ("possible-mistakes", 7),
    ("language", 8),
    ("synonyms", 11),
    ("definitions", 12),
    ("examples", 13),
    ("see-also", 14),
];

/// Turn the positional response array into a [`RawPayload`]
pub fn parse_response(
    data: &Value,
    origin: &str,
    from: &str,
    to: &str,
) -> Result<RawPayload, TranslateError> {
    let data = data
        .as_array()
        .ok_or_else(|| TranslateError::MalformedResponse("expected a JSON array".to_string()))?;

    let extra_data: Map<String, Value> = SECTIONS
        .iter()
        .map(|(name, index)| {
            (
                name.to_string(),
                data.get(*index).cloned().unwrap_or(Value::Null),
            )
        })
        .collect();

    // Sentence chunks, the trailing phonetic entry has no text
    let text = data
        .first()
        .and_then(Value::as_array)
        .map(|chunks| {
            chunks
                .iter()
                .filter_map(|chunk| chunk.get(0)?.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();

    let src = data
        .get(2)
        .and_then(Value::as_str)
        .unwrap_or(from)
        .to_string();

    Ok(RawPayload {
        origin: origin.to_string(),
        text,
        src,
        dest: to.to_string(),
        extra_data,
    })
}
