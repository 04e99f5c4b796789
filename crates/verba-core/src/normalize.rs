//! Conversion of a provider [`RawPayload`] into the [`Word`] domain model.
//!
//! The provider format is positional and undocumented. Every lookup below is
//! fallible and degrades to an absent field instead of failing the whole
//! conversion. Layout of the sections that are read:
//!
//! - `translation`: last element is `[.., .., target_pronunciation, source_pronunciation]`
//! - `definitions`: `[pos, [[definition, key, example?, context?], ..], ..]`
//! - `synonyms`: `[pos, [[[synonym, ..], key], ..], ..]`
//! - `examples`: `[[[example, ..], ..], ..]`, only the first group is used
//! - `all-translations`: `[pos, _, [[text, [alternate, ..], .., confidence], ..], ..]`

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use verba_translator::{AUTO_DETECT, RawPayload};

use crate::types::{Definition, Language, PartOfSpeech, Translation, Word};

/// Build a [`Word`] with a single `target_language` entry from a provider payload.
///
/// Pure and deterministic; never fails.
pub fn normalize(
    payload: &RawPayload,
    requested_word: &str,
    source_language: &str,
    target_language: &str,
) -> Word {
    let hints = phonetic_hints(payload);

    let language = Language {
        text: payload.text.clone(),
        confidence: payload.section("confidence").and_then(Value::as_f64),
        pronunciation: hints.and_then(|h| nth_from_end(h, 2)).and_then(as_text),
        definitions: definitions(payload),
        examples: Some(examples(payload)),
        translations: translations(payload),
    };

    Word {
        word: requested_word.to_string(),
        language: detected_source(payload, source_language),
        pronunciation: hints.and_then(|h| nth_from_end(h, 1)).and_then(as_text),
        languages: BTreeMap::from([(target_language.to_string(), language)]),
    }
}

/// Provider-detected source language, falling back to the requested one
fn detected_source(payload: &RawPayload, requested: &str) -> String {
    let src = payload.src.trim();
    if src.is_empty() || src.eq_ignore_ascii_case(AUTO_DETECT) {
        requested.to_string()
    } else {
        src.to_lowercase()
    }
}

fn phonetic_hints(payload: &RawPayload) -> Option<&Vec<Value>> {
    payload
        .section("translation")?
        .as_array()?
        .last()?
        .as_array()
}

fn definitions(payload: &RawPayload) -> Option<BTreeMap<PartOfSpeech, Vec<Definition>>> {
    let groups = non_empty_section(payload, "definitions")?;
    let synonyms = synonyms_by_key(payload);

    let mut result = BTreeMap::new();
    for group in groups.iter().filter_map(Value::as_array) {
        let Some(part_of_speech) = group.first().and_then(Value::as_str) else {
            continue;
        };

        let entries = group
            .get(1)
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_array)
                    .map(|fields| definition(fields, synonyms.as_ref()))
                    .collect()
            })
            .unwrap_or_default();

        result.insert(part_of_speech.to_string(), entries);
    }

    Some(result)
}

fn definition(fields: &[Value], synonyms: Option<&HashMap<String, Vec<String>>>) -> Definition {
    let mut item = Definition {
        definition: fields.first().and_then(as_text),
        ..Default::default()
    };

    // Unknown keys get an empty list once any synonyms exist at all
    if let Some(synonyms) = synonyms {
        item.synonyms = Some(
            fields
                .get(1)
                .and_then(|key| synonyms.get(&key_of(key)))
                .cloned()
                .unwrap_or_default(),
        );
    }

    let context = fields.get(2..).unwrap_or_default();
    if let Some(example) = context.first() {
        item.example = as_text(example);

        if let Some(second) = context.get(1) {
            item.context = context_list(second);
        }
    }

    item
}

/// Flat `key -> synonyms` map across all parts of speech.
///
/// `None` when the payload carries no synonyms, so definitions leave the
/// field absent instead of reporting an empty list.
fn synonyms_by_key(payload: &RawPayload) -> Option<HashMap<String, Vec<String>>> {
    let groups = non_empty_section(payload, "synonyms")?;

    let mut result = HashMap::new();
    for group in groups.iter().filter_map(Value::as_array) {
        let Some(lists) = group.get(1).and_then(Value::as_array) else {
            continue;
        };

        for entry in lists.iter().filter_map(Value::as_array) {
            let (Some(list), Some(key)) = (entry.first(), entry.get(1)) else {
                continue;
            };
            result.insert(key_of(key), strings(list));
        }
    }

    (!result.is_empty()).then_some(result)
}

fn examples(payload: &RawPayload) -> Vec<String> {
    non_empty_section(payload, "examples")
        .and_then(|groups| groups.first())
        .and_then(Value::as_array)
        .map(|group| {
            group
                .iter()
                .filter_map(|example| example.as_array()?.first().and_then(as_text))
                .collect()
        })
        .unwrap_or_default()
}

fn translations(payload: &RawPayload) -> Option<BTreeMap<PartOfSpeech, Vec<Translation>>> {
    let groups = non_empty_section(payload, "all-translations")?;

    let mut result = BTreeMap::new();
    for group in groups.iter().filter_map(Value::as_array) {
        let Some(part_of_speech) = group.first().and_then(Value::as_str) else {
            continue;
        };

        let entries = group
            .get(2)
            .and_then(Value::as_array)
            .map(|records| {
                records
                    .iter()
                    .filter_map(Value::as_array)
                    .filter_map(|record| translation(record))
                    .collect()
            })
            .unwrap_or_default();

        result.insert(part_of_speech.to_string(), entries);
    }

    Some(result)
}

fn translation(record: &[Value]) -> Option<Translation> {
    Some(Translation {
        text: record.first().and_then(as_text)?,
        translations: record.get(1).map(strings).unwrap_or_default(),
        // Integer counts and flags in the trailing slot are not confidences
        confidence: record
            .last()
            .filter(|value| is_float(value))
            .and_then(Value::as_f64),
    })
}

fn non_empty_section<'a>(payload: &'a RawPayload, key: &str) -> Option<&'a Vec<Value>> {
    payload
        .section(key)?
        .as_array()
        .filter(|items| !items.is_empty())
}

fn nth_from_end(items: &[Value], n: usize) -> Option<&Value> {
    items.len().checked_sub(n).and_then(|i| items.get(i))
}

fn context_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    match items.first() {
        Some(inner @ Value::Array(_)) => Some(strings(inner)),
        Some(Value::String(_)) => Some(strings(value)),
        _ => None,
    }
}

fn key_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(as_text).collect())
        .unwrap_or_default()
}

fn is_float(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_f64())
}
