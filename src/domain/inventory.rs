//! Inventory document: the JSON array of provisioned servers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AppError;

/// One provisioned server as recorded in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub name: String,
    pub version: String,
    pub address: String,
}

/// How to treat an inventory entry that already uses the record's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Any existing entry with the same name is an error.
    #[default]
    Reject,
    /// An identical existing entry is accepted without writing.
    AllowIdentical,
}

/// Result of merging a record into the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryMerge {
    /// The record was appended; contains the full new document.
    Appended(String),
    /// An identical record was already present.
    AlreadyPresent,
}

/// Append `record` to the inventory content.
///
/// `existing` is `None` when the file is absent. Entries already in the
/// document are written back exactly as parsed, in their original order.
pub fn append_server(
    path: &str,
    existing: Option<&str>,
    record: &ServerRecord,
    policy: DuplicatePolicy,
) -> Result<InventoryMerge, AppError> {
    let mut entries = parse_entries(path, existing)?;

    if let Some(current) = entries.iter().find(|entry| entry_name(entry) == Some(&record.name)) {
        let identical = serde_json::from_value::<ServerRecord>(current.clone())
            .map(|current| &current == record)
            .unwrap_or(false);
        return match (policy, identical) {
            (DuplicatePolicy::AllowIdentical, true) => Ok(InventoryMerge::AlreadyPresent),
            _ => Err(AppError::DuplicateServer(record.name.clone())),
        };
    }

    let value = serde_json::to_value(record)
        .map_err(|err| AppError::InternalError(format!("Failed to encode record: {}", err)))?;
    entries.push(value);

    Ok(InventoryMerge::Appended(render(&entries)?))
}

/// Parse every entry as a `ServerRecord`.
pub fn read_records(path: &str, existing: Option<&str>) -> Result<Vec<ServerRecord>, AppError> {
    parse_entries(path, existing)?
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|err| AppError::InventoryCorrupt {
                path: path.to_string(),
                details: format!("entry {}: {}", index, err),
            })
        })
        .collect()
}

fn parse_entries(path: &str, existing: Option<&str>) -> Result<Vec<Value>, AppError> {
    let content = match existing {
        Some(content) if !content.trim().is_empty() => content,
        _ => return Ok(Vec::new()),
    };

    let corrupt =
        |details: String| AppError::InventoryCorrupt { path: path.to_string(), details };

    match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(entries)) => Ok(entries),
        Ok(other) => Err(corrupt(format!("expected a JSON array, found {}", json_type(&other)))),
        Err(err) => Err(corrupt(err.to_string())),
    }
}

fn entry_name(entry: &Value) -> Option<&String> {
    match entry.get("name") {
        Some(Value::String(name)) => Some(name),
        _ => None,
    }
}

fn render(entries: &[Value]) -> Result<String, AppError> {
    let mut out = serde_json::to_string_pretty(entries)
        .map_err(|err| AppError::InternalError(format!("Failed to encode inventory: {}", err)))?;
    out.push('\n');
    Ok(out)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PATH: &str = "minecraft/servers.json";

    fn record(name: &str) -> ServerRecord {
        ServerRecord {
            name: name.to_string(),
            version: "vanilla".to_string(),
            address: format!("{}:25565", name),
        }
    }

    fn appended(merge: InventoryMerge) -> String {
        match merge {
            InventoryMerge::Appended(content) => content,
            InventoryMerge::AlreadyPresent => panic!("expected an append"),
        }
    }

    #[test]
    fn absent_file_yields_single_entry() {
        let content =
            appended(append_server(PATH, None, &record("alpha"), DuplicatePolicy::Reject).unwrap());
        assert_eq!(
            content,
            "[\n  {\n    \"name\": \"alpha\",\n    \"version\": \"vanilla\",\n    \"address\": \"alpha:25565\"\n  }\n]\n"
        );
    }

    #[test]
    fn whitespace_only_file_is_empty_inventory() {
        let content = appended(
            append_server(PATH, Some("  \n"), &record("alpha"), DuplicatePolicy::Reject).unwrap(),
        );
        assert_eq!(read_records(PATH, Some(&content)).unwrap(), vec![record("alpha")]);
    }

    #[test]
    fn appends_after_existing_entries() {
        let first =
            appended(append_server(PATH, None, &record("a"), DuplicatePolicy::Reject).unwrap());
        let second = appended(
            append_server(PATH, Some(&first), &record("b"), DuplicatePolicy::Reject).unwrap(),
        );
        let names: Vec<String> =
            read_records(PATH, Some(&second)).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn unknown_fields_and_key_order_survive() {
        let existing = r#"[{"address": "lobby:25565", "name": "lobby", "version": "paper", "notes": "hub"}]"#;
        let content = appended(
            append_server(PATH, Some(existing), &record("alpha"), DuplicatePolicy::Reject).unwrap(),
        );
        let parsed: Value = serde_json::from_str(&content).unwrap();
        let lobby = parsed[0].as_object().unwrap();
        assert_eq!(lobby.keys().collect::<Vec<_>>(), ["address", "name", "version", "notes"]);
        assert_eq!(lobby["notes"], "hub");
    }

    #[test]
    fn invalid_json_is_corrupt() {
        let err =
            append_server(PATH, Some("[{"), &record("alpha"), DuplicatePolicy::Reject).unwrap_err();
        assert!(matches!(err, AppError::InventoryCorrupt { .. }));
    }

    #[test]
    fn non_array_root_is_corrupt() {
        let err = append_server(PATH, Some(r#"{"servers": []}"#), &record("a"), DuplicatePolicy::Reject)
            .unwrap_err();
        assert!(err.to_string().contains("expected a JSON array, found an object"));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let existing =
            appended(append_server(PATH, None, &record("alpha"), DuplicatePolicy::Reject).unwrap());
        let err = append_server(PATH, Some(&existing), &record("alpha"), DuplicatePolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateServer(name) if name == "alpha"));
    }

    #[test]
    fn identical_duplicate_is_accepted_when_resuming() {
        let existing =
            appended(append_server(PATH, None, &record("alpha"), DuplicatePolicy::Reject).unwrap());
        let merge =
            append_server(PATH, Some(&existing), &record("alpha"), DuplicatePolicy::AllowIdentical)
                .unwrap();
        assert_eq!(merge, InventoryMerge::AlreadyPresent);
    }

    #[test]
    fn differing_duplicate_is_rejected_even_when_resuming() {
        let existing =
            appended(append_server(PATH, None, &record("alpha"), DuplicatePolicy::Reject).unwrap());
        let mut changed = record("alpha");
        changed.address = "elsewhere:25565".to_string();
        let err = append_server(PATH, Some(&existing), &changed, DuplicatePolicy::AllowIdentical)
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateServer(_)));
    }

    proptest! {
        #[test]
        fn insertion_order_is_preserved(names in prop::collection::btree_set("[a-z][a-z0-9]{0,7}", 1..8)) {
            let names: Vec<String> = names.into_iter().collect();
            let mut content: Option<String> = None;
            for name in &names {
                let merge = append_server(PATH, content.as_deref(), &record(name), DuplicatePolicy::Reject).unwrap();
                content = Some(appended(merge));
            }
            let stored: Vec<String> = read_records(PATH, content.as_deref())
                .unwrap()
                .into_iter()
                .map(|r| r.name)
                .collect();
            prop_assert_eq!(stored, names);
        }
    }
}
