//! Locating and parsing the JSON file of application records.

use crate::error::ListingError;
use crate::record::AppRecord;
use serde_json::error::Category;
use std::fs;
use std::path::{Path, PathBuf};

const JSON_EXTENSION: &str = "json";

/// Loads the ordered list of records from the file at `path`.
///
/// A missing `path` is reported as [`ListingError::PathRequired`] before any
/// I/O takes place.
pub fn load(path: Option<&Path>) -> Result<Vec<AppRecord>, ListingError> {
    let path = path
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ListingError::PathRequired)?;

    let resolved = resolve(path)?;
    log::debug!("Reading app records from {}", resolved.display());

    let content = fs::read_to_string(&resolved).map_err(|source| ListingError::Io {
        path: resolved.clone(),
        source,
    })?;

    let records = parse_records(&content).map_err(|err| err.with_path(resolved.clone()))?;

    if records.is_empty() {
        log::warn!("{} contains no app records", resolved.display());
    } else {
        log::debug!(
            "Loaded {} app records from {}",
            records.len(),
            resolved.display()
        );
    }

    Ok(records)
}

/// Finds the file `path` refers to.
///
/// Relative paths are taken from the current directory. When `path` does not
/// name a file, `path.json` is tried as well.
pub fn resolve(path: &Path) -> Result<PathBuf, ListingError> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }

    let has_json_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(JSON_EXTENSION));

    if !has_json_extension {
        let mut candidate = path.as_os_str().to_os_string();
        candidate.push(".");
        candidate.push(JSON_EXTENSION);
        let candidate = PathBuf::from(candidate);

        if candidate.is_file() {
            log::warn!(
                "{} does not exist, using {} instead",
                path.display(),
                candidate.display()
            );
            return Ok(candidate);
        }
    }

    Err(ListingError::NotFound {
        path: path.to_path_buf(),
    })
}

/// Parses a JSON array of records held in memory.
pub fn parse_records(content: &str) -> Result<Vec<AppRecord>, ListingError> {
    serde_json::from_str(content).map_err(|source| match source.classify() {
        Category::Data => ListingError::MalformedRecord { path: None, source },
        Category::Syntax | Category::Eof | Category::Io => {
            ListingError::Parse { path: None, source }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AppId;
    use assert_fs::prelude::*;

    const TWO_RECORDS: &str = r#"[
        {"id": 1, "name": "First", "description": "one", "app_store_link": "https://a"},
        {"id": "two", "name": "Second", "description": "two", "app_store_link": "https://b"}
    ]"#;

    #[test]
    fn missing_path_is_rejected() {
        let err = load(None).unwrap_err();
        assert!(matches!(err, ListingError::PathRequired));
        assert_eq!(err.to_string(), "Path required");
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = load(Some(Path::new(""))).unwrap_err();
        assert!(matches!(err, ListingError::PathRequired));
    }

    #[test]
    fn loads_records_in_file_order() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("apps.json");
        input.write_str(TWO_RECORDS).unwrap();

        let records = load(Some(input.path())).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(records[0].id, AppId::from(1));
        assert_eq!(records[1].id, AppId::from("two"));
    }

    #[test]
    fn resolves_path_without_extension() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("apps.json").write_str(TWO_RECORDS).unwrap();

        let bare = temp.path().join("apps");
        assert_eq!(resolve(&bare).unwrap(), temp.path().join("apps.json"));
        assert_eq!(load(Some(bare.as_path())).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.path().join("nope.json");

        let err = load(Some(missing.as_path())).unwrap_err();
        match err {
            ListingError::NotFound { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("broken.json");
        input.write_str("not json").unwrap();

        let err = load(Some(input.path())).unwrap_err();
        match &err {
            ListingError::Parse { path, .. } => {
                assert_eq!(path.as_deref(), Some(input.path()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn truncated_json_is_a_parse_error() {
        let err = parse_records(r#"[{"id": 1"#).unwrap_err();
        assert!(matches!(err, ListingError::Parse { path: None, .. }));
    }

    #[test]
    fn record_without_link_is_malformed() {
        let err =
            parse_records(r#"[{"id": 1, "name": "A", "description": "d"}]"#).unwrap_err();
        assert!(matches!(err, ListingError::MalformedRecord { .. }));
    }

    #[test]
    fn non_array_document_is_malformed() {
        let err = parse_records(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, ListingError::MalformedRecord { .. }));
    }

    #[test]
    fn empty_array_yields_no_records() {
        assert!(parse_records("[]").unwrap().is_empty());
    }
}
