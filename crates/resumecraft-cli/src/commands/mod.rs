//! Command handlers

pub mod config;
pub mod education;
pub mod experience;
pub mod export;
pub mod personal;
pub mod project;
pub mod resume;
pub mod skills;
pub mod status;
pub mod template;

use anyhow::{bail, Result};

use resumecraft_core::{ResumeStore, SaveStatus};

use crate::output::Output;

/// Resolve a full ID or unique ID prefix against `(id, label)` candidates
fn resolve_id<'a>(
    kind: &str,
    query: &str,
    candidates: impl IntoIterator<Item = (&'a str, String)>,
) -> Result<String> {
    let candidates: Vec<_> = candidates.into_iter().collect();

    if candidates.iter().any(|(id, _)| *id == query) {
        return Ok(query.to_string());
    }

    let matches: Vec<_> = candidates
        .iter()
        .filter(|(id, _)| !query.is_empty() && id.starts_with(query))
        .collect();

    match matches.as_slice() {
        [] => bail!("No {} found matching: {}", kind, query),
        [(id, _)] => Ok(id.to_string()),
        _ => {
            eprintln!("Multiple {} entries match '{}':", kind, query);
            for (id, label) in &matches {
                eprintln!("  {} - {}", id, label);
            }
            bail!("Ambiguous ID. Please provide more characters.");
        }
    }
}

/// Split a comma-separated list, dropping blanks
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Tell the user when the last change only lives in memory
fn warn_if_unsaved(store: &ResumeStore, output: &Output) {
    if let Some(message) = unsaved_warning(store) {
        output.warn(&message);
    }
}

fn unsaved_warning(store: &ResumeStore) -> Option<String> {
    if store.save_status() != SaveStatus::Error {
        return None;
    }
    let mut message = String::from("Change applied but could not be saved.");
    match store.last_save_error() {
        Some(failure) => {
            message.push_str(&format!("\n  {}", failure.message));
            if let Some(hint) = failure.hint {
                message.push_str(&format!("\n  Hint: {}", hint));
            }
        }
        None => message.push_str(" Run with -v for details."),
    }
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<(&'static str, String)> {
        vec![
            ("5f0c2a9e-aaaa", "Engineer at Acme".to_string()),
            ("5f1d0000-bbbb", "Lead at Initech".to_string()),
            ("e1", "Analyst".to_string()),
        ]
    }

    #[test]
    fn test_resolve_exact_id() {
        assert_eq!(resolve_id("experience", "e1", candidates()).unwrap(), "e1");
    }

    #[test]
    fn test_resolve_unique_prefix() {
        assert_eq!(
            resolve_id("experience", "5f0", candidates()).unwrap(),
            "5f0c2a9e-aaaa"
        );
    }

    #[test]
    fn test_resolve_ambiguous_prefix() {
        let err = resolve_id("experience", "5f", candidates()).unwrap_err();
        assert!(err.to_string().contains("Ambiguous"));
    }

    #[test]
    fn test_resolve_no_match() {
        let err = resolve_id("project", "zz", candidates()).unwrap_err();
        assert!(err.to_string().contains("No project found"));
        assert!(resolve_id("project", "", candidates()).is_err());
    }

    #[test]
    fn test_unsaved_warning_carries_hint() {
        use resumecraft_core::{Config, PersonalInfoPatch};
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp.path().to_path_buf(),
            storage_key: "../escaped".to_string(),
            ..Config::default()
        };
        let mut store = ResumeStore::open_with_config(&config);
        assert!(unsaved_warning(&store).is_none());

        store.update_personal_info(PersonalInfoPatch {
            first_name: Some("Ada".to_string()),
            ..Default::default()
        });
        let message = unsaved_warning(&store).unwrap();
        assert!(message.contains("could not be saved"));
        assert!(message.contains("Invalid storage key"));
        assert!(message.contains("Hint: Pick a storage key"));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("Rust, Go ,, SQL "),
            vec!["Rust".to_string(), "Go".to_string(), "SQL".to_string()]
        );
        assert!(split_list("").is_empty());
    }
}
