use crate::utils::error::{EtlError, Result};
use std::ffi::OsString;
use std::path::{Component, PathBuf};

/// Upper bound for column indices accepted from configuration.
pub const MAX_COLUMN_INDEX: usize = 1024;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_column(field_name: &str, column: usize) -> Result<()> {
    if column > MAX_COLUMN_INDEX {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: column.to_string(),
            reason: format!("Column index must be between 0 and {}", MAX_COLUMN_INDEX),
        });
    }
    Ok(())
}

/// Absolute form of `path` with `.` and `..` folded. The deepest ancestor that
/// exists is canonicalized so symlinked directories compare equal.
pub fn normalize_path(path: &str) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| PathBuf::from(path));

    let mut lexical = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                lexical.pop();
            }
            other => lexical.push(other.as_os_str()),
        }
    }

    let mut existing = lexical.as_path();
    let mut missing: Vec<OsString> = Vec::new();
    loop {
        if let Ok(mut resolved) = std::fs::canonicalize(existing) {
            resolved.extend(missing.iter().rev());
            return resolved;
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return lexical,
        }
    }
}

pub fn same_file(a: &str, b: &str) -> bool {
    normalize_path(a) == normalize_path(b)
}

/// 輸入與輸出指向同一檔案時，覆寫會毀掉來源資料
pub fn validate_distinct_paths(field_name: &str, existing: &str, candidate: &str) -> Result<()> {
    if same_file(existing, candidate) {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: candidate.to_string(),
            reason: format!("Path resolves to the same file as '{}'", existing),
        });
    }
    Ok(())
}
