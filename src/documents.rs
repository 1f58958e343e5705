//! Document loading from the filesystem.
//!
//! Each path argument is either a file, loaded as one document, or a
//! directory, walked recursively and filtered through the `[input]` include
//! and exclude globs. Directory results are sorted by relative path so runs
//! are deterministic.
//!
//! Document text is read as UTF-8; line breaks become spaces and the result
//! is trimmed. A document with no remaining text is rejected.

use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use keyword_provenance_core::models::RawDocument;
use keyword_provenance_core::ExtractError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::InputConfig;

/// Load every document named by `paths`, in argument order.
pub fn load_documents(paths: &[PathBuf], input: &InputConfig) -> Result<Vec<RawDocument>> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            let files = scan_directory(path, input)?;
            if files.is_empty() {
                return Err(ExtractError::input(
                    path.display().to_string(),
                    "directory contains no matching files",
                )
                .into());
            }
            for file in files {
                documents.push(load_document(&file)?);
            }
        } else {
            documents.push(load_document(path)?);
        }
    }
    Ok(documents)
}

/// Load a single file as a document named after its file name.
pub fn load_document(path: &Path) -> Result<RawDocument, ExtractError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path)
        .map_err(|e| ExtractError::input(&display, e.to_string()))?;

    let text = normalize_text(&text);
    if text.is_empty() {
        return Err(ExtractError::input(display, "document is empty"));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or(display);

    Ok(RawDocument::new(name, text))
}

fn normalize_text(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ").trim().to_string()
}

/// Files under `root` matching the include globs, sorted by relative path.
pub fn scan_directory(root: &Path, input: &InputConfig) -> Result<Vec<PathBuf>> {
    let include_set = build_globset(&input.include_globs)?;

    let mut default_excludes = vec!["**/.git/**".to_string(), "**/target/**".to_string()];
    default_excludes.extend(input.exclude_globs.iter().cloned());
    let exclude_set = build_globset(&default_excludes)?;

    let mut files: Vec<(String, PathBuf)> = Vec::new();

    let walker = WalkDir::new(root).follow_links(input.follow_symlinks);
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).display().to_string();
            ExtractError::input(path, e.to_string())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) {
            continue;
        }
        if !include_set.is_match(&rel_str) {
            continue;
        }

        files.push((rel_str, path.to_path_buf()));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(files.into_iter().map(|(_, path)| path).collect())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_document_flattens_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.txt");
        fs::write(&path, "  Rick and Morty.\nMorty's things.\r\n\n").unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.name, "doc.txt");
        assert_eq!(doc.text, "Rick and Morty. Morty's things.");
    }

    #[test]
    fn test_empty_document_is_input_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blank.txt");
        fs::write(&path, " \n\n \n").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Input { .. }));
        assert!(err.to_string().contains("document is empty"));
    }

    #[test]
    fn test_missing_document_is_input_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_document(&tmp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::Input { .. }));
    }

    #[test]
    fn test_scan_directory_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::create_dir_all(root.join("drafts")).unwrap();
        fs::write(root.join("b.txt"), "Beta.").unwrap();
        fs::write(root.join("a.md"), "Alpha.").unwrap();
        fs::write(root.join("nested/c.txt"), "Gamma.").unwrap();
        fs::write(root.join("drafts/d.txt"), "Delta.").unwrap();
        fs::write(root.join("image.png"), "binary").unwrap();

        let input = InputConfig {
            exclude_globs: vec!["drafts/**".to_string()],
            ..InputConfig::default()
        };
        let files = scan_directory(root, &input).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.md", "b.txt", "nested/c.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_error_is_input_error() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("nested/c.txt"), "Gamma.").unwrap();
        std::os::unix::fs::symlink(root, root.join("nested/loop")).unwrap();

        let input = InputConfig {
            follow_symlinks: true,
            ..InputConfig::default()
        };
        let err = scan_directory(root, &input).unwrap_err();
        let err = err.downcast_ref::<ExtractError>().unwrap();
        assert!(matches!(err, ExtractError::Input { .. }));
        let message = err.to_string();
        assert!(message.starts_with("cannot use document"), "{}", message);
        assert!(message.contains("loop"), "{}", message);
    }

    #[test]
    fn test_load_documents_mixes_files_and_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("corpus")).unwrap();
        fs::write(root.join("corpus/one.txt"), "One.").unwrap();
        fs::write(root.join("corpus/two.txt"), "Two.").unwrap();
        fs::write(root.join("single.txt"), "Single.").unwrap();

        let docs = load_documents(
            &[root.join("single.txt"), root.join("corpus")],
            &InputConfig::default(),
        )
        .unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["single.txt", "one.txt", "two.txt"]);
    }

    #[test]
    fn test_empty_directory_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let err = load_documents(&[tmp.path().to_path_buf()], &InputConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("no matching files"));
    }
}
