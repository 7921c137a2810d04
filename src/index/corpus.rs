use anyhow::{Context, Result, ensure};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A document read from disk
#[derive(Debug, Clone)]
pub struct Document {
    /// File name, used for display
    pub name: String,
    pub path: PathBuf,
    pub text: String,
}

/// Read every regular file directly inside `folder`, sorted by file name.
///
/// Hidden and ignored files are included; subdirectories are not descended.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn load_corpus(folder: &Path) -> Result<Vec<Document>> {
    ensure!(folder.is_dir(), "Not a directory: {}", folder.display());

    let walker = WalkBuilder::new(folder)
        .standard_filters(false)
        .follow_links(true)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to list {}", folder.display()))?;
        if entry.depth() == 0 {
            continue;
        }
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            debug!(path = %entry.path().display(), "skipping non-file entry");
            continue;
        }

        let path = entry.path().to_path_buf();
        let bytes =
            fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), "document is not valid UTF-8, replacing bad bytes");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        documents.push(Document {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            text,
        });
    }

    debug!(folder = %folder.display(), documents = documents.len(), "loaded corpus");
    Ok(documents)
}
