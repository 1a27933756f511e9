//! Folder tree traversal
//!
//! Expands a folder subtree into the flat list of files it contains, tagging
//! each file with the names of the folders between the traversal root and the
//! file's parent.

use crate::client::FolderSource;
use crate::error::Result;
use crate::types::DriveFile;
use std::collections::HashSet;
use tracing::{instrument, warn};

/// A file discovered during traversal.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub file: DriveFile,
    /// Ancestor folder names below the traversal root, outermost first.
    /// Empty for files sitting directly in the root.
    pub path: Vec<String>,
}

/// Collects every file beneath `folder_id`, depth-first.
///
/// A folder's own files are emitted first, in listing order, followed by each
/// sub-folder's subtree. Folder ids that have already been expanded are
/// skipped with a warning, so a tree that unexpectedly references an ancestor
/// cannot loop the traversal.
#[instrument(skip(source))]
pub async fn collect_files<S>(source: &S, folder_id: &str) -> Result<Vec<FileEntry>>
where
    S: FolderSource + ?Sized,
{
    let mut entries = Vec::new();
    let mut visited = HashSet::new();
    let mut pending: Vec<(String, Vec<String>)> = vec![(folder_id.to_string(), Vec::new())];

    while let Some((folder, path)) = pending.pop() {
        if !visited.insert(folder.clone()) {
            warn!("Folder {} encountered twice during traversal, skipping", folder);
            continue;
        }

        let children = source.list_children(&folder).await?;

        let mut subfolders = Vec::new();
        for child in children {
            if child.is_folder() {
                let mut child_path = path.clone();
                child_path.push(child.name.clone());
                subfolders.push((child.id.clone(), child_path));
            } else {
                entries.push(FileEntry {
                    file: child,
                    path: path.clone(),
                });
            }
        }

        // Pushed in reverse so the worklist pops sub-folders in listing order.
        pending.extend(subfolders.into_iter().rev());
    }

    Ok(entries)
}
