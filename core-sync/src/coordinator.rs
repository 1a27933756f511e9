//! # Import Coordinator
//!
//! Orchestrates a full import run from a Google Drive folder tree into the
//! course catalog.
//!
//! ## Overview
//!
//! The `ImportCoordinator` is the central orchestrator for import runs. It
//! coordinates between the other modules to:
//! - Resolve the root folder via `FolderSource`
//! - Treat first-level sub-folders as departments and second-level
//!   sub-folders as courses
//! - Infer course and material metadata from folder and file names
//! - Upsert courses and materials through the catalog repositories
//!
//! ## Workflow
//!
//! 1. Resolve the root folder's metadata (name and id)
//! 2. List the root folder; every sub-folder is a department
//! 3. List each department folder; every sub-folder is a course
//! 4. Upsert the course inferred from the folder name
//! 5. Walk the course folder recursively, collecting every file with its
//!    ancestor path
//! 6. Upsert one material per file, keyed by the Drive file id
//!
//! The run is sequential and fail-fast: the first error aborts the import
//! and propagates to the caller. Re-running after a partial failure is safe
//! because every write is an upsert on a natural key.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let coordinator = ImportCoordinator::new(drive, courses, materials);
//! let stats = coordinator.run("root-folder-id").await?;
//! println!("imported {} materials", stats.materials);
//! ```

use std::sync::Arc;

use core_catalog::{
    CourseId, CourseRepository, MaterialMetadata, MaterialRepository, NewCourse, NewMaterial,
};
use core_metadata::{infer_course, infer_material_type, infer_term, normalize_title};
use provider_google_drive::{collect_files, DriveFile, FileEntry, FolderSource};
use tracing::{error, info, instrument};

use crate::error::Result;

/// Value stored in the `source` column of every imported material.
const MATERIAL_SOURCE: &str = "google-drive";

// ============================================================================
// Import Stats
// ============================================================================

/// Counts of entities imported during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub departments: usize,
    pub courses: usize,
    pub materials: usize,
}

// ============================================================================
// Import Coordinator
// ============================================================================

/// Drives a full import run against a folder tree.
pub struct ImportCoordinator {
    drive: Arc<dyn FolderSource>,
    courses: Arc<dyn CourseRepository>,
    materials: Arc<dyn MaterialRepository>,
}

impl ImportCoordinator {
    pub fn new(
        drive: Arc<dyn FolderSource>,
        courses: Arc<dyn CourseRepository>,
        materials: Arc<dyn MaterialRepository>,
    ) -> Self {
        Self {
            drive,
            courses,
            materials,
        }
    }

    /// Imports the whole tree rooted at `root_folder_id`.
    ///
    /// Returns the entity counts on success. On failure the error is
    /// propagated after logging which department, course, or file was in
    /// progress; entities imported before the failure remain in the catalog.
    #[instrument(skip(self))]
    pub async fn run(&self, root_folder_id: &str) -> Result<ImportStats> {
        info!("Fetching folders from Google Drive");
        let root = self.drive.get_metadata(root_folder_id).await?;
        info!("Root folder: {} ({})", root.name, root.id);

        let children = self.drive.list_children(&root.id).await?;
        let mut stats = ImportStats::default();

        for department in children.into_iter().filter(DriveFile::is_folder) {
            if let Err(import_error) = self.import_department(&department, &mut stats).await {
                error!("Department {} import failed", department.name);
                return Err(import_error);
            }
            stats.departments += 1;
        }

        info!(
            departments = stats.departments,
            courses = stats.courses,
            materials = stats.materials,
            "Import complete"
        );
        Ok(stats)
    }

    /// Imports every course folder directly under a department folder.
    async fn import_department(
        &self,
        department: &DriveFile,
        stats: &mut ImportStats,
    ) -> Result<()> {
        // Surrounding whitespace in the folder name is not part of the
        // department name, but the folder listing keeps it.
        let department_name = department.name.trim().to_string();
        info!("Importing department: {}", department_name);

        let children = self.drive.list_children(&department.id).await?;

        for folder in children.into_iter().filter(DriveFile::is_folder) {
            if let Err(import_error) = self.import_course(&folder, &department_name, stats).await {
                error!("Course folder {} import failed", folder.name);
                return Err(import_error);
            }
            stats.courses += 1;
        }

        Ok(())
    }

    /// Upserts one course and all materials found beneath its folder.
    async fn import_course(
        &self,
        folder: &DriveFile,
        department: &str,
        stats: &mut ImportStats,
    ) -> Result<()> {
        let inferred = infer_course(&folder.name, department);
        info!("Importing course: {} ({})", inferred.code, inferred.name);

        let course = NewCourse {
            code: inferred.code,
            name: inferred.name,
            department: inferred.department,
            description: format!(
                "Imported automatically from Google Drive folder: {}",
                folder.name
            ),
        };
        let course_id = self.courses.upsert(&course).await?;

        let entries = collect_files(self.drive.as_ref(), &folder.id).await?;
        for entry in entries {
            if let Err(import_error) = self.import_material(course_id, &entry).await {
                error!("Material {} import failed", entry.file.name);
                return Err(import_error);
            }
            stats.materials += 1;
        }

        Ok(())
    }

    async fn import_material(&self, course_id: CourseId, entry: &FileEntry) -> Result<()> {
        let file = &entry.file;
        let term = infer_term(&file.name, &entry.path);

        let material = NewMaterial {
            course_id,
            title: normalize_title(&file.name),
            material_type: infer_material_type(&file.name, &entry.path)
                .as_str()
                .to_string(),
            semester: term.semester,
            year: term.year,
            file_url: format!(
                "https://drive.google.com/uc?id={}&export=download",
                file.id
            ),
            file_name: file.name.clone(),
            file_size: file.size_bytes(),
            source: MATERIAL_SOURCE.to_string(),
            external_id: file.id.clone(),
            metadata: MaterialMetadata {
                path: entry.path.clone(),
                mime_type: file.mime_type.clone(),
                drive_created_time: file.created_time.clone(),
                drive_modified_time: file.modified_time.clone(),
            },
        };

        self.materials.upsert(&material).await?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
