//! Integration tests for the import coordinator.
//!
//! The coordinator runs against an in-memory Drive tree and in-memory
//! repositories, which keeps the tests focused on orchestration behavior:
//! - Re-running an import produces no duplicate rows and keeps course ids stable
//! - A listing failure mid-run aborts before any later material is written
//! - Every course row is written before the materials that reference it

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use core_catalog::{CourseId, CourseRepository, MaterialRepository, NewCourse, NewMaterial};
use core_sync::{ImportCoordinator, ImportError, ImportStats};
use provider_google_drive::{DriveError, DriveFile, FolderSource, FOLDER_MIME_TYPE};
use tokio::sync::Mutex as AsyncMutex;

// ============================================================================
// Fake Drive Tree
// ============================================================================

/// Serves a canned folder tree keyed by folder id.
struct FakeDrive {
    root_name: String,
    tree: HashMap<String, Vec<DriveFile>>,
    fail_listing_for: Option<String>,
}

impl FakeDrive {
    fn new(root_name: &str, tree: HashMap<String, Vec<DriveFile>>) -> Self {
        Self {
            root_name: root_name.to_string(),
            tree,
            fail_listing_for: None,
        }
    }

    fn fail_listing_for(mut self, folder_id: &str) -> Self {
        self.fail_listing_for = Some(folder_id.to_string());
        self
    }
}

#[async_trait]
impl FolderSource for FakeDrive {
    async fn list_children(
        &self,
        folder_id: &str,
    ) -> provider_google_drive::Result<Vec<DriveFile>> {
        if self.fail_listing_for.as_deref() == Some(folder_id) {
            return Err(DriveError::Api {
                status_code: 500,
                message: format!("injected listing failure for {folder_id}"),
            });
        }
        Ok(self.tree.get(folder_id).cloned().unwrap_or_default())
    }

    async fn get_metadata(&self, file_id: &str) -> provider_google_drive::Result<DriveFile> {
        Ok(folder(file_id, &self.root_name))
    }
}

// ============================================================================
// In-Memory Repositories
// ============================================================================

#[derive(Default)]
struct CourseRows {
    by_code: HashMap<String, (CourseId, NewCourse)>,
    next_id: i64,
    upserts: usize,
}

/// Course store keyed by code, mirroring the unique constraint in Postgres.
struct InMemoryCourseRepository {
    rows: AsyncMutex<CourseRows>,
    events: Arc<AsyncMutex<Vec<String>>>,
}

impl InMemoryCourseRepository {
    fn new(events: Arc<AsyncMutex<Vec<String>>>) -> Self {
        Self {
            rows: AsyncMutex::new(CourseRows::default()),
            events,
        }
    }

    async fn rows_by_code(&self) -> HashMap<String, (CourseId, NewCourse)> {
        self.rows.lock().await.by_code.clone()
    }

    async fn upsert_count(&self) -> usize {
        self.rows.lock().await.upserts
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn upsert(&self, course: &NewCourse) -> core_catalog::Result<CourseId> {
        self.events
            .lock()
            .await
            .push(format!("course:{}", course.code));

        let mut rows = self.rows.lock().await;
        rows.upserts += 1;
        let id = match rows.by_code.get(&course.code) {
            Some((existing_id, _)) => *existing_id,
            None => {
                rows.next_id += 1;
                CourseId(rows.next_id)
            }
        };
        rows.by_code.insert(course.code.clone(), (id, course.clone()));
        Ok(id)
    }
}

#[derive(Default)]
struct MaterialRows {
    by_external_id: HashMap<String, NewMaterial>,
    upserts: usize,
}

/// Material store keyed by external id, mirroring the unique constraint in
/// Postgres.
struct InMemoryMaterialRepository {
    rows: AsyncMutex<MaterialRows>,
    events: Arc<AsyncMutex<Vec<String>>>,
}

impl InMemoryMaterialRepository {
    fn new(events: Arc<AsyncMutex<Vec<String>>>) -> Self {
        Self {
            rows: AsyncMutex::new(MaterialRows::default()),
            events,
        }
    }

    async fn rows_by_external_id(&self) -> HashMap<String, NewMaterial> {
        self.rows.lock().await.by_external_id.clone()
    }

    async fn upsert_count(&self) -> usize {
        self.rows.lock().await.upserts
    }
}

#[async_trait]
impl MaterialRepository for InMemoryMaterialRepository {
    async fn upsert(&self, material: &NewMaterial) -> core_catalog::Result<()> {
        self.events
            .lock()
            .await
            .push(format!("material:{}", material.external_id));

        let mut rows = self.rows.lock().await;
        rows.upserts += 1;
        rows.by_external_id
            .insert(material.external_id.clone(), material.clone());
        Ok(())
    }
}

// ============================================================================
// Test Utilities
// ============================================================================

fn folder(id: &str, name: &str) -> DriveFile {
    DriveFile {
        id: id.to_string(),
        name: name.to_string(),
        mime_type: FOLDER_MIME_TYPE.to_string(),
        size: None,
        created_time: None,
        modified_time: None,
    }
}

fn pdf(id: &str, name: &str) -> DriveFile {
    DriveFile {
        id: id.to_string(),
        name: name.to_string(),
        mime_type: "application/pdf".to_string(),
        size: Some("2048".to_string()),
        created_time: Some("2023-09-01T00:00:00.000Z".to_string()),
        modified_time: Some("2023-12-15T00:00:00.000Z".to_string()),
    }
}

struct Harness {
    coordinator: ImportCoordinator,
    courses: Arc<InMemoryCourseRepository>,
    materials: Arc<InMemoryMaterialRepository>,
    events: Arc<AsyncMutex<Vec<String>>>,
}

fn setup_harness(drive: FakeDrive) -> Harness {
    let events = Arc::new(AsyncMutex::new(Vec::new()));
    let courses = Arc::new(InMemoryCourseRepository::new(events.clone()));
    let materials = Arc::new(InMemoryMaterialRepository::new(events.clone()));

    let coordinator = ImportCoordinator::new(
        Arc::new(drive),
        courses.clone() as Arc<dyn CourseRepository>,
        materials.clone() as Arc<dyn MaterialRepository>,
    );

    Harness {
        coordinator,
        courses,
        materials,
        events,
    }
}

/// Two departments, three courses, four files spread over nested folders.
fn campus_tree() -> HashMap<String, Vec<DriveFile>> {
    HashMap::from([
        (
            "root".to_string(),
            vec![
                folder("dep-eng", "  Engineering  "),
                folder("dep-sci", "Science"),
            ],
        ),
        (
            "dep-eng".to_string(),
            vec![
                folder("crs-cs101", "CS 101 - Intro to Programming"),
                folder("crs-math221", "MATH 221 – Linear Algebra"),
            ],
        ),
        (
            "dep-sci".to_string(),
            vec![folder("crs-phys1", "PHYS 121 - Mechanics")],
        ),
        (
            "crs-cs101".to_string(),
            vec![
                pdf("f-midterm", "Midterm_Fall_2023.pdf"),
                folder("sub-notes", "Notes"),
            ],
        ),
        (
            "sub-notes".to_string(),
            vec![pdf("f-week1", "Week 1 Lecture.pdf")],
        ),
        (
            "crs-math221".to_string(),
            vec![pdf("f-pset", "Problem Set 1.pdf")],
        ),
        (
            "crs-phys1".to_string(),
            vec![pdf("f-lab", "Lab Manual.pdf")],
        ),
    ])
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_full_run_imports_every_department_course_and_file() {
    let harness = setup_harness(FakeDrive::new("University Archive", campus_tree()));

    let stats = harness.coordinator.run("root").await.unwrap();
    assert_eq!(
        stats,
        ImportStats {
            departments: 2,
            courses: 3,
            materials: 4,
        }
    );

    let courses = harness.courses.rows_by_code().await;
    assert_eq!(courses.len(), 3);
    let (_, cs101) = &courses["CS 101"];
    assert_eq!(cs101.name, "Intro to Programming");
    assert_eq!(cs101.department, "Engineering");
    let (_, phys121) = &courses["PHYS 121"];
    assert_eq!(phys121.department, "Science");

    let materials = harness.materials.rows_by_external_id().await;
    assert_eq!(materials.len(), 4);
    let week1 = &materials["f-week1"];
    assert_eq!(week1.title, "Week 1 Lecture");
    assert_eq!(week1.metadata.path, vec!["Notes".to_string()]);
    assert_eq!(week1.material_type, "notes");
    let midterm = &materials["f-midterm"];
    assert_eq!(midterm.material_type, "exam");
    assert_eq!(midterm.semester.as_deref(), Some("Fall"));
    assert_eq!(midterm.year, Some(2023));
    assert_eq!(midterm.file_size, Some(2048));
    assert_eq!(
        midterm.file_url,
        "https://drive.google.com/uc?id=f-midterm&export=download"
    );
}

#[tokio::test]
async fn test_second_run_creates_no_duplicates_and_keeps_ids_stable() {
    let harness = setup_harness(FakeDrive::new("University Archive", campus_tree()));

    let first = harness.coordinator.run("root").await.unwrap();
    let ids_after_first: HashMap<String, CourseId> = harness
        .courses
        .rows_by_code()
        .await
        .into_iter()
        .map(|(code, (id, _))| (code, id))
        .collect();

    let second = harness.coordinator.run("root").await.unwrap();
    assert_eq!(first, second);

    // Same rows, same ids; only the upsert counters doubled.
    let courses = harness.courses.rows_by_code().await;
    assert_eq!(courses.len(), 3);
    for (code, (id, _)) in &courses {
        assert_eq!(ids_after_first[code], *id);
    }
    assert_eq!(harness.materials.rows_by_external_id().await.len(), 4);
    assert_eq!(harness.courses.upsert_count().await, 6);
    assert_eq!(harness.materials.upsert_count().await, 8);
}

#[tokio::test]
async fn test_listing_failure_on_third_course_aborts_the_run() {
    let drive =
        FakeDrive::new("University Archive", campus_tree()).fail_listing_for("crs-phys1");
    let harness = setup_harness(drive);

    let result = harness.coordinator.run("root").await;
    assert!(matches!(result, Err(ImportError::Drive(_))));

    // The failing course row was written before its folder walk, but nothing
    // discovered after the failure made it into the store.
    let courses = harness.courses.rows_by_code().await;
    assert_eq!(courses.len(), 3);
    let materials = harness.materials.rows_by_external_id().await;
    assert_eq!(materials.len(), 3);
    assert!(!materials.contains_key("f-lab"));
}

#[tokio::test]
async fn test_course_rows_are_written_before_their_materials() {
    let harness = setup_harness(FakeDrive::new("University Archive", campus_tree()));

    harness.coordinator.run("root").await.unwrap();

    let events = harness.events.lock().await.clone();
    assert_eq!(
        events,
        vec![
            "course:CS 101".to_string(),
            "material:f-midterm".to_string(),
            "material:f-week1".to_string(),
            "course:MATH 221".to_string(),
            "material:f-pset".to_string(),
            "course:PHYS 121".to_string(),
            "material:f-lab".to_string(),
        ]
    );
}
