//! End-to-end delete flows, including the ambiguous multi-match case.

use std::fs;
use std::path::Path;

use catalog_edit::cli::ops::{self, Paths};
use catalog_edit::cli::Outcome;
use catalog_edit::page::{locate, mutator};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
    <div class="stats">
        <div class="text-4xl md:text-5xl font-black mb-1" id="tool-count">2+</div>
        <div class="text-sm opacity-80">Tools</div>
        <div class="text-4xl md:text-5xl font-black mb-1">3</div>
        <div class="text-sm opacity-80">Templates</div>
    </div>
    <script>
        const aiTools = [
            {
                name: "ChatGPT",
                rating: 4.8
            },
            {
                name: "Figma AI",
                rating: 4.2
            }
        ];

        const learningTemplates = [
            {
                title: "Duplicated Method",
                difficulty: "Beginner"
            },
            {
                title: "Unique Method",
                difficulty: "Advanced"
            },
            {
                title: "Duplicated Method",
                difficulty: "Intermediate"
            }
        ];
    </script>
</body>
</html>
"#;

fn scratch_paths(dir: &Path) -> Paths {
    let html = dir.join("index.html");
    fs::write(&html, PAGE).unwrap();
    Paths {
        html,
        data_dir: dir.join("data"),
    }
}

#[test]
fn delete_tool_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let paths = scratch_paths(dir.path());

    let outcome = ops::delete_tool(&paths, "Figma AI").unwrap();
    assert_eq!(outcome, Outcome::Done);

    let page = fs::read_to_string(&paths.html).unwrap();
    assert!(!page.contains("Figma AI"));
    assert!(page.contains("ChatGPT"));
    assert!(page.contains(r#"id="tool-count">1+</div>"#));

    // Array stays syntactically valid: no dangling comma before the bracket.
    let region = locate(&page, "aiTools").unwrap();
    assert!(!region.body.trim_end().ends_with(','));
}

#[test]
fn delete_missing_key_is_nonfatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = scratch_paths(dir.path());

    let outcome = ops::delete_tool(&paths, "Nonexistent").unwrap();
    assert_eq!(outcome, Outcome::NotFound);

    assert_eq!(fs::read_to_string(&paths.html).unwrap(), PAGE);
    assert!(!dir.path().join("backups").exists());
}

#[test]
fn ambiguous_delete_removes_every_match() {
    let dir = tempfile::tempdir().unwrap();
    let paths = scratch_paths(dir.path());

    let outcome = ops::delete_template(&paths, "Duplicated Method").unwrap();
    assert_eq!(outcome, Outcome::Done);

    let page = fs::read_to_string(&paths.html).unwrap();
    assert!(!page.contains("Duplicated Method"));
    assert!(page.contains("Unique Method"));
    // Both removals hit the counter: 3 -> 1.
    assert!(page.contains("font-black mb-1\">1</div>"));
}

#[test]
fn ambiguous_match_count_is_reported_by_the_mutator() {
    let region = locate(PAGE, "learningTemplates").unwrap();
    let (_, removed) = mutator::remove_entries(region.body, "title", "Duplicated Method").unwrap();
    assert_eq!(removed, 2);
}

#[test]
fn delete_backs_up_the_original_page() {
    let dir = tempfile::tempdir().unwrap();
    let paths = scratch_paths(dir.path());

    ops::delete_tool(&paths, "ChatGPT").unwrap();

    let backups: Vec<_> = fs::read_dir(dir.path().join("backups"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), PAGE);
}
