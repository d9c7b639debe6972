//! End-to-end add flows against a scratch copy of the page.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use catalog_edit::cli::ops::{self, Paths};
use catalog_edit::cli::prompt::Prompter;
use catalog_edit::cli::Outcome;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
    <div class="stats">
        <div class="text-4xl md:text-5xl font-black mb-1" id="tool-count">0+</div>
        <div class="text-sm opacity-80">Tools</div>
        <div class="text-4xl md:text-5xl font-black mb-1">4</div>
        <div class="text-sm opacity-80">Templates</div>
    </div>
    <script>
        const aiTools = [
        ];

        const learningTemplates = [
            {
                title: "Existing Template",
                difficulty: "Beginner"
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

fn silent_prompter() -> Prompter<Cursor<Vec<u8>>> {
    Prompter::new(Cursor::new(Vec::new()))
}

#[test]
fn add_tool_from_file_clamps_rating_and_bumps_counter() {
    let dir = tempfile::tempdir().unwrap();
    let paths = scratch_paths(dir.path());

    let record = dir.path().join("new_tool.json");
    fs::write(
        &record,
        r#"{
            "name": "Midjourney",
            "logo": "https://example.com/mj.png",
            "category": "Image Generation",
            "description": "Generates images from text prompts",
            "rating": 6.2,
            "website": "https://midjourney.com",
            "docs": "https://docs.midjourney.com"
        }"#,
    )
    .unwrap();

    let outcome =
        ops::add_tool(&paths, Some(record.as_path()), true, &mut silent_prompter()).unwrap();
    assert_eq!(outcome, Outcome::Done);

    let page = fs::read_to_string(&paths.html).unwrap();
    assert_eq!(page.matches(r#"name: "Midjourney""#).count(), 1);
    assert!(page.contains("rating: 5.0"));
    assert!(page.contains(r#"id="tool-count">1+</div>"#));
    assert!(page.contains(r#"logoType: "image""#));
    assert!(page.contains(r#"pricing: "Freemium""#));

    // Pre-write backup holds the original page.
    let backups: Vec<_> = fs::read_dir(dir.path().join("backups"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), PAGE);

    // Journal gained the validated record.
    let journal = fs::read_to_string(paths.tools_journal()).unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&journal).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Midjourney");
    assert_eq!(entries[0]["rating"], 5.0);
}

#[test]
fn add_tool_missing_record_file_aborts_before_touching_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let paths = scratch_paths(dir.path());

    let missing = dir.path().join("nope.json");
    let err = ops::add_tool(&paths, Some(missing.as_path()), true, &mut silent_prompter()).unwrap_err();
    assert!(err.to_string().contains("not found"));

    assert_eq!(fs::read_to_string(&paths.html).unwrap(), PAGE);
    assert!(!dir.path().join("backups").exists());
}

#[test]
fn declined_confirmation_cancels_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = scratch_paths(dir.path());

    let record = dir.path().join("new_tool.json");
    fs::write(
        &record,
        r#"{
            "name": "Claude",
            "logo": "fas fa-robot",
            "category": "Chat",
            "description": "Assistant",
            "website": "https://claude.ai",
            "docs": "https://docs.claude.com"
        }"#,
    )
    .unwrap();

    let mut prompter = Prompter::new(Cursor::new(b"no\n".to_vec()));
    let outcome = ops::add_tool(&paths, Some(record.as_path()), false, &mut prompter).unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(fs::read_to_string(&paths.html).unwrap(), PAGE);
}

#[test]
fn add_template_interactively_keeps_multiline_body() {
    let dir = tempfile::tempdir().unwrap();
    let paths = scratch_paths(dir.path());

    let input = "Socratic Method\n\
                 1\n\
                 2\n\
                 1\n\
                 Learn by asking questions\n\
                 Explain [TOPIC] to me.\n\
                 Then ask me ${LEVEL} questions.\n\
                 END\n\
                 Replace [TOPIC] with Rust\n\
                 Be patient\n\
                 \n";
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()));

    let outcome = ops::add_template(&paths, None, true, &mut prompter).unwrap();
    assert_eq!(outcome, Outcome::Done);

    let page = fs::read_to_string(&paths.html).unwrap();
    assert_eq!(page.matches(r#"title: "Socratic Method""#).count(), 1);
    assert!(page.contains("template: `Explain [TOPIC] to me.\nThen ask me \\${LEVEL} questions.`"));
    assert!(page.contains(r#"icon: "fas fa-brain""#));
    assert!(page.contains(r#"difficulty: "Beginner""#));
    assert!(page.contains(r#"estimatedTime: "30-60 min""#));
    // Template counter: 4 -> 5; tool counter untouched.
    assert!(page.contains("font-black mb-1\">5</div>"));
    assert!(page.contains(r#"id="tool-count">0+</div>"#));

    let journal = fs::read_to_string(paths.templates_journal()).unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&journal).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "Socratic Method");
}

#[test]
fn duplicate_key_warns_but_still_adds() {
    let dir = tempfile::tempdir().unwrap();
    let paths = scratch_paths(dir.path());

    let record = dir.path().join("dup.json");
    fs::write(
        &record,
        r#"{
            "title": "Existing Template",
            "category": "Research",
            "description": "Second copy",
            "template": "Body",
            "example": "Example",
            "tips": "Tips"
        }"#,
    )
    .unwrap();

    let outcome =
        ops::add_template(&paths, Some(record.as_path()), true, &mut silent_prompter()).unwrap();
    assert_eq!(outcome, Outcome::Done);

    let page = fs::read_to_string(&paths.html).unwrap();
    assert_eq!(page.matches(r#"title: "Existing Template""#).count(), 2);
}
