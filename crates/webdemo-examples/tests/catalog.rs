//! End-to-end catalog loading over a realistic examples tree.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use webdemo_examples::{Catalog, CatalogLoader, CatalogLoaderConfig, Example, FileType};

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Build a tree:
///
/// ```text
/// /                     common: Util.kt (read-only)
/// /Getting Started/     common: Shared.kt, Hidden.kt (hidden),
///                       Checker.kt (hidden, skipped in test mode)
///     Hello World       Main.kt, help with kotlin + scala blocks
///     Sum               Test.kt, Solution.kt, Task.kt, solution descriptor
///     Broken            missing confType
///     Loops             no own files
/// ```
fn build_tree(root: &Path) {
    write(
        &root.join("manifest.json"),
        r#"{
            "files": [{"filename": "Util.kt", "modifiable": false}],
            "folders": ["Getting Started"]
        }"#,
    );
    write(&root.join("Util.kt"), "fun util() = 1\r\n");

    let folder = root.join("Getting Started");
    write(
        &folder.join("manifest.json"),
        r#"{
            "taskFolder": true,
            "files": [
                {"filename": "Shared.kt", "modifiable": true},
                {"filename": "Hidden.kt", "modifiable": false, "hidden": true},
                {"filename": "Checker.kt", "modifiable": false, "hidden": true, "skipInTestVersion": true}
            ],
            "examples": ["Hello World", "Sum", "Broken", "Loops"]
        }"#,
    );
    write(&folder.join("Shared.kt"), "fun shared() = 2");
    write(&folder.join("Hidden.kt"), "fun hidden() = 3");
    write(&folder.join("Checker.kt"), "fun check() = true");

    let hello = folder.join("Hello World");
    write(
        &hello.join("manifest.json"),
        r#"{
            "confType": "java",
            "args": "--verbose",
            "expectedOutput": "Hello, world!",
            "files": [{"filename": "Main.kt", "modifiable": true}]
        }"#,
    );
    write(&hello.join("Main.kt"), "fun main() {\r\n    println(\"Hello, world!\")\r\n}\r\n");
    write(
        &hello.join("task.md"),
        "# Hello\n\n```kotlin\nfun main() {}\n```\n\n```scala\nobject Main\n```\n",
    );

    let sum = folder.join("Sum");
    write(
        &sum.join("manifest.json"),
        r#"{
            "confType": "junit",
            "expectedOutputFile": "expected.txt",
            "taskWindows": [{"line": 1, "ch": 8, "toLine": 1, "toCh": 14}],
            "files": [{"filename": "Answer.kt", "modifiable": false, "type": "solution"}]
        }"#,
    );
    write(&sum.join("expected.txt"), "3\n");
    write(&sum.join("Answer.kt"), "fun answer() = 3");
    write(&sum.join("Test.kt"), "class Test");
    write(&sum.join("Solution.kt"), "fun sum(a: Int, b: Int) = a + b");
    write(&sum.join("Task.kt"), "fun sum(a: Int, b: Int): Int = TODO()");

    write(&folder.join("Broken/manifest.json"), r#"{"args": ""}"#);

    write(&folder.join("Loops/manifest.json"), r#"{"confType": "java"}"#);
}

fn load(root: &Path, test_version: bool) -> Catalog {
    let config = CatalogLoaderConfig {
        test_version,
        ..CatalogLoaderConfig::new(root)
    };
    CatalogLoader::new(config).load().unwrap()
}

fn names(example: &Example) -> Vec<&str> {
    example.files.iter().map(|file| file.name.as_str()).collect()
}

#[test]
fn test_folder_structure() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    let catalog = load(temp_dir.path(), false);
    let folder = catalog.find_folder("/Getting Started/").unwrap();
    let example_names: Vec<&str> = folder
        .examples()
        .iter()
        .map(|&id| catalog.example(id).name.as_str())
        .collect();

    assert_eq!(catalog.root().url, "/");
    assert!(folder.task_folder);
    assert_eq!(folder.name, "Getting Started");
    assert_eq!(example_names, vec!["Hello World", "Sum", "Loops"]);
}

#[test]
fn test_common_files_from_every_ancestor() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    let catalog = load(temp_dir.path(), false);

    for example in catalog.examples() {
        assert!(example.file("Util.kt").is_some(), "{} lacks Util.kt", example.id);
        assert!(example.file("Shared.kt").is_some(), "{} lacks Shared.kt", example.id);
        assert!(example.file("Hidden.kt").is_some(), "{} lacks Hidden.kt", example.id);
    }
}

#[test]
fn test_read_only_inherited_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    let catalog = load(temp_dir.path(), false);
    let loops = catalog.find_example("/Getting%20Started/Loops").unwrap();

    assert_eq!(names(loops), vec!["Util.kt", "Shared.kt"]);
    assert_eq!(loops.read_only_file_names, vec!["Util.kt", "Hidden.kt", "Checker.kt"]);
    assert_eq!(loops.hidden_files[0].name, "Hidden.kt");
    let util = loops.file("Util.kt").unwrap();
    assert!(!util.modifiable);
    assert_eq!(util.content, "fun util() = 1\n");
    assert_eq!(util.public_id, "/Getting%20Started/Loops/Util.kt");
}

#[test]
fn test_inherited_file_skipped_in_test_mode() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    let task_catalog = load(temp_dir.path(), false);
    let test_catalog = load(temp_dir.path(), true);

    for example in task_catalog.examples() {
        assert!(example.file("Checker.kt").is_some(), "{} lacks Checker.kt", example.id);
    }
    for example in test_catalog.examples() {
        assert!(example.file("Checker.kt").is_none(), "{} has Checker.kt", example.id);
        assert!(!example.read_only_file_names.contains(&"Checker.kt".to_owned()));
        assert!(example.file("Hidden.kt").is_some());
    }
    assert!(test_catalog.issues().iter().all(|issue| !issue.to_string().contains("Checker.kt")));
}

#[test]
fn test_file_names_unique_per_example() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    for test_version in [false, true] {
        let catalog = load(temp_dir.path(), test_version);
        for example in catalog.examples() {
            let mut seen = HashSet::new();
            for file in example.all_files() {
                assert!(seen.insert(&file.name), "duplicate {} in {}", file.name, example.id);
            }
        }
    }
}

#[test]
fn test_task_mode_has_no_solution_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    let catalog = load(temp_dir.path(), false);
    let sum = catalog.find_example("/Getting%20Started/Sum").unwrap();

    assert!(catalog
        .examples()
        .iter()
        .flat_map(|example| &example.files)
        .all(|file| file.file_type != FileType::Solution));
    assert!(sum.file("Answer.kt").is_none());
    assert_eq!(names(sum), vec!["Task.kt", "Test.kt", "Util.kt", "Shared.kt"]);
}

#[test]
fn test_test_mode_default_files_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    let catalog = load(temp_dir.path(), true);
    let sum = catalog.find_example("/Getting%20Started/Sum").unwrap();

    assert_eq!(
        names(sum),
        vec!["Solution.kt", "Test.kt", "Answer.kt", "Util.kt", "Shared.kt"]
    );
    assert_eq!(sum.files[0].file_type, FileType::Solution);
    assert_eq!(sum.files[1].file_type, FileType::Test);
    assert!(!sum.files[1].modifiable);
    assert!(!sum.read_only_file_names.contains(&"Test.kt".to_owned()));
}

#[test]
fn test_project_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    let catalog = load(temp_dir.path(), false);
    let hello = catalog.find_example("/Getting%20Started/Hello%20World").unwrap();
    let sum = catalog.find_example("/Getting%20Started/Sum").unwrap();

    assert_eq!(hello.args, "--verbose");
    assert_eq!(hello.run_configuration, "java");
    assert_eq!(hello.expected_output.as_deref(), Some("Hello, world!"));
    assert_eq!(
        hello.file("Main.kt").unwrap().content,
        "fun main() {\n    println(\"Hello, world!\")\n}\n"
    );
    assert_eq!(sum.expected_output.as_deref(), Some("3\n"));
    assert_eq!(sum.task_windows.as_ref().unwrap()[0].to_ch, Some(14));
    assert!(sum.help_html.is_none());
}

#[test]
fn test_help_code_block_languages() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    let catalog = load(temp_dir.path(), false);
    let hello = catalog.find_example("/Getting%20Started/Hello%20World").unwrap();
    let help = hello.help_html.as_deref().unwrap();

    assert!(help.contains("<h1>Hello</h1>"));
    assert!(help.contains(r#"<pre><code data-lang="kotlin">fun main() {}"#));
    assert!(help.contains("<pre><code>object Main"));
}

#[test]
fn test_previous_chain_follows_manifest_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    let catalog = load(temp_dir.path(), false);
    let hello = catalog.find_example_id("/Getting%20Started/Hello%20World").unwrap();
    let sum = catalog.find_example_id("/Getting%20Started/Sum").unwrap();
    let loops = catalog.find_example_id("/Getting%20Started/Loops").unwrap();

    assert_eq!(catalog.previous_example(hello), None);
    assert_eq!(catalog.previous_example(sum), Some(hello));
    assert_eq!(catalog.previous_example(loops), Some(sum));
    assert_eq!(catalog.next_example(sum), Some(loops));
    assert_eq!(catalog.next_example(loops), None);
}

#[test]
fn test_broken_example_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    build_tree(temp_dir.path());

    let catalog = load(temp_dir.path(), false);

    assert!(catalog.find_example("/Getting%20Started/Broken").is_none());
    assert_eq!(catalog.issues().len(), 1);
    assert_eq!(catalog.issues()[0].location, "/Getting%20Started/Broken");
    assert_eq!(catalog.issues()[0].error.kind(), "manifest-parse");
}
