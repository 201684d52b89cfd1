use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use pipecheck::dag::{instance_predecessors, validate};
use pipecheck::pipeline::{load_from_path, load_graph, ParameterDefault};

type TestResult = Result<(), Box<dyn Error>>;

fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Sweep every fixture: `good_*` files must validate, `bad_*` files must not.
#[test]
fn fixture_sweep_matches_file_names() -> TestResult {
    let mut seen = 0;

    for entry in fs::read_dir(testdata_dir())? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let graph = load_graph(&path)?;
        let verdict = validate(&graph);
        seen += 1;

        if file_name.starts_with("good_") {
            assert!(verdict.is_valid(), "{file_name}: expected valid, got {verdict:?}");
        } else if file_name.starts_with("bad_") {
            assert!(!verdict.is_valid(), "{file_name}: expected invalid, got valid");
        } else {
            panic!("fixture {file_name} is neither good_* nor bad_*");
        }
    }

    assert!(seen >= 6, "expected at least 6 fixtures, found {seen}");
    Ok(())
}

#[test]
fn fan_in_fixture_derives_full_predecessor_set() -> TestResult {
    let graph = load_graph(testdata_dir().join("good_fanin.json"))?;

    let merge = graph.get(3).ok_or("missing merge node")?;
    assert_eq!(merge.previous_index, Some(1));
    assert_eq!(merge.predecessors, BTreeSet::from([1, 2]));
    assert_eq!(merge.title.as_deref(), Some("merge branches"));

    // Ignored parameters on other nodes must not grow predecessor sets.
    let root = graph.get(0).ok_or("missing root")?;
    assert!(root.is_root());
    assert!(root.predecessors.is_empty());

    Ok(())
}

#[test]
fn instance_predecessors_only_reads_the_sentinel_parameter() -> TestResult {
    let params = vec![
        ParameterDefault {
            name: "format".into(),
            default: serde_json::json!("pdf"),
        },
        ParameterDefault {
            name: "plugininstances".into(),
            default: serde_json::json!("3, 1,2"),
        },
    ];

    let extras = instance_predecessors(&params)?.ok_or("expected extras")?;
    assert_eq!(extras, BTreeSet::from([1, 2, 3]));

    let unrelated = vec![ParameterDefault {
        name: "format".into(),
        default: serde_json::json!("pdf"),
    }];
    assert!(instance_predecessors(&unrelated)?.is_none());

    Ok(())
}

#[test]
fn non_integer_instance_list_is_a_structural_error() -> TestResult {
    let params = vec![ParameterDefault {
        name: "plugininstances".into(),
        default: serde_json::json!("1,two"),
    }];
    assert!(instance_predecessors(&params).is_err());

    // A non-string sentinel value is rejected too.
    let params = vec![ParameterDefault {
        name: "plugininstances".into(),
        default: serde_json::json!(7),
    }];
    assert!(instance_predecessors(&params).is_err());

    Ok(())
}

#[test]
fn malformed_json_surfaces_as_loader_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.json");

    let mut f = fs::File::create(&path)?;
    writeln!(f, "{{ \"plugin_tree\": [")?;
    drop(f);

    assert!(load_from_path(&path).is_err());
    assert!(load_graph(&path).is_err());
    Ok(())
}

#[test]
fn missing_file_surfaces_as_loader_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    assert!(load_from_path(dir.path().join("nope.json")).is_err());
    Ok(())
}

#[test]
fn loader_round_trips_a_written_pipeline() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("pipeline.json");

    fs::write(
        &path,
        r#"{
            "plugin_tree": [
                { "previous_index": null },
                { "previous_index": 0 },
                { "previous_index": 0 }
            ]
        }"#,
    )?;

    let graph = load_graph(&path)?;
    assert_eq!(graph.len(), 3);
    assert!(validate(&graph).is_valid());
    Ok(())
}
