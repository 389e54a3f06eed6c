use std::fs;
use std::path::PathBuf;

use rxterms_cli::cli::{InspectArgs, LoadArgs, SourceArgs};
use rxterms_cli::commands::{render_document, run_inspect, run_load};
use rxterms_cli::summary::summary_table;
use tempfile::TempDir;

const DATA: &str = "DISPLAY_NAME|IS_RETIRED|SUPPRESS_FOR|STRENGTH|NEW_DOSE_FORM|DISPLAY_NAME_SYNONYM|RXCUI
Drug A||| 5 mg|Tablet||100
Drug A||| 20 mg|Tablet|DA|50
Drug B|20190101||10 mg|Capsule||200
Combo|||mixed|Kit||7
";

fn write_data(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("RxTerms.txt");
    fs::write(&path, contents).expect("write data file");
    path
}

fn source(path: PathBuf) -> SourceArgs {
    SourceArgs {
        data_file: Some(path),
        config: None,
        delimiter: None,
    }
}

/// Reads the count cell of the summary row labelled `metric`.
fn count_for(table: &str, metric: &str) -> String {
    let cells: Vec<&str> = table
        .lines()
        .find(|line| line.contains(metric))
        .map(|line| line.split('│').map(str::trim).collect())
        .unwrap_or_default();
    cells.get(3).map_or_else(String::new, |cell| (*cell).to_string())
}

#[test]
fn load_writes_bulk_body_to_output_file() {
    let dir = TempDir::new().expect("temp dir");
    let data = write_data(&dir, DATA);
    let output = dir.path().join("bulk.ndjson");

    let result = run_load(&LoadArgs {
        source: source(data),
        index: Some("rxterms_test".to_string()),
        output: Some(output.clone()),
        dry_run: false,
    })
    .expect("load");

    assert_eq!(result.documents_written, 2);
    assert_eq!(result.aggregate.retired, 1);
    assert_eq!(result.build.documents, 2);

    let body = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        r#"{"index":{"_index":"rxterms_test","_id":"Combo"}}"#
    );
    assert!(lines[3].contains(r#""STRENGTHS_AND_FORMS":[" 5 mg Tablet","20 mg Tablet"]"#));
    assert!(lines[3].contains(r#""RXCUIS":["100","50"]"#));
    assert!(!body.contains("Drug B"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let data = write_data(&dir, DATA);
    let output = dir.path().join("bulk.ndjson");

    let result = run_load(&LoadArgs {
        source: source(data),
        index: None,
        output: Some(output.clone()),
        dry_run: true,
    })
    .expect("load");

    assert_eq!(result.documents_written, 0);
    assert_eq!(result.index, "rxterms");
    assert!(!output.exists());
    let table = summary_table(&result).to_string();
    assert!(table.contains("Duplicates dropped"));
}

#[test]
fn summary_reports_excluded_rows_and_display_names() {
    let dir = TempDir::new().expect("temp dir");
    let data = write_data(&dir, &format!("{DATA}Drug C|||5 mg|Tablet||301\nDrug D||O|5 mg|Tablet||300\n"));

    let result = run_load(&LoadArgs {
        source: source(data),
        index: None,
        output: None,
        dry_run: true,
    })
    .expect("load");

    assert_eq!(result.aggregate.retired, 1);
    assert_eq!(result.aggregate.suppressed, 1);
    assert_eq!(result.aggregate.excluded(), 2);
    assert_eq!(result.aggregate.display_names, 3);
    let mut table = summary_table(&result);
    table.force_no_tty();
    let rendered = table.to_string();
    assert_eq!(count_for(&rendered, "Excluded"), "2");
    assert_eq!(count_for(&rendered, "Display names"), "3");
}

#[test]
fn inspect_renders_text_lookup_and_table() {
    let dir = TempDir::new().expect("temp dir");
    let data = write_data(&dir, DATA);
    let mut args = InspectArgs {
        display_name: "Drug A".to_string(),
        table: false,
        text: Some("20 mg Tablet".to_string()),
        source: source(data),
    };
    let document = run_inspect(&args)
        .expect("inspect")
        .expect("Drug A document");

    let rxcui = render_document(&document, &args).expect("render");
    assert_eq!(rxcui.as_deref(), Some("50"));

    args.text = Some("20 mg Capsule".to_string());
    assert_eq!(render_document(&document, &args).expect("render"), None);

    args.text = None;
    args.table = true;
    let table = render_document(&document, &args)
        .expect("render")
        .expect("table");
    let row = table
        .lines()
        .find(|line| line.contains(" 5 mg Tablet"))
        .expect("5 mg row");
    assert!(row.contains("100"));
    assert!(table.contains("RXCUI"));

    args.table = false;
    let json = render_document(&document, &args)
        .expect("render")
        .expect("json");
    assert!(json.contains(r#""DISPLAY_NAME": "Drug A""#));
}

#[test]
fn config_file_supplies_data_file_and_delimiter() {
    let dir = TempDir::new().expect("temp dir");
    let data = dir.path().join("RxTerms.tsv");
    fs::write(&data, DATA.replace('|', "\t")).expect("write data file");
    let config = dir.path().join("rxterms.toml");
    fs::write(
        &config,
        format!(
            "[data_file]\nname = {:?}\nfield_delimiter = \"\\t\"\n",
            data.display().to_string()
        ),
    )
    .expect("write config");

    let document = run_inspect(&InspectArgs {
        display_name: "Drug A".to_string(),
        table: false,
        text: None,
        source: SourceArgs {
            data_file: None,
            config: Some(config),
            delimiter: None,
        },
    })
    .expect("inspect")
    .expect("Drug A document");

    assert_eq!(document.strengths_and_forms, vec![" 5 mg Tablet", "20 mg Tablet"]);
    assert!(document.synonyms.contains("DA"));
}

#[test]
fn inspect_unknown_name_returns_none() {
    let dir = TempDir::new().expect("temp dir");
    let data = write_data(&dir, DATA);

    let document = run_inspect(&InspectArgs {
        display_name: "Drug B".to_string(),
        table: false,
        text: None,
        source: source(data),
    })
    .expect("inspect");
    assert!(document.is_none());
}

#[test]
fn format_errors_surface_with_context() {
    let dir = TempDir::new().expect("temp dir");
    let data = write_data(&dir, &format!("{DATA}Drug C|||n/a|Tablet||9\n"));

    let err = run_load(&LoadArgs {
        source: source(data),
        index: None,
        output: None,
        dry_run: true,
    })
    .expect_err("bad strength");
    let message = format!("{err:#}");
    assert!(message.contains("Bad strength data for rxcui 9"));
}
