use rxterms_transform::{TransformError, transform_lines};

const HEADER: &str =
    "DISPLAY_NAME|IS_RETIRED|SUPPRESS_FOR|STRENGTH|NEW_DOSE_FORM|DISPLAY_NAME_SYNONYM|RXCUI";

fn lines(rows: &[&str]) -> Vec<String> {
    std::iter::once(HEADER)
        .chain(rows.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn pads_strengths_to_group_width() {
    let input = lines(&["Drug A||| 5 mg|Tablet||100", "Drug A||| 20 mg|Tablet||50"]);
    let transformed = transform_lines(&input, "|").expect("transform");

    assert_eq!(transformed.documents.len(), 1);
    let document = &transformed.documents[0];
    assert_eq!(document.display_name, "Drug A");
    assert_eq!(
        document.strengths_and_forms,
        vec![" 5 mg Tablet", "20 mg Tablet"]
    );
    assert_eq!(document.rxcuis, vec!["100", "50"]);
    assert!(document.synonyms.is_empty());
}

#[test]
fn lexicographic_order_matches_numeric_order() {
    let input = lines(&[
        "Drug C|||100 mg|Tablet||3",
        "Drug C|||5 mg|Tablet||1",
        "Drug C|||20 mg|Tablet||2",
        "Drug C|||1,000 mg|Tablet||4",
    ]);
    let transformed = transform_lines(&input, "|").expect("transform");
    let document = transformed.document("Drug C").expect("Drug C document");

    assert_eq!(
        document.strengths_and_forms,
        vec![
            "    5 mg Tablet",
            "   20 mg Tablet",
            "  100 mg Tablet",
            "1,000 mg Tablet"
        ]
    );
    assert_eq!(document.rxcuis, vec!["1", "2", "3", "4"]);
}

#[test]
fn retired_only_display_name_has_no_document() {
    let input = lines(&[
        "Drug A|||5 mg|Tablet||100",
        "Drug B|20190101||10 mg|Capsule||200",
    ]);
    let transformed = transform_lines(&input, "|").expect("transform");

    assert!(transformed.document("Drug B").is_none());
    assert_eq!(transformed.documents.len(), 1);
    assert!(
        transformed
            .documents
            .iter()
            .all(|document| !document.rxcuis.contains(&"200".to_string()))
    );
}

#[test]
fn mixed_group_is_unpadded_regardless_of_order() {
    let mixed_last = lines(&[
        "Combo||| 5 mg|Tablet||1",
        "Combo|||250 mg|Tablet||2",
        "Combo|||mixed|Kit||3",
    ]);
    let mixed_first = lines(&[
        "Combo|||mixed|Kit||3",
        "Combo||| 5 mg|Tablet||1",
        "Combo|||250 mg|Tablet||2",
    ]);
    for input in [mixed_last, mixed_first] {
        let transformed = transform_lines(&input, "|").expect("transform");
        let document = transformed.document("Combo").expect("Combo document");
        assert_eq!(
            document.strengths_and_forms,
            vec![" 5 mg Tablet", "250 mg Tablet", "mixed Kit"]
        );
        assert_eq!(document.rxcuis, vec!["1", "2", "3"]);
    }
}

#[test]
fn duplicate_texts_keep_lowest_rxcui() {
    let input = lines(&[
        "Drug D|||10 mg|Tablet||900",
        "Drug D||| 10 mg|Tablet||85",
        "Drug D|||10 mg|Tablet||1000",
        "Drug D|||5 mg|Tablet||7",
    ]);
    let transformed = transform_lines(&input, "|").expect("transform");
    let document = transformed.document("Drug D").expect("Drug D document");

    assert_eq!(document.strengths_and_forms, vec![" 5 mg Tablet", "10 mg Tablet"]);
    assert_eq!(document.rxcuis, vec!["7", "85"]);
    assert_eq!(transformed.build.duplicates, 2);
    assert_eq!(transformed.build.texts, 2);
}

#[test]
fn synonyms_are_collected_without_blanks() {
    let input = lines(&[
        "Drug E|||5 mg|Tablet|E-Brand|1",
        "Drug E|||10 mg|Tablet||2",
        "Drug E|||20 mg|Tablet|E-Brand|3",
        "Drug E|||40 mg|Tablet|Other|4",
    ]);
    let transformed = transform_lines(&input, "|").expect("transform");
    let document = transformed.document("Drug E").expect("Drug E document");

    let synonyms: Vec<&str> = document.synonyms.iter().map(String::as_str).collect();
    assert_eq!(synonyms, vec!["E-Brand", "Other"]);
}

#[test]
fn documents_are_ordered_by_display_name() {
    let input = lines(&[
        "Zeta|||1 mg|Tab||1",
        "Alpha|||1 mg|Tab||2",
        "Mu|||1 mg|Tab||3",
    ]);
    let transformed = transform_lines(&input, "|").expect("transform");
    let names: Vec<&str> = transformed
        .documents
        .iter()
        .map(|document| document.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["Alpha", "Mu", "Zeta"]);
    assert_eq!(transformed.build.documents, 3);
    assert_eq!(transformed.aggregate.active, 3);
}

#[test]
fn format_errors_abort_without_documents() {
    let input = lines(&["Drug A|||5 mg|Tablet||100", "Drug A|||oops|Tablet||101"]);
    let err = transform_lines(&input, "|").expect_err("bad strength");
    assert!(matches!(err, TransformError::Ingest(ref inner) if inner.is_format_error()));
}
