use ranker::{load_corpus, render_json, render_text, run_report};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;
use vsm_core::VectorSpaceModel;

fn write_docs(dir: &std::path::Path) {
    fs::write(dir.join("300.product"), "mat and rug\nare textiles").unwrap();
    fs::write(dir.join("100.product"), "the cat sat\non the mat").unwrap();
    fs::write(dir.join("200.product"), "dogs and cats are pets").unwrap();
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(dir.join("nested/999.product"), "cat cat cat").unwrap();
}

#[test]
fn corpus_is_sorted_by_file_name() {
    let dir = tempdir().unwrap();
    write_docs(dir.path());
    let corpus = load_corpus(dir.path()).unwrap();
    assert_eq!(corpus.ids, vec!["100", "200", "300"]);
    assert_eq!(corpus.texts[0], "the cat sat on the mat");
    assert_eq!(corpus.position("300"), Some(2));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_corpus(dir.path().join("absent")).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn report_uses_external_ids() {
    let dir = tempdir().unwrap();
    write_docs(dir.path());
    let corpus = load_corpus(dir.path()).unwrap();
    let model = VectorSpaceModel::build(&corpus.texts);
    let report = run_report(&model, &corpus, "cat", Some("300")).unwrap();
    assert_eq!(report.sections.len(), 6);
    assert_eq!(report.sections[0].results[0].doc_id, "100");
    assert_eq!(report.sections[5].results[0].doc_id, "300");

    let text = render_text(&report);
    assert!(text.starts_with("the query is: cat\n"));
    assert!(text.contains("\nTerm Frequency (TF) Weighting + Euclidean Distance\n\nDocID  Score\n100 "));

    let json: Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
    assert_eq!(json["query"], "cat");
    assert_eq!(json["sections"][2]["strategy"], "TF-IDF Weighting + Cosine Similarity");
    assert_eq!(json["sections"][2]["weighting"], "TfIdf");
    assert_eq!(json["sections"][1]["weighting"], "TermFrequency");
    assert_eq!(json["sections"][1]["similarity"], "Euclidean");
}

#[test]
fn unknown_related_id_is_rejected() {
    let dir = tempdir().unwrap();
    write_docs(dir.path());
    let corpus = load_corpus(dir.path()).unwrap();
    let model = VectorSpaceModel::build(&corpus.texts);
    assert!(run_report(&model, &corpus, "cat", Some("42")).is_err());
}

#[test]
fn files_without_unique_ids_are_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("1.a"), "first cat").unwrap();
    fs::write(dir.path().join("1.b"), "second cat").unwrap();
    fs::write(dir.path().join(".hidden"), "hidden cat").unwrap();
    fs::write(dir.path().join("2.product"), "dog").unwrap();
    let corpus = load_corpus(dir.path()).unwrap();
    assert_eq!(corpus.ids, vec!["1", "2"]);
    assert_eq!(corpus.texts[0], "first cat");
}

#[test]
fn text_report_lists_every_section() {
    let dir = tempdir().unwrap();
    write_docs(dir.path());
    let corpus = load_corpus(dir.path()).unwrap();
    let model = VectorSpaceModel::build(&corpus.texts);
    let report = run_report(&model, &corpus, "rug", None).unwrap();
    let text = render_text(&report);
    assert_eq!(text.matches("DocID  Score\n").count(), 5);
    assert!(text.contains("\nTF-IDF Weighting + Cosine Similarity\n\nDocID  Score\n300 "));
    assert!(text.ends_with('\n'));
}
