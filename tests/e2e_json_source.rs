//! End-to-end tests for loading preprocessed JSON data from disk.

mod common;

use std::fs;
use std::path::Path;

use common::set;
use crosstem::{
    Analyzer, DataConfig, DataSource, EdgeKind, Error, JsonSource, Language, ProductivityPolicy,
    Registry, Term,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, value: serde_json::Value) {
    fs::write(dir.join(name), serde_json::to_vec_pretty(&value).unwrap()).unwrap();
}

fn data_dir() -> TempDir {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let mut derivations = serde_json::Map::new();
    let children: serde_json::Map<String, serde_json::Value> =
        ["organizer", "organization", "reorganize", "disorganize", "organizable"]
            .iter()
            .map(|c| (c.to_string(), json!({"pos": "N", "affix": "", "affix_type": ""})))
            .collect();
    derivations.insert(
        "organize".into(),
        json!({"pos": "V", "derives_to": children, "derived_from": {}}),
    );
    // only the derived_from side is recorded for this edge
    derivations.insert(
        "organizational".into(),
        json!({
            "pos": "ADJ",
            "derived_from": {"organization": {"pos": "N", "affix": "-al", "affix_type": "suffix"}}
        }),
    );
    write(dir.path(), "eng_derivations.json", serde_json::Value::Object(derivations));

    write(
        dir.path(),
        "eng_inflections.json",
        json!({
            "run": {
                "pos": "V",
                "forms": {
                    "runs": [{"pos": "V", "features": "V|PRS;3;SG", "segmentation": "run|s"}],
                    "running": [{"pos": "V", "features": "V|V.PTCP;PRS", "segmentation": "run|ning"}],
                    "ran": [{"pos": "V", "features": "V|PST", "segmentation": "-"}]
                }
            }
        }),
    );

    write(
        dir.path(),
        "etymology.json",
        json!([
            {"term": "portmanteau", "lang": "English", "reltype": "borrowed_from",
             "related_term": "portemanteau", "related_lang": "Middle French", "group_tag": null},
            {"term": "mother", "lang": "English", "reltype": "inherited_from",
             "related_term": "moder", "related_lang": "Middle English"},
            {"term": "mother", "lang": "English", "reltype": "calque_of",
             "related_term": "x", "related_lang": "Y"}
        ]),
    );
    dir
}

#[test]
fn test_json_scenarios() {
    let dir = data_dir();
    let en = Analyzer::open("eng", &JsonSource::open(dir.path())).unwrap();

    assert_eq!(en.find_root("organization"), "organize");
    assert_eq!(en.find_root("organizational"), "organize");
    assert_eq!(en.find_root("neologism123"), "neologism123");
    assert_eq!(en.get_inflections("run"), set(&["run", "runs", "running", "ran"]));

    let organization = en.get_derivations("organizational");
    assert_eq!(organization[0].form, "organization");
    assert_eq!(organization[0].affix.as_ref().unwrap().affix, "-al");
    assert!(en.get_derivations("organizer")[0].affix.is_none());

    let chain = en.trace_ancestry("portmanteau", 5).unwrap();
    assert_eq!(chain[1].term, Term::new("Middle French", "portemanteau"));
    assert_eq!(
        en.trace_origin_chain("mother", 5).unwrap(),
        vec![Term::new("English", "mother"), Term::new("Middle English", "moder")]
    );
}

#[test]
fn test_file_order_breaks_ties() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    // keys deliberately out of alphabetical order
    fs::write(
        dir.path().join("eng_derivations.json"),
        r#"{
            "kid": {"pos": "N", "derived_from": {"zeta": {"pos": "N"}, "alpha": {"pos": "N"}}},
            "zeta": {"pos": "N", "derives_to": {"kid": {"pos": "N"}}},
            "alpha": {"pos": "N", "derives_to": {"kid": {"pos": "N"}}}
        }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("eng_inflections.json"),
        r#"{
            "axis": {"pos": "N", "forms": {"axes": [{"pos": "N", "features": "N;PL"}]}},
            "axe": {"pos": "N", "forms": {"axes": [{"pos": "N", "features": "N;PL"}]}}
        }"#,
    )
    .unwrap();

    let source = JsonSource::open(dir.path());
    let graph = source.load_morphology(Language::English).unwrap();
    let kid = graph.id_of("kid").unwrap();
    let parents: Vec<_> = graph.parents(kid).iter().map(|&id| graph.word(id)).collect();
    assert_eq!(parents, vec!["zeta", "alpha"]);

    let en = Analyzer::open("eng", &source).unwrap().with_policy(ProductivityPolicy::custom(1, 1));
    let search = en.explain_root("kid");
    let candidates: Vec<_> = search.candidates.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(candidates, vec!["zeta", "alpha"]);
    assert_eq!(search.root, "zeta");
    assert_eq!(en.find_root("kid"), "zeta");

    let table = source.load_inflections(Language::English).unwrap();
    assert_eq!(table.lemmas_of("axes"), vec!["axis", "axe"]);
    assert_eq!(en.get_lemma("axes"), "axis");
}

#[test]
fn test_unmodelled_relations_are_skipped() {
    let dir = data_dir();
    let graph = JsonSource::open(dir.path()).load_etymology().unwrap();
    assert_eq!(graph.edges("English", "mother").len(), 1);
    assert_eq!(graph.edges("English", "mother")[0].0, EdgeKind::InheritedFrom);
}

#[test]
fn test_missing_language_file() {
    let dir = data_dir();
    let source = JsonSource::open(dir.path());
    let err = Analyzer::open("deu", &source).unwrap_err();
    assert!(matches!(err, Error::LanguageNotSupported { ref code, .. } if code == "deu"));
}

#[test]
fn test_missing_inflections_file() {
    let dir = data_dir();
    fs::remove_file(dir.path().join("eng_inflections.json")).unwrap();
    let source = JsonSource::open(dir.path());
    assert!(matches!(
        source.load_inflections(Language::English),
        Err(Error::LanguageNotSupported { .. })
    ));
}

#[test]
fn test_corrupt_file_is_a_json_error() {
    let dir = data_dir();
    fs::write(dir.path().join("eng_derivations.json"), b"{ not json").unwrap();
    let source = JsonSource::open(dir.path());
    assert!(matches!(source.load_morphology(Language::English), Err(Error::Json(_))));
}

#[test]
fn test_etymology_can_be_disabled() {
    let dir = data_dir();
    let source = JsonSource::new(DataConfig::new(dir.path()).without_etymology());
    assert!(!source.etymology_available());

    let en = Analyzer::open("eng", &source).unwrap();
    assert!(matches!(
        en.trace_origin_chain("mother", 5),
        Err(Error::EtymologyDataUnavailable(_))
    ));
    assert_eq!(en.find_root("organization"), "organize");
}

#[test]
fn test_registry_over_json() {
    let dir = data_dir();
    let registry = Registry::new(JsonSource::open(dir.path()));
    let en = registry.analyzer("eng").unwrap();
    assert_eq!(en.get_borrowed_words("Middle French").unwrap(), set(&["portmanteau"]));
}
