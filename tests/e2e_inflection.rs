//! End-to-end tests for the inflection table and combined analysis.

mod common;

use common::{english, set};
use crosstem::{PartOfSpeech, RelationshipKind};
use pretty_assertions::assert_eq;

#[test]
fn test_inflections_of_run() {
    let en = english();
    let expected = set(&["run", "runs", "running", "ran"]);
    assert_eq!(en.get_inflections("run"), expected);
    assert_eq!(en.get_inflections("ran"), expected);
}

#[test]
fn test_unknown_word_has_no_inflections() {
    let en = english();
    assert!(en.get_inflections("neologism123").is_empty());
    assert_eq!(en.get_lemma("neologism123"), "neologism123");
    assert_eq!(en.get_pos("neologism123"), None);
}

#[test]
fn test_lemma_and_pos() {
    let en = english();
    assert_eq!(en.get_lemma("running"), "run");
    assert_eq!(en.get_lemma("organizations"), "organization");
    assert_eq!(en.get_pos("organizations"), Some(PartOfSpeech::Noun));
    assert!(en.are_inflections("organizes", "organized"));
    assert!(!en.are_inflections("organizes", "runs"));
}

#[test]
fn test_full_stem() {
    let en = english();
    assert_eq!(en.full_stem("organizations"), "organize");
    assert_eq!(en.full_stem("organized"), "organize");
    assert_eq!(en.full_stem("ran"), "run");
}

#[test]
fn test_are_related() {
    let en = english();

    let r = en.are_related("organize", "organizational");
    assert!(r.related);
    assert_eq!(r.relationship, Some(RelationshipKind::Derivational));
    assert_eq!(r.common_root.as_deref(), Some("organize"));

    let r = en.are_related("run", "ran");
    assert_eq!(r.relationship, Some(RelationshipKind::Inflectional));
    assert_eq!(r.common_root.as_deref(), Some("run"));

    let r = en.are_related("organize", "nation");
    assert!(!r.related);
    assert_eq!(r.relationship, None);
}

#[test]
fn test_analyze_reports_everything() {
    let en = english();
    let analysis = en.analyze("organizations", 2);
    assert_eq!(analysis.word, "organizations");
    assert_eq!(analysis.derivational_stem, "organizations");
    assert_eq!(analysis.full_stem, "organize");
    assert_eq!(analysis.inflectional_lemma.as_deref(), Some("organization"));
    assert_eq!(analysis.inflections, set(&["organization", "organizations"]));
    assert_eq!(analysis.word_family, set(&["organizations"]));
    assert!(analysis.etymology.is_none());

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["language"], "eng");
    assert_eq!(json["grammatical_features"][0]["features"], "N|PL");
}
