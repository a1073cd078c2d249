//! Shared English fixture for the integration tests.
//!
//! Thresholds are the calibrated English ones (Verb >= 5, Other >= 9):
//! - `organize` (V) has six derived forms and passes.
//! - `organization` (N) has one and does not.
//! - `nation` (N) has nine and passes as a noun.
//! - `loopa` / `loopb` derive from each other.

#![allow(dead_code)]

use std::collections::BTreeSet;

use crosstem::{
    Analyzer, DerivationRecord, EdgeKind, EtymologyRecord, InflectionRecord, Language,
    MemorySource, PartOfSpeech::*,
};

pub fn derivations() -> Vec<DerivationRecord> {
    let mut records = vec![
        DerivationRecord::new("organize", Verb, "organization", Noun).with_affix("-ation", "suffix"),
        DerivationRecord::new("organize", Verb, "organizer", Noun).with_affix("-er", "suffix"),
        DerivationRecord::new("organize", Verb, "reorganize", Verb).with_affix("re-", "prefix"),
        DerivationRecord::new("organize", Verb, "disorganize", Verb).with_affix("dis-", "prefix"),
        DerivationRecord::new("organize", Verb, "organizable", Adjective).with_affix("-able", "suffix"),
        DerivationRecord::new("organize", Verb, "preorganize", Verb).with_affix("pre-", "prefix"),
        DerivationRecord::new("organization", Noun, "organizational", Adjective)
            .with_affix("-al", "suffix"),
        DerivationRecord::new("organizational", Adjective, "organizationally", Other)
            .with_affix("-ly", "suffix"),
        DerivationRecord::new("reorganize", Verb, "reorganization", Noun),
        DerivationRecord::new("loopa", Noun, "loopb", Noun),
        DerivationRecord::new("loopb", Noun, "loopa", Noun),
    ];
    for child in [
        "national", "nationhood", "nationwide", "nationless", "nationalism",
        "nationalist", "nationality", "nationalize", "nationlike",
    ] {
        records.push(DerivationRecord::new("nation", Noun, child, Adjective));
    }
    records
}

pub fn inflections() -> Vec<InflectionRecord> {
    vec![
        InflectionRecord::new("run", "runs", Verb, "V|PRS;3;SG"),
        InflectionRecord::new("run", "running", Verb, "V|V.PTCP;PRS"),
        InflectionRecord::new("run", "ran", Verb, "V|PST"),
        InflectionRecord::new("organization", "organizations", Noun, "N|PL"),
        InflectionRecord::new("organize", "organizes", Verb, "V|PRS;3;SG"),
        InflectionRecord::new("organize", "organized", Verb, "V|PST"),
    ]
}

pub fn etymology() -> Vec<EtymologyRecord> {
    use EdgeKind::*;
    vec![
        EtymologyRecord::new("English", "portmanteau", BorrowedFrom, "Middle French", "portemanteau"),
        EtymologyRecord::new("Middle French", "portemanteau", HasRoot, "Old French", "porter"),
        EtymologyRecord::new("English", "chef", BorrowedFrom, "French", "chef"),
        EtymologyRecord::new("English", "ballet", BorrowedFrom, "French", "ballet"),
        EtymologyRecord::new("English", "mother", InheritedFrom, "Middle English", "moder"),
        EtymologyRecord::new("Middle English", "moder", InheritedFrom, "Old English", "mōdor"),
        EtymologyRecord::new("Old English", "mōdor", InheritedFrom, "Proto-West Germanic", "*mōdē"),
        EtymologyRecord::new("Proto-West Germanic", "*mōdē", InheritedFrom, "Proto-Germanic", "*mōdēr"),
        EtymologyRecord::new("Proto-Germanic", "*mōdēr", InheritedFrom, "Proto-Indo-European", "*méh₂tēr"),
        EtymologyRecord::new("English", "mother", CognateOf, "German", "Mutter"),
        EtymologyRecord::new("French", "chef", InheritedFrom, "Old French", "chief"),
    ]
}

pub fn english_source() -> MemorySource {
    MemorySource::new()
        .with_derivations(Language::English, derivations())
        .with_inflections(Language::English, inflections())
}

pub fn english_source_with_etymology() -> MemorySource {
    english_source().with_etymology(etymology())
}

pub fn english() -> Analyzer {
    init_tracing();
    Analyzer::open("eng", &english_source()).unwrap()
}

pub fn english_with_etymology() -> Analyzer {
    init_tracing();
    Analyzer::open("eng", &english_source_with_etymology()).unwrap()
}

pub fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Honors `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
