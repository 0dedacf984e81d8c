//! Test Fixtures
//!
//! Small dictionaries, catalogs and services shared by the property tests.

use std::sync::Arc;

use crate::core::grammar::{
    Analyzer, CatalogHandle, DeclensionGroup, DictionaryHit, FormRule, GroupKind,
    InMemoryDictionary, RuleCatalog,
};
use crate::core::lexicon::{AggregationMerger, InMemoryLexicalStore};

// =============================================================================
// Dictionary Fixtures
// =============================================================================

/// A handful of headwords covering nouns, verbs and the article.
pub fn sample_dictionary() -> InMemoryDictionary {
    InMemoryDictionary::new(vec![
        DictionaryHit::new("ὁ", "the"),
        DictionaryHit::new("πόλεμος, -ου, ὁ", "war"),
        DictionaryHit::new("λόγος, -ου, ὁ", "word"),
        DictionaryHit::new("ψυχή, -ῆς, ἡ", "soul"),
        DictionaryHit::new("δῶρον, -ου, τό", "gift"),
        DictionaryHit::new("ἀγαπάω", "to love"),
        DictionaryHit::new("λύω", "to loosen"),
        DictionaryHit::new("ναί", "yes"),
    ])
}

// =============================================================================
// Catalog Fixtures
// =============================================================================

pub fn second_declension() -> DeclensionGroup {
    DeclensionGroup::new("secondDeclension", GroupKind::Second)
        .with_form(FormRule::new("noun - sing - masc - nom", "-ος", &["ος"]))
        .with_form(FormRule::new("noun - sing - masc - gen", "-ου", &["ος", "ον"]))
        .with_form(FormRule::new("noun - plural - masc - nom", "-οι", &["ος"]))
        .with_form(FormRule::new("noun - sing - neut - nom", "-ον", &["ον"]))
}

pub fn present_active() -> DeclensionGroup {
    DeclensionGroup::new("presentActive", GroupKind::Misc)
        .with_form(FormRule::new("1st sing - pres - ind - act", "-ω", &["ω"]))
        .with_form(FormRule::new("3th sing - pres - ind - act", "-ει", &["ω"]))
        .with_form(FormRule::new("3th plural - pres - ind - act", "-ουσι", &["ω"]))
}

pub fn article() -> DeclensionGroup {
    DeclensionGroup::new("article", GroupKind::Article)
        .with_form(FormRule::new("article - sing - masc - nom", "ὁ", &["ὁ"]))
        .with_form(FormRule::new("article - sing - fem - nom", "ἡ", &["ἡ"]))
        .with_form(FormRule::new("article - sing - neut - nom", "τό", &["τό"]))
}

pub fn sample_catalog() -> RuleCatalog {
    RuleCatalog::new(vec![article(), second_declension(), present_active()])
}

// =============================================================================
// Service Fixtures
// =============================================================================

pub fn sample_analyzer() -> Analyzer {
    Analyzer::new(
        CatalogHandle::new(sample_catalog()),
        Arc::new(sample_dictionary()),
    )
}

/// A merger and the store it writes to.
pub fn sample_merger() -> (AggregationMerger, InMemoryLexicalStore) {
    let store = InMemoryLexicalStore::new();
    (AggregationMerger::new(Arc::new(store.clone())), store)
}
