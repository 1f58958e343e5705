//! Rule-based English lemmatizer.
//!
//! Reduces lowercased words to a dictionary form without part-of-speech
//! information. Two tiers are applied in order:
//!
//! 1. An irregular-form table (`went` → `go`, `children` → `child`).
//! 2. Conservative noun-plural suffix rules (`stories` → `story`,
//!    `boxes` → `box`, `times` → `time`).
//!
//! Verb suffixes (`-ing`, `-ed`) are left alone: without a tagger they
//! mangle too many nouns (`thing`, `morning`, `bed`).

use rustc_hash::{FxHashMap, FxHashSet};

/// Irregular inflections and their lemmas.
const IRREGULAR: &[(&str, &str)] = &[
    // be / have / do
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    // common irregular verbs
    ("ate", "eat"),
    ("eaten", "eat"),
    ("began", "begin"),
    ("begun", "begin"),
    ("became", "become"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("came", "come"),
    ("caught", "catch"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("felt", "feel"),
    ("found", "find"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("gave", "give"),
    ("given", "give"),
    ("went", "go"),
    ("gone", "go"),
    ("got", "get"),
    ("gotten", "get"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("heard", "hear"),
    ("held", "hold"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("left", "leave"),
    ("lost", "lose"),
    ("made", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("ran", "run"),
    ("said", "say"),
    ("saw", "see"),
    ("seen", "see"),
    ("sent", "send"),
    ("sold", "sell"),
    ("sat", "sit"),
    ("slept", "sleep"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("spent", "spend"),
    ("stood", "stand"),
    ("stole", "steal"),
    ("stolen", "steal"),
    ("taught", "teach"),
    ("thought", "think"),
    ("told", "tell"),
    ("took", "take"),
    ("taken", "take"),
    ("understood", "understand"),
    ("won", "win"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("wrote", "write"),
    ("written", "write"),
    // irregular plurals
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("heroes", "hero"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
];

/// Words that end like plurals but are already lemmas.
const INVARIANT: &[&str] = &[
    "always",
    "analysis",
    "basis",
    "bias",
    "bus",
    "canvas",
    "chaos",
    "crisis",
    "economics",
    "gas",
    "lens",
    "mathematics",
    "means",
    "news",
    "perhaps",
    "physics",
    "politics",
    "series",
    "species",
    "thus",
    "whereas",
    "yes",
];

/// Maps inflected English words to their lemmas.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular: FxHashMap<&'static str, &'static str>,
    invariant: FxHashSet<&'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Lemmatizer {
    pub fn english() -> Self {
        Self {
            irregular: IRREGULAR.iter().copied().collect(),
            invariant: INVARIANT.iter().copied().collect(),
        }
    }

    /// Lemmatize a lowercased word.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.irregular.get(word) {
            return (*lemma).to_string();
        }
        if self.invariant.contains(word) {
            return word.to_string();
        }
        strip_plural(word).to_string()
    }
}

fn strip_plural(word: &str) -> std::borrow::Cow<'_, str> {
    use std::borrow::Cow;

    let len = word.chars().count();
    if len <= 3 || !word.ends_with('s') {
        return Cow::Borrowed(word);
    }
    if len > 4 && word.ends_with("ies") {
        let stem = &word[..word.len() - 3];
        return Cow::Owned(format!("{}y", stem));
    }
    for suffix in ["sses", "shes", "ches", "xes", "zzes"] {
        if word.ends_with(suffix) {
            return Cow::Borrowed(&word[..word.len() - 2]);
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return Cow::Borrowed(word);
    }
    Cow::Borrowed(&word[..word.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lem = Lemmatizer::english();
        assert_eq!(lem.lemmatize("times"), "time");
        assert_eq!(lem.lemmatize("adventures"), "adventure");
        assert_eq!(lem.lemmatize("stories"), "story");
        assert_eq!(lem.lemmatize("boxes"), "box");
        assert_eq!(lem.lemmatize("churches"), "church");
        assert_eq!(lem.lemmatize("classes"), "class");
    }

    #[test]
    fn test_irregular_forms() {
        let lem = Lemmatizer::english();
        assert_eq!(lem.lemmatize("went"), "go");
        assert_eq!(lem.lemmatize("children"), "child");
        assert_eq!(lem.lemmatize("people"), "person");
        assert_eq!(lem.lemmatize("was"), "be");
    }

    #[test]
    fn test_words_left_alone() {
        let lem = Lemmatizer::english();
        assert_eq!(lem.lemmatize("morty"), "morty");
        assert_eq!(lem.lemmatize("boss"), "boss");
        assert_eq!(lem.lemmatize("status"), "status");
        assert_eq!(lem.lemmatize("news"), "news");
        assert_eq!(lem.lemmatize("gas"), "gas");
        assert_eq!(lem.lemmatize("thing"), "thing");
        assert_eq!(lem.lemmatize("its"), "its");
    }
}
