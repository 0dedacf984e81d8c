//! Rule-string tag classifier.
//!
//! Rule names are free text such as `"3th plural - pres - ind - act"` or
//! `"pres act part - sing - masc - nom"`. Each token is classified against a
//! closed keyword set; the first keyword of each kind fills its slot.

use super::types::{CategoryTags, PartOfSpeech};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    Active,
    Middle,
    Passive,
}

impl Voice {
    pub fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Middle => "middle",
            Self::Passive => "passive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Indicative,
    Subjunctive,
    Optative,
    Imperative,
    Infinitive,
    Participle,
}

impl Mood {
    pub fn name(self) -> &'static str {
        match self {
            Self::Indicative => "indicative",
            Self::Subjunctive => "subjunctive",
            Self::Optative => "optative",
            Self::Imperative => "imperative",
            Self::Infinitive => "infinitive",
            Self::Participle => "participle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Present,
    Imperfect,
    Aorist,
    Future,
    Perfect,
    Pluperfect,
    FuturePerfect,
}

impl Tense {
    pub fn name(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Imperfect => "imperfect",
            Self::Aorist => "aorist",
            Self::Future => "future",
            Self::Perfect => "perfect",
            Self::Pluperfect => "pluperfect",
            Self::FuturePerfect => "future perfect",
        }
    }
}

/// A recognized rule-string keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleToken {
    Voice(Voice),
    Mood(Mood),
    Tense(Tense),
}

impl RuleToken {
    /// Classify one token; `None` for anything outside the keyword set.
    pub fn classify(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        let classified = match token.as_str() {
            "act" => Self::Voice(Voice::Active),
            "mid" => Self::Voice(Voice::Middle),
            "pass" => Self::Voice(Voice::Passive),
            "ind" => Self::Mood(Mood::Indicative),
            "subj" => Self::Mood(Mood::Subjunctive),
            "opt" => Self::Mood(Mood::Optative),
            "imp" => Self::Mood(Mood::Imperative),
            "inf" => Self::Mood(Mood::Infinitive),
            "part" => Self::Mood(Mood::Participle),
            "pres" => Self::Tense(Tense::Present),
            "impf" => Self::Tense(Tense::Imperfect),
            "aor" => Self::Tense(Tense::Aorist),
            "fut" => Self::Tense(Tense::Future),
            "perf" => Self::Tense(Tense::Perfect),
            "plup" => Self::Tense(Tense::Pluperfect),
            "futperf" => Self::Tense(Tense::FuturePerfect),
            _ => return None,
        };
        Some(classified)
    }
}

/// Tense/mood/voice tags of `rule` for a word of class `part_of_speech`.
///
/// Non-verbal words always get the empty triple.
pub fn parse_rule_tags(rule: &str, part_of_speech: PartOfSpeech) -> CategoryTags {
    let mut tags = CategoryTags::default();
    if !part_of_speech.is_verbal() {
        return tags;
    }

    let tokens = rule
        .split(|c: char| c.is_whitespace() || c == '-' || c == ',')
        .filter_map(RuleToken::classify);
    for token in tokens {
        match token {
            RuleToken::Voice(voice) => {
                tags.aspect.get_or_insert_with(|| voice.name().to_string());
            }
            RuleToken::Mood(mood) => {
                tags.mood.get_or_insert_with(|| mood.name().to_string());
            }
            RuleToken::Tense(tense) => {
                tags.tense.get_or_insert_with(|| tense.name().to_string());
            }
        }
    }
    tags
}
