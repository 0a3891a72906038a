use serde::Serialize;

/// A keyword rule: fires when every keyword occurs in the lower-cased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestionRule {
    pub keywords: &'static [&'static str],
    pub code: &'static str,
    pub description: &'static str,
}

/// Rules in priority order; the first match wins.
pub const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        keywords: &["slabost", "ztráta řeči"],
        code: "I63",
        description: "CMP",
    },
    SuggestionRule {
        keywords: &["jednostranná slabost"],
        code: "I63",
        description: "CMP",
    },
    SuggestionRule {
        keywords: &["bolest břicha"],
        code: "R10",
        description: "Bolest břicha",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub code: &'static str,
    pub description: &'static str,
}

impl Suggestion {
    /// Text shown next to the "apply suggestion" action.
    pub fn label(&self) -> String {
        format!("Návrh diagnózy: {} – {}", self.code, self.description)
    }
}

/// Suggest a diagnosis from free text (typically the NO section).
pub fn suggest_diagnosis(text: &str) -> Option<Suggestion> {
    let text = text.to_lowercase();
    SUGGESTION_RULES
        .iter()
        .find(|rule| rule.keywords.iter().all(|keyword| text.contains(keyword)))
        .map(|rule| Suggestion {
            code: rule.code,
            description: rule.description,
        })
}
