/// Category name used when no keyword matches.
pub const FALLBACK_CATEGORY: &str = "General";

/// Name of the category created from caller-supplied keywords.
pub const CUSTOM_CATEGORY: &str = "User Custom";

/// Keyword-table content classifier.
///
/// A chunk or document is tagged with every category whose keyword list has
/// at least one case-insensitive substring match. Classification is a
/// diagnostic for the ingestion pipeline, not an input to chunking.
pub struct KeywordClassifier {
    categories: Vec<(String, Vec<String>)>,
}

impl KeywordClassifier {
    /// Classifier with the built-in category table.
    pub fn new() -> Self {
        let builtin: &[(&str, &[&str])] = &[
            (
                "Emotion Management",
                &["emotion", "mood", "anxiety", "depression", "anger", "stress", "sadness", "worry"],
            ),
            (
                "Stress Management",
                &["stress", "tension", "fatigue", "burnout", "pressure", "overwhelm", "exhaustion"],
            ),
            (
                "Sleep Health",
                &["sleep", "insomnia", "rest", "dreams", "nightmares", "circadian", "bedtime"],
            ),
            (
                "Interpersonal Relationships",
                &["friends", "family", "social", "communication", "relationships", "loneliness", "conflict"],
            ),
            (
                "Self-Care",
                &["self-care", "relaxation", "meditation", "mindfulness", "self-esteem", "wellness", "balance"],
            ),
            (
                "Crisis Intervention",
                &["suicide", "self-harm", "crisis", "emergency", "hotline", "safety planning"],
            ),
            (
                "Coping Skills & Strategies",
                &["coping", "problem solving", "time management", "boundary setting", "assertiveness"],
            ),
        ];

        Self {
            categories: builtin
                .iter()
                .map(|(name, keywords)| {
                    (
                        name.to_string(),
                        keywords.iter().map(|k| k.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Classifier with a caller-supplied table instead of the built-in one.
    pub fn with_categories(categories: Vec<(String, Vec<String>)>) -> Self {
        Self { categories }
    }

    /// Add a custom-keyword category on top of the existing table.
    pub fn with_custom_keywords(mut self, keywords: Vec<String>) -> Self {
        if !keywords.is_empty() {
            self.categories.push((CUSTOM_CATEGORY.to_string(), keywords));
        }
        self
    }

    /// Categories whose keywords occur in the text; fallback when none do.
    pub fn classify(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut matched: Vec<String> = Vec::new();

        for (category, keywords) in &self.categories {
            if keywords.iter().any(|k| lower.contains(&k.to_lowercase())) {
                matched.push(category.clone());
            }
        }

        if matched.is_empty() {
            matched.push(FALLBACK_CATEGORY.to_string());
        }
        matched
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}
