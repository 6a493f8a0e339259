//! Keyword lexicon and raw answer scoring.
//!
//! The lexicon is a fixed table of lowercase keywords with signed weights.
//! Matching is substring containment, not tokenized: a keyword counts when
//! it occurs anywhere in the lowercased answer, including inside a longer
//! word. This must stay as-is so scores reproduce against recorded
//! sessions.

/// Keyword → weight table. Static, loaded once, never mutated.
pub const LEXICON: &[(&str, i32)] = &[
    // General technical vocabulary
    ("algorithm", 2),
    ("optimization", 2),
    ("efficiency", 2),
    ("performance", 2),
    ("architecture", 2),
    ("design pattern", 2),
    ("best practice", 2),
    ("scalability", 2),
    ("testing", 1),
    ("debug", 1),
    ("troubleshoot", 1),
    ("maintenance", 1),
    ("documentation", 1),
    ("code review", 1),
    ("version control", 1),
    ("git", 1),
    ("database", 1),
    ("api", 1),
    ("framework", 1),
    ("library", 1),
    // Java
    ("oop", 2),
    ("inheritance", 2),
    ("polymorphism", 2),
    ("encapsulation", 2),
    ("interface", 2),
    ("abstract", 2),
    ("static", 1),
    ("final", 1),
    ("exception", 1),
    ("thread", 2),
    ("concurrency", 2),
    ("synchronization", 2),
    ("garbage collection", 2),
    ("jvm", 2),
    ("bytecode", 1),
    ("spring", 1),
    // AI / ML
    ("machine learning", 2),
    ("neural network", 2),
    ("deep learning", 2),
    ("supervised", 1),
    ("unsupervised", 1),
    ("regression", 1),
    ("classification", 1),
    ("overfitting", 2),
    ("cross-validation", 2),
    ("feature engineering", 2),
    ("bias-variance", 2),
    ("gradient descent", 2),
    ("tensorflow", 1),
    ("pytorch", 1),
    ("scikit-learn", 1),
    ("pandas", 1),
    // Frontend
    ("html", 1),
    ("css", 1),
    ("javascript", 1),
    ("react", 2),
    ("vue", 1),
    ("angular", 1),
    ("dom", 1),
    ("responsive", 1),
    ("accessibility", 1),
    ("seo", 1),
    ("browser", 1),
    ("cross-browser", 1),
    // Data science
    ("statistics", 1),
    ("probability", 1),
    ("hypothesis", 1),
    ("p-value", 1),
    ("correlation", 1),
    ("causation", 1),
    ("outlier", 1),
    ("missing data", 1),
    ("data cleaning", 1),
    ("exploratory", 1),
    ("visualization", 1),
    ("dashboard", 1),
    ("a/b testing", 2),
    ("experiment", 1),
    ("sample", 1),
    ("population", 1),
    // Hedging language reduces the score
    ("dont know", -2),
    ("not sure", -1),
    ("maybe", -1),
    ("probably", -1),
    ("i think", -1),
    ("i guess", -1),
    ("kind of", -1),
    ("sort of", -1),
];

/// Raw keyword signal for an answer: the sum of weights of every lexicon
/// entry whose keyword occurs in the lowercased text. Empty input yields 0.
pub fn raw_score(answer: &str) -> i32 {
    let lowered = answer.to_lowercase();
    LEXICON
        .iter()
        .filter(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, weight)| weight)
        .sum()
}
