//! Feedback document assembly.
//!
//! Composition is split from scoring: the caller computes a score with
//! `prepdrill-core` and hands it here together with an `Rng`. The style
//! and headline draws are the only randomness; the five content sections
//! are deterministic in (score, style).

use rand::seq::SliceRandom;
use rand::Rng;

use prepdrill_core::lexicon::raw_score;
use prepdrill_core::model::Difficulty;
use prepdrill_core::score::normalize;

use crate::style::{headlines, Bucket, Style};
use crate::templates;

/// Fallback follow-up for roles without a template list.
const GENERIC_FOLLOW_UP: &str = "Can you elaborate on that point?";

fn follow_up_pool(role: &str) -> Option<&'static [&'static str]> {
    match role {
        "Java Developer" => Some(&[
            "Can you elaborate on how you would implement this in a production environment?",
            "What are the performance implications of this approach?",
            "How would you handle edge cases in this scenario?",
            "Can you explain the trade-offs between different approaches?",
            "What testing strategies would you use for this implementation?",
        ]),
        "AI Engineer" => Some(&[
            "How would you handle data quality issues in this scenario?",
            "What metrics would you use to evaluate this model's performance?",
            "How would you scale this solution for larger datasets?",
            "What are the potential biases in this approach?",
            "How would you deploy this model in production?",
        ]),
        "Frontend Developer" => Some(&[
            "How would you optimize this for mobile devices?",
            "What accessibility considerations should be taken into account?",
            "How would you handle browser compatibility issues?",
            "What performance optimizations would you implement?",
            "How would you structure this for maintainability?",
        ]),
        "Data Scientist" => Some(&[
            "How would you validate these findings?",
            "What additional data sources would you consider?",
            "How would you communicate these results to stakeholders?",
            "What are the limitations of this analysis?",
            "How would you handle missing or inconsistent data?",
        ]),
        _ => None,
    }
}

/// Draw a role-specific follow-up question, falling back to a generic one
/// for unrecognized roles.
pub fn follow_up_question<R: Rng + ?Sized>(rng: &mut R, role: &str) -> &'static str {
    match follow_up_pool(role) {
        Some(pool) => pool.choose(rng).copied().unwrap_or(GENERIC_FOLLOW_UP),
        None => GENERIC_FOLLOW_UP,
    }
}

/// A structured feedback document: a styled headline plus five content
/// sections and a follow-up question.
#[derive(Debug, Clone)]
pub struct FeedbackDocument {
    pub score: u8,
    pub difficulty: Difficulty,
    pub style: Style,
    pub headline: &'static str,
    pub technical_analysis: &'static str,
    pub communication_assessment: &'static str,
    pub strengths: &'static str,
    pub improvement_areas: &'static str,
    pub follow_up: &'static str,
    pub pro_tips: String,
}

impl FeedbackDocument {
    /// Render the document as markdown. The score is embedded as
    /// `N/10` so `prepdrill_core::score::extract_score` can recover it.
    pub fn render(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.headline));
        md.push_str("### 📊 Detailed Breakdown\n\n");
        md.push_str(&format!("**🎯 Question Level:** {}  \n", self.difficulty));
        md.push_str(&format!("**📈 Your Score:** {}/10  \n", self.score));
        md.push_str(&format!("**🎨 Feedback Style:** {}\n\n", self.style.label()));
        md.push_str(&format!("### 🔍 Technical Analysis\n{}\n\n", self.technical_analysis));
        md.push_str(&format!(
            "### 💬 Communication Assessment\n{}\n\n",
            self.communication_assessment
        ));
        md.push_str(&format!("### 🎯 What You Did Well\n{}\n\n", self.strengths));
        md.push_str(&format!("### 🚀 Areas to Improve\n{}\n\n", self.improvement_areas));
        md.push_str(&format!("### 🤔 Follow-up Challenge\n{}\n\n", self.follow_up));
        md.push_str(&format!("### 💡 Pro Tips\n{}\n", self.pro_tips));

        md
    }
}

/// Compose a feedback document for an already-normalized score.
///
/// The style is drawn uniformly per call; it is deliberately not sticky
/// across a session. Every lookup falls back to a default entry, so
/// composition never fails.
pub fn compose<R: Rng + ?Sized>(
    rng: &mut R,
    score: u8,
    difficulty: Difficulty,
    role: &str,
) -> FeedbackDocument {
    let style = Style::ALL.choose(rng).copied().unwrap_or(Style::Encouraging);
    let bucket = Bucket::for_score(score);
    let headline = headlines(style, bucket).choose(rng).copied().unwrap_or_default();

    FeedbackDocument {
        score,
        difficulty,
        style,
        headline,
        technical_analysis: templates::technical_analysis(score, style),
        communication_assessment: templates::communication_assessment(score, style),
        strengths: templates::strengths(score, style),
        improvement_areas: templates::improvements(score, style),
        follow_up: follow_up_question(rng, role),
        pro_tips: templates::pro_tips(score, difficulty, style),
    }
}

/// Evaluate one answer end to end: keyword signal → normalized score →
/// rendered feedback. The question text is accepted for call-site
/// symmetry; scoring currently reads only the answer.
pub fn evaluate_answer<R: Rng + ?Sized>(
    rng: &mut R,
    _question: &str,
    answer: &str,
    difficulty: Difficulty,
    role: &str,
) -> String {
    let raw = raw_score(answer);
    let score = normalize(answer, raw, difficulty);
    compose(rng, score, difficulty, role).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prepdrill_core::score::extract_score;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SECTION_HEADERS: [&str; 6] = [
        "### 🔍 Technical Analysis",
        "### 💬 Communication Assessment",
        "### 🎯 What You Did Well",
        "### 🚀 Areas to Improve",
        "### 🤔 Follow-up Challenge",
        "### 💡 Pro Tips",
    ];

    #[test]
    fn seeded_rng_pins_template_selection() {
        let doc_a = compose(&mut StdRng::seed_from_u64(42), 7, Difficulty::Medium, "Java Developer");
        let doc_b = compose(&mut StdRng::seed_from_u64(42), 7, Difficulty::Medium, "Java Developer");

        assert_eq!(doc_a.style, doc_b.style);
        assert_eq!(doc_a.headline, doc_b.headline);
        assert_eq!(doc_a.follow_up, doc_b.follow_up);
        assert_eq!(doc_a.render(), doc_b.render());
    }

    #[test]
    fn rendered_document_has_all_sections() {
        let doc = compose(&mut StdRng::seed_from_u64(7), 9, Difficulty::Hard, "Data Scientist");
        let rendered = doc.render();

        for header in SECTION_HEADERS {
            assert!(rendered.contains(header), "missing section: {header}");
        }
        assert!(rendered.contains("**📈 Your Score:** 9/10"));
    }

    #[test]
    fn embedded_score_roundtrips_through_extraction() {
        let mut rng = StdRng::seed_from_u64(1);
        for score in 1..=10 {
            let rendered = compose(&mut rng, score, Difficulty::Medium, "AI Engineer").render();
            assert_eq!(extract_score(&rendered), Some(score));
        }
    }

    #[test]
    fn follow_up_comes_from_role_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = follow_up_pool("Java Developer").unwrap();
        for _ in 0..20 {
            let question = follow_up_question(&mut rng, "Java Developer");
            assert!(pool.contains(&question));
        }
    }

    #[test]
    fn unknown_role_gets_generic_follow_up() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            follow_up_question(&mut rng, "Underwater Basket Weaver"),
            GENERIC_FOLLOW_UP
        );
    }

    #[test]
    fn sections_depend_on_score_not_on_draws() {
        // Same style and score: sections identical even though headline
        // draws may differ.
        let doc = compose(&mut StdRng::seed_from_u64(11), 5, Difficulty::Easy, "Java Developer");
        assert_eq!(
            doc.technical_analysis,
            templates::technical_analysis(5, doc.style)
        );
        assert_eq!(doc.strengths, templates::strengths(5, doc.style));
    }

    #[test]
    fn evaluate_answer_short_answer_floor() {
        let rendered = evaluate_answer(
            &mut StdRng::seed_from_u64(5),
            "What is a HashMap?",
            "idk",
            Difficulty::Medium,
            "Java Developer",
        );
        assert_eq!(extract_score(&rendered), Some(2));
    }

    #[test]
    fn evaluate_answer_full_pipeline() {
        let answer = "I would use a HashMap because it gives O(1) average lookup and I \
                      have experience optimizing this in production with thread safety in mind";
        let rendered = evaluate_answer(
            &mut StdRng::seed_from_u64(5),
            "How would you implement a cache?",
            answer,
            Difficulty::Medium,
            "Java Developer",
        );

        let score = extract_score(&rendered).unwrap();
        assert!((1..=10).contains(&score));
        // "thread" fires (+2), so the answer clears the neutral baseline.
        assert!(score >= 5, "expected at least mid-scale, got {score}");
        for header in SECTION_HEADERS {
            assert!(rendered.contains(header));
        }
    }
}
