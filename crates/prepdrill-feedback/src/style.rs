//! Narrative styles, score buckets, and headline template pools.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Narrative voice used to vary feedback phrasing without affecting the
/// score. Drawn uniformly at random per evaluation; a style is never a
/// property of the session or the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Encouraging,
    Analytical,
    Mentor,
    Casual,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Encouraging,
        Style::Analytical,
        Style::Mentor,
        Style::Casual,
    ];

    /// Capitalized label for display in the feedback document.
    pub fn label(&self) -> &'static str {
        match self {
            Style::Encouraging => "Encouraging",
            Style::Analytical => "Analytical",
            Style::Mentor => "Mentor",
            Style::Casual => "Casual",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Encouraging => write!(f, "encouraging"),
            Style::Analytical => write!(f, "analytical"),
            Style::Mentor => write!(f, "mentor"),
            Style::Casual => write!(f, "casual"),
        }
    }
}

/// Score bucket used to select template content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Bucket {
    /// Map a score in [1,10] to its bucket: [8,10] excellent, [6,7] good,
    /// [4,5] average, [1,3] poor.
    pub fn for_score(score: u8) -> Bucket {
        match score {
            8.. => Bucket::Excellent,
            6..=7 => Bucket::Good,
            4..=5 => Bucket::Average,
            _ => Bucket::Poor,
        }
    }
}

/// Headline candidates for a (style, bucket) pair. Total lookups; there is
/// always a non-empty pool.
pub(crate) fn headlines(style: Style, bucket: Bucket) -> &'static [&'static str] {
    match (style, bucket) {
        (Style::Encouraging, Bucket::Excellent) => &[
            "🎉 Wow! That was absolutely outstanding! You've clearly mastered this topic.",
            "🌟 Exceptional work! Your answer demonstrates expert-level understanding.",
            "💯 Perfect! You've hit all the key points with impressive depth and clarity.",
            "🚀 Outstanding! This is exactly what interviewers love to hear.",
        ],
        (Style::Encouraging, Bucket::Good) => &[
            "👍 Great job! You've shown solid understanding of the concepts.",
            "✅ Well done! Your answer covers the important points effectively.",
            "👏 Nice work! You're definitely on the right track here.",
            "💪 Good effort! You've demonstrated solid knowledge in this area.",
        ],
        (Style::Encouraging, Bucket::Average) => &[
            "🤔 You're getting there! A bit more detail would make this excellent.",
            "📚 Good start! Let's build on this foundation with more specifics.",
            "🎯 You're on the right path! Adding examples would strengthen your answer.",
            "💡 Not bad! With a bit more depth, this could be really strong.",
        ],
        (Style::Encouraging, Bucket::Poor) => &[
            "💪 Don't worry! Every expert started somewhere. Let's work on this together.",
            "📖 This is a learning opportunity! The basics are there, just need more practice.",
            "🌟 Keep going! You've got the right attitude, now let's build the knowledge.",
            "🎯 You're asking the right questions! Let's dive deeper into this topic.",
        ],
        (Style::Analytical, Bucket::Excellent) => &[
            "📊 Analysis: Your response demonstrates comprehensive technical knowledge with excellent structure.",
            "🔍 Evaluation: Outstanding technical depth combined with clear communication patterns.",
            "📈 Assessment: Expert-level understanding with practical application demonstrated.",
            "🎯 Review: Exceptional answer showing both theoretical and practical expertise.",
        ],
        (Style::Analytical, Bucket::Good) => &[
            "📊 Analysis: Solid technical foundation with good communication structure.",
            "🔍 Evaluation: Good understanding demonstrated with room for enhancement.",
            "📈 Assessment: Competent response showing adequate technical knowledge.",
            "🎯 Review: Well-structured answer with appropriate technical depth.",
        ],
        (Style::Analytical, Bucket::Average) => &[
            "📊 Analysis: Basic understanding shown, requires additional technical depth.",
            "🔍 Evaluation: Adequate response with opportunities for improvement.",
            "📈 Assessment: Foundational knowledge present, needs expansion.",
            "🎯 Review: Basic structure good, technical content needs enhancement.",
        ],
        (Style::Analytical, Bucket::Poor) => &[
            "📊 Analysis: Limited technical depth, fundamental concepts need review.",
            "🔍 Evaluation: Basic response structure, technical content requires development.",
            "📈 Assessment: Minimal technical knowledge demonstrated, needs study.",
            "🎯 Review: Response lacks technical depth, fundamental understanding needed.",
        ],
        (Style::Mentor, Bucket::Excellent) => &[
            "👨‍🏫 As your mentor, I'm impressed! You've clearly put in the work to understand this deeply.",
            "🎓 Excellent work! You've demonstrated the kind of expertise that sets candidates apart.",
            "💼 From an interviewer's perspective, this answer shows exactly what we look for.",
            "🏆 Outstanding! You've shown both technical skill and communication ability.",
        ],
        (Style::Mentor, Bucket::Good) => &[
            "👨‍🏫 Good work! You're developing strong technical communication skills.",
            "🎓 Solid foundation! With a bit more practice, you'll be excellent at this.",
            "💼 You're on the right track! This shows good understanding of the concepts.",
            "🏆 Well done! You're building the skills needed for technical interviews.",
        ],
        (Style::Mentor, Bucket::Average) => &[
            "👨‍🏫 You're making progress! Let's work on adding more technical depth.",
            "🎓 Good start! The basics are there, now let's add the details that make answers shine.",
            "💼 You're learning! With more practice, you'll develop stronger technical responses.",
            "🏆 Keep practicing! You're building the foundation for better answers.",
        ],
        (Style::Mentor, Bucket::Poor) => &[
            "👨‍🏫 Let's work on this together! Every expert was once a beginner.",
            "🎓 Don't get discouraged! This is a learning opportunity to grow your skills.",
            "💼 We all start somewhere! Let's focus on building your technical knowledge.",
            "🏆 Keep your head up! With practice and study, you'll improve significantly.",
        ],
        (Style::Casual, Bucket::Excellent) => &[
            "🔥 That was fire! You totally nailed this question!",
            "💪 Absolutely crushed it! This is exactly what they want to hear!",
            "🚀 Boom! You just aced that like a pro!",
            "🎯 Bullseye! That answer was spot on!",
        ],
        (Style::Casual, Bucket::Good) => &[
            "👍 Pretty solid! You've got the right idea here.",
            "✅ Not bad at all! You're definitely getting the hang of this.",
            "👌 Good stuff! You're on the right track for sure.",
            "💯 Decent work! You've got the basics down.",
        ],
        (Style::Casual, Bucket::Average) => &[
            "🤔 Hmm, you're close but missing some key details.",
            "📝 It's a start! Just need to beef it up a bit more.",
            "🎯 Almost there! Just need to add some more meat to the bones.",
            "💭 Getting warmer! A few more details would make this really good.",
        ],
        (Style::Casual, Bucket::Poor) => &[
            "😅 Hey, no worries! We all have to start somewhere.",
            "🤷 It happens! Let's work on building this up together.",
            "💪 Don't sweat it! This is totally learnable stuff.",
            "🌟 Keep at it! You'll get there with some practice.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(Bucket::for_score(10), Bucket::Excellent);
        assert_eq!(Bucket::for_score(8), Bucket::Excellent);
        assert_eq!(Bucket::for_score(7), Bucket::Good);
        assert_eq!(Bucket::for_score(6), Bucket::Good);
        assert_eq!(Bucket::for_score(5), Bucket::Average);
        assert_eq!(Bucket::for_score(4), Bucket::Average);
        assert_eq!(Bucket::for_score(3), Bucket::Poor);
        assert_eq!(Bucket::for_score(1), Bucket::Poor);
    }

    #[test]
    fn every_pool_has_candidates() {
        for style in Style::ALL {
            for bucket in [
                Bucket::Excellent,
                Bucket::Good,
                Bucket::Average,
                Bucket::Poor,
            ] {
                assert!(
                    !headlines(style, bucket).is_empty(),
                    "empty pool for {style}/{bucket:?}"
                );
            }
        }
    }

    #[test]
    fn style_labels() {
        assert_eq!(Style::Encouraging.label(), "Encouraging");
        assert_eq!(Style::Casual.to_string(), "casual");
    }
}
