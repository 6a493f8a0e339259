//! Deterministic section tables.
//!
//! Every section is a total lookup keyed by (score threshold, style);
//! nothing here is randomized, so two evaluations with the same score and
//! style produce identical section text.

use prepdrill_core::model::Difficulty;

use crate::style::Style;

pub(crate) fn technical_analysis(score: u8, style: Style) -> &'static str {
    match style {
        Style::Encouraging => match score {
            8.. => "🌟 Your technical depth is impressive! You showed both theoretical knowledge and practical understanding.",
            6..=7 => "👍 Good technical foundation! You demonstrated solid understanding of the core concepts.",
            4..=5 => "📚 You have the basics down! Adding more technical specifics would make this excellent.",
            _ => "💪 The foundation is there! Focus on building your technical vocabulary and examples.",
        },
        Style::Analytical => match score {
            8.. => "📊 Technical Depth: Excellent (9/10) - Comprehensive understanding with practical applications.",
            6..=7 => "📊 Technical Depth: Good (7/10) - Solid understanding with room for enhancement.",
            4..=5 => "📊 Technical Depth: Basic (5/10) - Adequate knowledge, needs more depth.",
            _ => "📊 Technical Depth: Limited (3/10) - Fundamental concepts need development.",
        },
        Style::Mentor => match score {
            8.. => "👨‍🏫 From a technical perspective, you've shown the kind of expertise that interviewers look for.",
            6..=7 => "👨‍🏫 Your technical understanding is solid. With more practice, you'll be excellent.",
            4..=5 => "👨‍🏫 You're building good technical foundations. Let's work on adding more depth.",
            _ => "👨‍🏫 Technical skills develop over time. Focus on understanding the fundamentals first.",
        },
        Style::Casual => match score {
            8.. => "🔥 Your tech game is strong! You really know your stuff.",
            6..=7 => "👍 Pretty solid technical knowledge! You've got the right ideas.",
            4..=5 => "🤔 You're on the right track, just need to beef up the technical details.",
            _ => "💪 No worries! Technical skills take time to build up.",
        },
    }
}

pub(crate) fn communication_assessment(score: u8, style: Style) -> &'static str {
    match style {
        Style::Encouraging => match score {
            8.. => "🎯 Your communication is crystal clear! You explained complex concepts effectively.",
            6..=7 => "💬 Good communication flow! Your ideas were well-organized and easy to follow.",
            4..=5 => "📝 Your communication is improving! Adding structure would make it even better.",
            _ => "🗣️ Keep practicing your explanations! Clear communication is a skill that develops over time.",
        },
        Style::Analytical => match score {
            8.. => "📊 Communication: Excellent (9/10) - Clear, structured, and engaging delivery.",
            6..=7 => "📊 Communication: Good (7/10) - Logical flow with adequate clarity.",
            4..=5 => "📊 Communication: Basic (5/10) - Understandable but needs better structure.",
            _ => "📊 Communication: Limited (3/10) - Basic expression, needs clarity improvement.",
        },
        Style::Mentor => match score {
            8.. => "👨‍🏫 Your communication skills are excellent. You know how to explain technical concepts clearly.",
            6..=7 => "👨‍🏫 Good communication! You're developing the ability to explain technical topics well.",
            4..=5 => "👨‍🏫 Communication is improving! Focus on organizing your thoughts before speaking.",
            _ => "👨‍🏫 Communication skills develop with practice. Don't be afraid to take your time.",
        },
        Style::Casual => match score {
            8.. => "💯 You explained that like a pro! Crystal clear and easy to follow.",
            6..=7 => "👍 Nice job explaining! You got your point across well.",
            4..=5 => "🤔 You're getting better at explaining things! Just need to organize your thoughts more.",
            _ => "💪 Explaining technical stuff is hard! You'll get better with practice.",
        },
    }
}

pub(crate) fn strengths(score: u8, style: Style) -> &'static str {
    match style {
        Style::Encouraging => match score {
            8.. => "✅ Deep technical knowledge • Clear communication • Practical examples • Confident delivery",
            6..=7 => "✅ Solid understanding • Good communication • Logical thinking • Positive attitude",
            4..=5 => "✅ Basic knowledge • Willingness to learn • Honest approach • Good foundation",
            _ => "✅ Honest about limitations • Willing to learn • Positive attitude • Good starting point",
        },
        Style::Analytical => match score {
            8.. => "📈 Strong technical foundation • Excellent communication skills • Practical application • Professional approach",
            6..=7 => "📈 Good technical base • Adequate communication • Logical reasoning • Professional demeanor",
            4..=5 => "📈 Basic technical knowledge • Improving communication • Honest assessment • Learning mindset",
            _ => "📈 Honest self-assessment • Learning orientation • Positive attitude • Growth potential",
        },
        Style::Mentor => match score {
            8.. => "🏆 You've clearly put in the work to understand this deeply. Your technical knowledge is impressive.",
            6..=7 => "🏆 You're developing strong technical skills. Your communication is getting better with each answer.",
            4..=5 => "🏆 You have a good foundation to build on. Your honesty about what you know is valuable.",
            _ => "🏆 Your willingness to learn and improve is your greatest strength. Keep that attitude!",
        },
        Style::Casual => match score {
            8.. => "🔥 You totally crushed it! Your tech knowledge and communication are on point.",
            6..=7 => "👍 You're getting pretty good at this! Solid knowledge and decent communication.",
            4..=5 => "💪 You've got the basics down! That's a solid foundation to build on.",
            _ => "🌟 You're honest about what you know, and that's actually really valuable!",
        },
    }
}

pub(crate) fn improvements(score: u8, style: Style) -> &'static str {
    match style {
        Style::Encouraging => match score {
            8.. => "🚀 Continue deepening expertise • Stay updated with latest trends • Practice advanced scenarios",
            6..=7 => "🚀 Add more specific examples • Practice technical explanations • Study advanced concepts",
            4..=5 => "🚀 Study core concepts more thoroughly • Practice explaining technical topics • Add more examples",
            _ => "🚀 Focus on fundamental concepts • Practice technical communication • Build confidence gradually",
        },
        Style::Analytical => match score {
            8.. => "📊 Continue professional development • Stay current with industry trends • Practice advanced problem-solving",
            6..=7 => "📊 Enhance technical depth • Improve communication structure • Practice complex scenarios",
            4..=5 => "📊 Strengthen foundational knowledge • Improve communication clarity • Add technical examples",
            _ => "📊 Build fundamental understanding • Develop communication skills • Practice basic concepts",
        },
        Style::Mentor => match score {
            8.. => "🎓 Keep pushing yourself to learn more advanced topics. You're ready for the next level.",
            6..=7 => "🎓 Focus on adding more specific examples and technical details to your answers.",
            4..=5 => "🎓 Spend more time studying the fundamentals and practicing your explanations.",
            _ => "🎓 Start with the basics and build your confidence. Don't rush the learning process.",
        },
        Style::Casual => match score {
            8.. => "🔥 Keep leveling up! You're already pretty awesome, but there's always more to learn.",
            6..=7 => "💪 Add more specific examples and technical details to really nail those answers.",
            4..=5 => "📚 Hit the books a bit more and practice explaining things out loud.",
            _ => "🌟 Start with the basics and work your way up. You'll get there!",
        },
    }
}

/// Pro tips: one line keyed by difficulty, two keyed by whether the score
/// is below 6, one keyed by style. A rule table, not randomized.
pub(crate) fn pro_tips(score: u8, difficulty: Difficulty, style: Style) -> String {
    let mut tips = Vec::with_capacity(4);

    tips.push(match difficulty {
        Difficulty::Hard => {
            "💡 Hard questions often require multiple approaches - don't be afraid to discuss trade-offs"
        }
        Difficulty::Easy => {
            "💡 Easy questions are perfect for showing your communication skills and attention to detail"
        }
        Difficulty::Medium => {
            "💡 Medium questions are great for demonstrating both knowledge and practical thinking"
        }
    });

    if score < 6 {
        tips.push("💡 Practice explaining technical concepts to non-technical people");
        tips.push("💡 Use the STAR method: Situation, Task, Action, Result");
    } else {
        tips.push("💡 Add specific examples from your experience when possible");
        tips.push("💡 Don't forget to mention trade-offs and considerations");
    }

    tips.push(match style {
        Style::Encouraging => "💡 Remember: confidence comes from preparation and practice!",
        Style::Analytical => "💡 Structure your answers: Problem → Approach → Solution → Trade-offs",
        Style::Mentor => "💡 Interview success is about both knowledge and how you present it",
        Style::Casual => "💡 Keep it real - interviewers appreciate honesty and authenticity",
    });

    tips.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_deterministic_per_score_and_style() {
        assert_eq!(
            technical_analysis(9, Style::Analytical),
            technical_analysis(8, Style::Analytical)
        );
        assert_ne!(
            technical_analysis(9, Style::Analytical),
            technical_analysis(7, Style::Analytical)
        );
        assert_ne!(
            communication_assessment(9, Style::Casual),
            communication_assessment(9, Style::Mentor)
        );
    }

    #[test]
    fn pro_tips_rule_table() {
        let low = pro_tips(3, Difficulty::Hard, Style::Analytical);
        assert!(low.contains("trade-offs"));
        assert!(low.contains("STAR method"));
        assert!(low.contains("Problem → Approach"));
        assert_eq!(low.lines().count(), 4);

        let high = pro_tips(8, Difficulty::Easy, Style::Casual);
        assert!(high.contains("communication skills and attention to detail"));
        assert!(high.contains("specific examples from your experience"));
        assert!(!high.contains("STAR method"));
        assert_eq!(high.lines().count(), 4);
    }

    #[test]
    fn score_six_uses_high_tips() {
        let tips = pro_tips(6, Difficulty::Medium, Style::Mentor);
        assert!(!tips.contains("STAR method"));
    }
}
