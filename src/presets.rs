//! Built-in content: the stock question deck, a demo roster and the
//! default challenge pool.

use crate::core::Candidate;

/// The stock "who is most likely to" questions.
pub const DEFAULT_QUESTIONS: [&str; 3] = [
    "Who is most likely to get famous for something wrong?",
    "Who is most likely to get cancelled?",
    "Who is most likely to succeed?",
];

/// Challenges the loser can draw.
pub const DEFAULT_CHALLENGES: [&str; 6] = [
    "Text your last contact a compliment",
    "Do ten push-ups",
    "Sing the chorus of the last song you listened to",
    "Let the winner post a story from your phone",
    "Talk in an accent for the next two minutes",
    "Show the group your most recent photo",
];

/// Demo friends, each with a matching asset name.
pub const DEMO_FRIENDS: [&str; 3] = ["Birking1", "Cat1", "Frenchie1"];

#[must_use]
pub fn default_questions() -> Vec<String> {
    DEFAULT_QUESTIONS.iter().map(|q| (*q).to_string()).collect()
}

#[must_use]
pub fn default_challenges() -> Vec<String> {
    DEFAULT_CHALLENGES.iter().map(|c| (*c).to_string()).collect()
}

#[must_use]
pub fn demo_roster() -> Vec<Candidate> {
    DEMO_FRIENDS.iter().map(|name| Candidate::new(*name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_non_empty_and_unique() {
        assert_eq!(default_questions().len(), 3);
        assert!(!default_challenges().is_empty());

        let roster = demo_roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[1].asset.as_str(), "Cat1");

        let mut names: Vec<_> = roster.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 3);
    }
}
