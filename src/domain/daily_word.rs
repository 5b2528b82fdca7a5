//! src/domain/daily_word.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyWord {
    pub word: &'static str,
    pub definition: &'static str,
    pub example: &'static str,
}

/// Sample entries shown under the signup form.
pub const TODAYS_WORDS: [DailyWord; 2] = [
    DailyWord {
        word: "Ephemeral",
        definition: "Lasting for a very short time.",
        example: "The viral TikTok trend was ephemeral, disappearing as quickly as it had emerged.",
    },
    DailyWord {
        word: "Serendipity",
        definition: "The occurrence of events by chance in a happy or beneficial way.",
        example: "It was pure serendipity that we both swiped right and found our perfect match!",
    },
];
