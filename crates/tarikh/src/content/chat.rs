//! The history guide chat. Answers are canned and picked by keyword.

use strum::Display;

pub const GREETING: &str =
    "As-salamu alaykum! I am your Islamic history guide. How can I assist you today?";

pub const SUGGESTED_QUESTIONS: [&str; 6] = [
    "Who was Prophet Muhammad ﷺ?",
    "What is the significance of the Hijra?",
    "Tell me about the Islamic Golden Age",
    "What are the Five Pillars of Islam?",
    "Who were the Rightly Guided Caliphs?",
    "What contributions did Muslims make to science?",
];

pub const FALLBACK_ANSWER: &str = "That's an interesting question about Islamic history. \
In a complete version of this app, I would connect to a knowledge base to provide you with \
accurate information. Would you like to explore one of the suggested topics instead?";

struct Answer {
    keywords: &'static [&'static str],
    text: &'static str,
}

// checked in order, first match wins
const ANSWERS: [Answer; 6] = [
    Answer {
        keywords: &["muhammad", "prophet"],
        text: "Prophet Muhammad ﷺ was born in Makkah around 570 CE. He received his first \
revelation at age 40 and spent 23 years spreading the message of Islam.",
    },
    Answer {
        keywords: &["hijra"],
        text: "The Hijra refers to the migration of Prophet Muhammad ﷺ and his followers from \
Makkah to Madinah in 622 CE. This event marks the beginning of the Islamic calendar.",
    },
    Answer {
        keywords: &["golden age"],
        text: "The Islamic Golden Age (8th-14th centuries) was a period of cultural, economic, \
and scientific flourishing in the Islamic world. Scholars made significant contributions to \
mathematics, astronomy, medicine, and philosophy.",
    },
    Answer {
        keywords: &["pillars"],
        text: "The Five Pillars of Islam are: Shahada (faith), Salat (prayer), Zakat (charity), \
Sawm (fasting during Ramadan), and Hajj (pilgrimage to Makkah).",
    },
    Answer {
        keywords: &["caliphs"],
        text: "The Rightly Guided Caliphs were the first four leaders after Prophet Muhammad ﷺ: \
Abu Bakr, Umar ibn Al-Khattab, Uthman ibn Affan, and Ali ibn Abi Talib. They ruled from \
632-661 CE.",
    },
    Answer {
        keywords: &["science", "contributions"],
        text: "Muslim scholars made numerous contributions to science, including algebra (by \
Al-Khwarizmi), optics (by Ibn al-Haytham), and advances in medicine (by Ibn Sina/Avicenna). \
They preserved and built upon Greek knowledge while adding their own discoveries.",
    },
];

/// Picks the canned answer for `query`, ignoring case.
pub fn answer(query: &str) -> &'static str {
    let query = query.to_lowercase();
    ANSWERS
        .iter()
        .find(|answer| answer.keywords.iter().any(|k| query.contains(k)))
        .map_or(FALLBACK_ANSWER, |answer| answer.text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Speaker {
    #[strum(to_string = "you")]
    User,
    #[strum(to_string = "guide")]
    Guide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
}

impl Message {
    fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }
}

/// Chat history. Starts with the guide's greeting.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self {
            messages: vec![Message::new(Speaker::Guide, GREETING)],
        }
    }
}

impl Conversation {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Records a question and returns the answer the guide will give.
    /// Blank input is ignored.
    pub fn ask(&mut self, question: &str) -> Option<&'static str> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        self.messages.push(Message::new(Speaker::User, question));
        Some(answer(question))
    }

    pub fn reply(&mut self, text: &str) {
        self.messages.push(Message::new(Speaker::Guide, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_has_its_answer() {
        let cases = vec![
            ("Tell me about Muhammad", 0),
            ("who was the PROPHET", 0),
            ("Why does the Hijra matter?", 1),
            ("the golden age", 2),
            ("List the pillars", 3),
            ("Who were the Caliphs?", 4),
            ("Science in Baghdad", 5),
            ("Muslim contributions", 5),
        ];

        for (query, index) in cases {
            assert_eq!(answer(query), ANSWERS[index].text, "{query}");
        }
    }

    #[test]
    fn test_unknown_question_falls_back() {
        assert_eq!(answer("What is the weather like?"), FALLBACK_ANSWER);
        assert_eq!(answer("golden"), FALLBACK_ANSWER);
        assert_eq!(answer(""), FALLBACK_ANSWER);
    }

    #[test]
    fn test_earlier_keyword_wins() {
        // mentions both the prophet and the hijra
        assert_eq!(answer("The Prophet's hijra"), ANSWERS[0].text);
    }

    #[test]
    fn test_suggested_questions_are_answered() {
        for question in SUGGESTED_QUESTIONS {
            assert_ne!(answer(question), FALLBACK_ANSWER, "{question}");
        }
    }

    #[test]
    fn test_conversation_flow() {
        let mut chat = Conversation::default();
        assert_eq!(chat.messages(), &[Message::new(Speaker::Guide, GREETING)]);

        assert_eq!(chat.ask("   "), None);
        assert_eq!(chat.messages().len(), 1);

        let reply = chat.ask("  What are the pillars?  ").unwrap();
        chat.reply(reply);

        let messages = chat.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], Message::new(Speaker::User, "What are the pillars?"));
        assert_eq!(messages[2].speaker, Speaker::Guide);
        assert!(messages[2].text.starts_with("The Five Pillars"));
    }
}
