//! Topics offered on the explore page. Each one opens the chat with a
//! starter question.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub title: &'static str,
    pub description: &'static str,
    /// Freedesktop icon name.
    pub icon: &'static str,
}

pub static TOPICS: [Topic; 6] = [
    Topic {
        title: "Prophet Muhammad ﷺ",
        description: "Learn about the life and teachings of the final Prophet",
        icon: "starred",
    },
    Topic {
        title: "Islamic Golden Age",
        description: "Discover the scientific and cultural achievements of Muslims",
        icon: "applications-science",
    },
    Topic {
        title: "Quran & Hadith",
        description: "Explore the holy texts and their meanings",
        icon: "accessories-dictionary",
    },
    Topic {
        title: "Islamic Architecture",
        description: "Explore the beauty of mosques and Islamic buildings",
        icon: "applications-engineering",
    },
    Topic {
        title: "Islamic Civilization",
        description: "Learn about the spread and impact of Islamic civilization",
        icon: "applications-internet",
    },
    Topic {
        title: "Islamic Art",
        description: "Discover the beauty of Islamic calligraphy and art",
        icon: "applications-graphics",
    },
];

impl Topic {
    pub fn question(&self) -> String {
        format!("Tell me about {}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::chat::{self, FALLBACK_ANSWER};

    #[test]
    fn test_topic_questions() {
        assert_eq!(TOPICS[2].question(), "Tell me about Quran & Hadith");

        // the first two topics have a dedicated answer, the rest fall back
        let answered: Vec<bool> = TOPICS
            .iter()
            .map(|topic| chat::answer(&topic.question()) != FALLBACK_ANSWER)
            .collect();
        assert_eq!(answered, vec![true, true, false, false, false, false]);
    }

    #[test]
    fn test_titles_are_unique() {
        for (i, a) in TOPICS.iter().enumerate() {
            assert!(TOPICS[i + 1..].iter().all(|b| b.title != a.title));
        }
    }
}
