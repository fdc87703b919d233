//! Curated events of the early Islamic period, oldest first.

use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[strum(to_string = "Prophet's Life", serialize = "life")]
    ProphetsLife,
    Revelation,
    Migration,
    Miracles,
    #[strum(to_string = "Major Battles", serialize = "battles")]
    MajorBattles,
    #[strum(to_string = "Peace Treaties", serialize = "treaties")]
    PeaceTreaties,
    #[strum(to_string = "Major Events", serialize = "events")]
    MajorEvents,
    Diplomacy,
    Caliphates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub category: Category,
}

macro_rules! event {
    ($year:literal, $title:literal, $location:literal, $category:ident, $description:literal) => {
        Event {
            year: $year,
            title: $title,
            description: $description,
            location: $location,
            category: Category::$category,
        }
    };
}

pub static EVENTS: [Event; 20] = [
    event!("570 CE", "Birth of Prophet Muhammad ﷺ", "Makkah, Arabian Peninsula", ProphetsLife,
        "Prophet Muhammad ﷺ was born in Makkah in the Year of the Elephant. His birth marked \
the beginning of a new era in human history."),
    event!("610 CE", "First Revelation", "Cave Hira, Makkah", Revelation,
        "Angel Jibreel (Gabriel) appeared to Prophet Muhammad ﷺ in the Cave of Hira with the \
first verses of the Quran: \"Read in the name of your Lord who created.\""),
    event!("613 CE", "Public Preaching", "Makkah", ProphetsLife,
        "After three years of private invitations to Islam, Prophet Muhammad ﷺ began publicly \
preaching the message of monotheism, facing intense opposition from Meccan leaders."),
    event!("615 CE", "First Migration to Abyssinia", "Abyssinia (Ethiopia)", Migration,
        "Facing persecution, a group of Muslims migrated to Abyssinia (modern Ethiopia) where \
they received protection from the Christian king, Negus."),
    event!("619 CE", "Year of Sorrow", "Makkah", ProphetsLife,
        "Prophet Muhammad ﷺ lost his beloved wife Khadijah (RA) and his uncle Abu Talib, who \
had been his protectors and supporters."),
    event!("620 CE", "Night Journey & Ascension", "Makkah to Jerusalem to Heavens", Miracles,
        "The miraculous night journey (Isra) from Makkah to Jerusalem and the ascension \
(Mi'raj) to the heavens, where the five daily prayers were prescribed."),
    event!("622 CE", "The Hijra", "Makkah to Madinah", Migration,
        "The migration of Prophet Muhammad ﷺ and his followers from Makkah to Madinah, marking \
the beginning of the Islamic calendar."),
    event!("624 CE", "Battle of Badr", "Badr, Arabian Peninsula", MajorBattles,
        "The first major battle between 313 Muslims and over 1,000 Meccans. Despite being \
outnumbered, Muslims achieved a decisive victory with divine help."),
    event!("625 CE", "Battle of Uhud", "Mount Uhud, near Madinah", MajorBattles,
        "Muslims faced a setback after archers left their positions. Prophet Muhammad ﷺ was \
injured, and his uncle Hamza (RA) was martyred."),
    event!("627 CE", "Battle of the Trench", "Madinah", MajorBattles,
        "Muslims defended Madinah by digging a trench around the city, successfully preventing \
a coalition of 10,000 enemy forces from invading."),
    event!("628 CE", "Treaty of Hudaybiyyah", "Hudaybiyyah, near Makkah", PeaceTreaties,
        "A pivotal peace treaty between Muslims and the Quraysh of Makkah that allowed Muslims \
to perform pilgrimage the following year and opened the door for many conversions to Islam."),
    event!("629 CE", "Battle of Mu'tah", "Mu'tah, modern-day Jordan", MajorBattles,
        "The first battle between Muslims and the Byzantine Empire, where Zayd ibn Harithah, \
Ja'far ibn Abi Talib, and Abdullah ibn Rawahah were martyred."),
    event!("630 CE", "Conquest of Makkah", "Makkah", MajorEvents,
        "The peaceful conquest of Makkah where Prophet Muhammad ﷺ showed remarkable mercy by \
granting general amnesty to those who had persecuted Muslims for years."),
    event!("631 CE", "Year of Delegations", "Madinah", Diplomacy,
        "Various Arab tribes sent delegations to Madinah to accept Islam and pledge allegiance \
to Prophet Muhammad ﷺ, marking the widespread acceptance of Islam in Arabia."),
    event!("632 CE", "Farewell Pilgrimage & Final Sermon", "Makkah & Mount Arafat", ProphetsLife,
        "Prophet Muhammad ﷺ performed his only complete Hajj and delivered his final sermon at \
Mount Arafat, establishing universal principles of human rights and equality."),
    event!("632 CE", "Passing of Prophet Muhammad ﷺ", "Madinah", ProphetsLife,
        "The Prophet ﷺ returned to his Lord on the 12th of Rabi al-Awwal, leaving behind the \
Quran and his Sunnah as guidance for humanity."),
    event!("632-634 CE", "Caliphate of Abu Bakr (RA)", "Madinah", Caliphates,
        "The first Caliph who unified Arabia, suppressed apostasy movements, and compiled the \
Quran into a single manuscript."),
    event!("634-644 CE", "Caliphate of Umar ibn Al-Khattab (RA)", "Madinah & expanding territories", Caliphates,
        "The Islamic state expanded dramatically, conquering Persia, Syria, Egypt, and parts of \
Byzantine territories. Umar (RA) established many administrative systems."),
    event!("644-656 CE", "Caliphate of Uthman ibn Affan (RA)", "Madinah & Mediterranean", Caliphates,
        "Standardized the Quran into a single authorized version and continued Islamic \
expansion. Naval power developed during this period."),
    event!("656-661 CE", "Caliphate of Ali ibn Abi Talib (RA)", "Kufa, Iraq", Caliphates,
        "The fourth Rightly Guided Caliph faced internal challenges but maintained the \
principles of justice and piety established by the Prophet ﷺ."),
];

/// Categories in the order they first appear on the timeline.
pub fn categories() -> Vec<Category> {
    let mut seen = Vec::new();
    for event in &EVENTS {
        if !seen.contains(&event.category) {
            seen.push(event.category);
        }
    }
    seen
}

/// Events of one category, or all of them for `None`.
pub fn events(category: Option<Category>) -> impl Iterator<Item = &'static Event> {
    EVENTS
        .iter()
        .filter(move |event| category.is_none_or(|c| event.category == c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_category_is_used() {
        let used = categories();
        assert_eq!(used.len(), Category::iter().count());
        assert_eq!(used[0], Category::ProphetsLife);
        assert_eq!(used[1], Category::Revelation);
    }

    #[test]
    fn test_filter_by_category() {
        assert_eq!(events(None).count(), EVENTS.len());

        let caliphates: Vec<&str> = events(Some(Category::Caliphates))
            .map(|event| event.year)
            .collect();
        assert_eq!(caliphates, vec!["632-634 CE", "634-644 CE", "644-656 CE", "656-661 CE"]);

        assert_eq!(events(Some(Category::MajorBattles)).count(), 4);
        assert_eq!(events(Some(Category::Revelation)).count(), 1);
    }

    #[test]
    fn test_category_names() {
        let cases = vec![
            ("Prophet's Life", Category::ProphetsLife),
            ("life", Category::ProphetsLife),
            ("major battles", Category::MajorBattles),
            ("CALIPHATES", Category::Caliphates),
        ];

        for (name, expected) in cases {
            assert_eq!(name.parse::<Category>().unwrap(), expected);
        }
        assert_eq!(Category::PeaceTreaties.to_string(), "Peace Treaties");
        assert!("Expansion".parse::<Category>().is_err());
    }

    #[test]
    fn test_events_are_in_chronological_order() {
        let starts: Vec<u32> = EVENTS
            .iter()
            .map(|event| event.year[..3].parse().unwrap())
            .collect();
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }
}
