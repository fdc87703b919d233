use crate::icon::IconName;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct TabName(String);

/// Navigation target of a tab, e.g. `/map`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Route(String);

crate::string_newtype!(TabName, Route);

impl Route {
    /// Canonical form: one leading slash, no empty or `(group)` segments and
    /// no trailing slash. An empty path becomes `/`.
    pub fn normalized(&self) -> Route {
        let segments: Vec<&str> = self
            .0
            .split('/')
            .filter(|segment| !segment.is_empty())
            .filter(|segment| !(segment.starts_with('(') && segment.ends_with(')')))
            .collect();

        Route::new(format!("/{}", segments.join("/")))
    }

    /// True when `location` ends with this route, both normalized. Matches
    /// whole segments only, since both sides start with a slash.
    pub fn is_suffix_of(&self, location: &Route) -> bool {
        location
            .normalized()
            .ends_with(self.normalized().as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub name: TabName,
    pub route: Route,
    #[serde(default)]
    pub icon: IconName,
}

impl Tab {
    pub fn new(name: impl Into<String>, route: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: TabName::new(name),
            route: Route::new(route),
            icon: IconName::new(icon),
        }
    }
}

/// Index of the first tab whose route is a suffix of `location`.
pub fn find_tab(tabs: &[Tab], location: &Route) -> Option<usize> {
    let location = location.normalized();
    tabs.iter().position(|tab| tab.route.is_suffix_of(&location))
}

pub fn default_tabs() -> Vec<Tab> {
    vec![
        Tab::new("Home", "/", "go-home"),
        Tab::new("Timeline", "/timeline-fixed", "document-open-recent"),
        Tab::new("AI Chat", "/ai-chat", "internet-chat"),
        Tab::new("Topics", "/topics", "accessories-dictionary"),
        Tab::new("Map", "/map", "mark-location"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_normalization() {
        let cases = vec![
            ("/(tabs)/map", "/map"),
            ("/(tabs)", "/"),
            ("", "/"),
            ("/", "/"),
            ("/topics/", "/topics"),
            ("/(tabs)/(inner)/ai-chat", "/ai-chat"),
            ("//map", "/map"),
            ("map", "/map"),
            ("/deep//link///", "/deep/link"),
            ("(tabs)/topics", "/topics"),
        ];

        for (raw, expected) in cases {
            assert_eq!(Route::new(raw).normalized(), Route::new(expected), "{raw}");
        }
    }

    #[test]
    fn test_find_tab_by_suffix() {
        let tabs = default_tabs();

        assert_eq!(find_tab(&tabs, &Route::new("/map")), Some(4));
        assert_eq!(find_tab(&tabs, &Route::new("/(tabs)/timeline-fixed")), Some(1));
        assert_eq!(find_tab(&tabs, &Route::new("/deep/link/ai-chat")), Some(2));
        assert_eq!(find_tab(&tabs, &Route::new("/(tabs)")), Some(0));
        assert_eq!(find_tab(&tabs, &Route::new("/sitemap")), None);
        assert_eq!(find_tab(&tabs, &Route::new("/settings")), None);
    }

    #[test]
    fn test_relative_route_matches_whole_segments() {
        let tabs = vec![Tab::new("Map", "map", ""), Tab::new("Chat", "//ai-chat/", "")];

        assert_eq!(find_tab(&tabs, &Route::new("/sitemap")), None);
        assert_eq!(find_tab(&tabs, &Route::new("/explore/map")), Some(0));
        assert_eq!(find_tab(&tabs, &Route::new("//map")), Some(0));
        assert_eq!(find_tab(&tabs, &Route::new("/ai-chat")), Some(1));
        assert_eq!(find_tab(&tabs, &Route::new("/my-ai-chat")), None);
    }

    #[test]
    fn test_tab_deserialization_defaults_icon() {
        let tab: Tab = serde_json::from_str(r#"{"name": "Map", "route": "/map"}"#).unwrap();
        assert_eq!(tab.name.as_str(), "Map");
        assert_eq!(tab.route, Route::new("/map"));
        assert!(tab.icon.is_empty());
    }
}
