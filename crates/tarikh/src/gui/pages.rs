use crate::content::chat::{self, Conversation, Speaker};
use crate::content::timeline::{self, Category, Event};
use crate::content::topics::{TOPICS, Topic};
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tabwheel::{Route, Tab};

/// Pause before the guide answers.
const TYPING_DELAY: Duration = Duration::from_millis(1500);
const ICON_SIZE: i32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Timeline,
    Chat,
    Topics,
    /// Just the tab's name.
    Placeholder,
}

impl PageKind {
    /// Decided by the last segment of the route.
    pub fn for_route(route: &Route) -> Self {
        match route.normalized().rsplit('/').next() {
            Some("timeline" | "timeline-fixed") => PageKind::Timeline,
            Some("chat" | "ai-chat") => PageKind::Chat,
            Some("topics" | "explore") => PageKind::Topics,
            _ => PageKind::Placeholder,
        }
    }
}

/// First tab that hosts the chat.
pub fn chat_route(tabs: &[Tab]) -> Option<&Route> {
    tabs.iter()
        .map(|tab| &tab.route)
        .find(|route| PageKind::for_route(route) == PageKind::Chat)
}

fn wrapped_label(text: &str, css_class: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(text));
    label.set_wrap(true);
    label.set_xalign(0.0);
    label.add_css_class(css_class);
    label
}

fn scrolled(child: &impl IsA<gtk::Widget>) -> gtk::ScrolledWindow {
    gtk::ScrolledWindow::builder()
        .hscrollbar_policy(gtk::PolicyType::Never)
        .vexpand(true)
        .child(child)
        .build()
}

/// Chat with the history guide. Kept alive across page rebuilds so the
/// conversation survives a config reload.
#[derive(Clone)]
pub struct ChatPage {
    pub root: gtk::Box,
    history: gtk::Box,
    scroller: gtk::ScrolledWindow,
    conversation: Rc<RefCell<Conversation>>,
}

impl ChatPage {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
        root.add_css_class("tarikh-chat");

        let history = gtk::Box::new(gtk::Orientation::Vertical, 6);
        let scroller = scrolled(&history);
        root.append(&scroller);

        let suggestions = gtk::FlowBox::new();
        suggestions.set_selection_mode(gtk::SelectionMode::None);
        root.append(&suggestions);

        let input = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_placeholder_text(Some("Ask about Islamic history..."));
        let send = gtk::Button::with_label("Send");
        input.append(&entry);
        input.append(&send);
        root.append(&input);

        let page = Self {
            root,
            history,
            scroller,
            conversation: Rc::new(RefCell::new(Conversation::default())),
        };

        for message in page.conversation.borrow().messages() {
            page.push_bubble(message.speaker, &message.text);
        }

        for question in chat::SUGGESTED_QUESTIONS {
            let button = gtk::Button::with_label(question);
            button.add_css_class("tarikh-suggestion");
            let chat = page.clone();
            button.connect_clicked(move |_| chat.ask(question));
            suggestions.insert(&button, -1);
        }

        let chat = page.clone();
        entry.connect_activate(move |entry| {
            chat.ask(&entry.text());
            entry.set_text("");
        });
        let chat = page.clone();
        send.connect_clicked(move |_| {
            chat.ask(&entry.text());
            entry.set_text("");
        });

        page
    }

    /// Shows the question now and the guide's answer after a short pause.
    pub fn ask(&self, question: &str) {
        let Some(reply) = self.conversation.borrow_mut().ask(question) else {
            return;
        };
        log::debug!("Guide asked '{}'", question.trim());
        self.push_bubble(Speaker::User, question.trim());

        let page = self.clone();
        glib::timeout_add_local_once(TYPING_DELAY, move || {
            page.conversation.borrow_mut().reply(reply);
            page.push_bubble(Speaker::Guide, reply);
        });
    }

    fn push_bubble(&self, speaker: Speaker, text: &str) {
        let bubble = wrapped_label(text, "tarikh-bubble");
        bubble.add_css_class(&format!("tarikh-bubble-{}", speaker));
        bubble.set_halign(match speaker {
            Speaker::User => gtk::Align::End,
            Speaker::Guide => gtk::Align::Start,
        });
        self.history.append(&bubble);

        let adjustment = self.scroller.vadjustment();
        glib::idle_add_local_once(move || adjustment.set_value(adjustment.upper()));
    }
}

fn event_row(event: &Event) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Vertical, 2);
    row.add_css_class("tarikh-event");
    row.append(&wrapped_label(
        &format!("{} · {}", event.year, event.category),
        "tarikh-event-year",
    ));
    row.append(&wrapped_label(event.title, "tarikh-event-title"));
    row.append(&wrapped_label(event.location, "tarikh-event-location"));
    row.append(&wrapped_label(event.description, "tarikh-event-description"));
    row
}

/// Category picked at `position` of the filter, where 0 means all.
fn filter_category(position: u32) -> Option<Category> {
    let index = usize::try_from(position).ok()?.checked_sub(1)?;
    timeline::categories().get(index).copied()
}

fn fill_timeline(list: &gtk::Box, category: Option<Category>) {
    while let Some(child) = list.first_child() {
        list.remove(&child);
    }
    for event in timeline::events(category) {
        list.append(&event_row(event));
    }
}

fn timeline_page() -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
    root.add_css_class("tarikh-timeline");

    let mut names = vec!["All".to_string()];
    names.extend(timeline::categories().iter().map(ToString::to_string));
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let filter = gtk::DropDown::from_strings(&names);
    root.append(&filter);

    let list = gtk::Box::new(gtk::Orientation::Vertical, 12);
    fill_timeline(&list, None);
    root.append(&scrolled(&list));

    filter.connect_selected_notify(move |filter| {
        fill_timeline(&list, filter_category(filter.selected()));
    });
    root
}

fn topic_card(topic: &'static Topic, on_pick: Rc<dyn Fn(&'static Topic)>) -> gtk::Button {
    let content = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    let icon = gtk::Image::from_icon_name(topic.icon);
    icon.set_pixel_size(ICON_SIZE);
    content.append(&icon);

    let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
    text.append(&wrapped_label(topic.title, "tarikh-topic-title"));
    text.append(&wrapped_label(topic.description, "tarikh-topic-description"));
    content.append(&text);

    let button = gtk::Button::new();
    button.add_css_class("tarikh-topic");
    button.set_child(Some(&content));
    button.connect_clicked(move |_| on_pick(topic));
    button
}

fn topics_page(on_pick: &Rc<dyn Fn(&'static Topic)>) -> gtk::ScrolledWindow {
    let list = gtk::Box::new(gtk::Orientation::Vertical, 8);
    list.add_css_class("tarikh-topics");
    for topic in &TOPICS {
        list.append(&topic_card(topic, on_pick.clone()));
    }
    scrolled(&list)
}

/// The page stack above the tab bar, one page per tab named by its route.
pub struct Pages {
    pub stack: gtk::Stack,
    pub chat: ChatPage,
    on_topic: Rc<dyn Fn(&'static Topic)>,
}

impl Pages {
    pub fn new(on_topic: impl Fn(&'static Topic) + 'static) -> Self {
        let stack = gtk::Stack::new();
        stack.set_vexpand(true);
        stack.set_transition_type(gtk::StackTransitionType::Crossfade);

        Self {
            stack,
            chat: ChatPage::new(),
            on_topic: Rc::new(on_topic),
        }
    }

    pub fn fill(&self, tabs: &[Tab]) {
        while let Some(child) = self.stack.first_child() {
            self.stack.remove(&child);
        }

        let mut chat_placed = false;
        for tab in tabs {
            let page: gtk::Widget = match PageKind::for_route(&tab.route) {
                PageKind::Timeline => timeline_page().upcast(),
                PageKind::Topics => topics_page(&self.on_topic).upcast(),
                PageKind::Chat if !chat_placed => {
                    chat_placed = true;
                    self.chat.root.clone().upcast()
                }
                PageKind::Chat | PageKind::Placeholder => {
                    let label = gtk::Label::new(Some(tab.name.as_str()));
                    label.add_css_class("tarikh-page");
                    label.upcast()
                }
            };
            self.stack
                .add_titled(&page, Some(tab.route.as_str()), tab.name.as_str());
        }
    }

    pub fn show(&self, route: &Route) {
        if self.stack.child_by_name(route.as_str()).is_some() {
            self.stack.set_visible_child_name(route.as_str());
        } else {
            log::warn!("No page for route '{}'", route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabwheel::tab::default_tabs;

    #[test]
    fn test_page_kind_for_route() {
        let cases = vec![
            ("/", PageKind::Placeholder),
            ("/map", PageKind::Placeholder),
            ("/timeline-fixed", PageKind::Timeline),
            ("/(tabs)/ai-chat", PageKind::Chat),
            ("/topics/", PageKind::Topics),
            ("explore", PageKind::Topics),
            ("/chat/history", PageKind::Placeholder),
        ];

        for (route, expected) in cases {
            assert_eq!(PageKind::for_route(&Route::new(route)), expected, "{route}");
        }
    }

    #[test]
    fn test_chat_route_of_default_tabs() {
        let tabs = default_tabs();
        assert_eq!(chat_route(&tabs), Some(&Route::new("/ai-chat")));
        assert_eq!(chat_route(&tabs[..2]), None);
    }

    #[test]
    fn test_filter_positions() {
        assert_eq!(filter_category(0), None);
        assert_eq!(filter_category(1), Some(Category::ProphetsLife));
        assert_eq!(filter_category(2), Some(Category::Revelation));
        assert_eq!(filter_category(500), None);
    }
}
