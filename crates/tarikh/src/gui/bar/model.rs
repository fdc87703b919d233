use crate::config::Config;
use crate::gui::bar::{BOTTOM_PADDING, ICON_SIZE};
use gdk_pixbuf::Pixbuf;
use std::time::Duration;
use tabwheel::icon;
use tabwheel::{ArcLayout, Navigator, Point, RadialTabSelector, Route, Tab, TickOutcome};

/// Holds the route of the latest tab press until the app switches pages.
#[derive(Debug, Default)]
pub struct PageNavigator {
    pending: Option<Route>,
}

impl Navigator for PageNavigator {
    fn navigate(&mut self, route: &Route) {
        self.pending = Some(route.clone());
    }
}

pub struct TabBar {
    pub wheel: RadialTabSelector<PageNavigator>,
    pub icons: Vec<Option<Pixbuf>>,
    last_frame_us: Option<i64>,
}

impl TabBar {
    pub fn new(config: &Config, location: Option<&Route>) -> Self {
        let wheel = match RadialTabSelector::new(
            config.tabs.clone(),
            location,
            PageNavigator::default(),
        ) {
            Ok(wheel) => wheel,
            Err(e) => {
                log::error!("{}, falling back to built-in tabs", e);
                RadialTabSelector::with_default_tabs(location, PageNavigator::default())
            }
        }
        .with_layout(config.layout)
        .with_spring(config.spring.params())
        .with_tie_policy(config.tie_break);

        let icons = wheel.tabs().iter().map(Self::load_icon).collect();

        Self {
            wheel,
            icons,
            last_frame_us: None,
        }
    }

    fn load_icon(tab: &Tab) -> Option<Pixbuf> {
        let path = icon::find_icon_path(&tab.icon)?;
        Pixbuf::from_file_at_scale(&path, ICON_SIZE, ICON_SIZE, true)
            .map_err(|e| log::warn!("Failed to load icon {}: {}", path.display(), e))
            .ok()
    }

    /// Where the arc's resting center sits inside a drawing area of this size.
    pub fn anchor(layout: &ArcLayout, height: f64) -> Point {
        Point::new(
            layout.width / 2.0,
            height - BOTTOM_PADDING - layout.tab_height / 2.0,
        )
    }

    pub fn current_route(&self) -> Route {
        self.wheel.selected_tab().route.clone()
    }

    pub fn resize(&mut self, width: f64) {
        let layout = self.wheel.layout().with_width(width);
        self.wheel.set_layout(layout);
    }

    /// Handles a click at `point` in drawing area coordinates.
    pub fn press(&mut self, point: Point, height: f64) -> bool {
        let anchor = Self::anchor(self.wheel.layout(), height);
        let local = Point::new(point.x - anchor.x, point.y - anchor.y);

        self.wheel
            .hit_test(local)
            .is_some_and(|index| self.wheel.select_tab(index))
    }

    /// Route a tab press asked for since the last call.
    pub fn take_navigation(&mut self) -> Option<Route> {
        self.wheel.navigator_mut().pending.take()
    }

    /// True while the wheel or a press pulse still moves.
    pub fn needs_ticker(&self) -> bool {
        !self.wheel.is_settled()
    }

    /// Advances the wheel to the frame clock time (microseconds).
    pub fn frame(&mut self, frame_time_us: i64) -> TickOutcome {
        let dt = self
            .last_frame_us
            .map(|last| Duration::from_micros(frame_time_us.saturating_sub(last).max(0) as u64))
            .unwrap_or_default();

        let outcome = self.wheel.tick(dt);

        // an idle wheel must not see the idle gap as one long frame
        self.last_frame_us = self.needs_ticker().then_some(frame_time_us);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_US: i64 = 16_667;

    fn bar() -> TabBar {
        let mut config = Config::default();
        for tab in &mut config.tabs {
            tab.icon = Default::default();
        }
        TabBar::new(&config, Some(&Route::new("/ai-chat")))
    }

    fn screen_point(bar: &TabBar, index: usize, height: f64) -> Point {
        let anchor = TabBar::anchor(bar.wheel.layout(), height);
        let t = bar.wheel.tab_transform(index).unwrap();
        Point::new(anchor.x + t.translate_x, anchor.y + t.translate_y)
    }

    /// Runs the frame clock until the bar no longer needs it.
    fn run_frames(bar: &mut TabBar, mut now: i64) -> (Vec<TickOutcome>, i64) {
        let mut outcomes = Vec::new();
        while bar.needs_ticker() && outcomes.len() < 600 {
            outcomes.push(bar.frame(now));
            now += FRAME_US;
        }
        (outcomes, now)
    }

    #[test]
    fn test_press_on_neighbour_navigates() {
        let mut bar = bar();
        let point = screen_point(&bar, 3, 110.0);

        assert!(bar.press(point, 110.0));
        assert_eq!(bar.wheel.selected(), 3);
        assert_eq!(bar.take_navigation(), Some(Route::new("/topics")));
        assert_eq!(bar.take_navigation(), None);
    }

    #[test]
    fn test_rapid_presses_keep_latest_navigation() {
        let mut bar = bar();
        assert!(bar.wheel.select_tab(3));
        assert!(bar.wheel.select_tab(4));
        assert_eq!(bar.take_navigation(), Some(Route::new("/map")));
    }

    #[test]
    fn test_press_on_selected_or_empty_space_does_nothing() {
        let mut bar = bar();

        let center = screen_point(&bar, 2, 110.0);
        assert!(!bar.press(center, 110.0));
        assert!(!bar.press(Point::new(-500.0, -500.0), 110.0));
        assert_eq!(bar.take_navigation(), None);
    }

    #[test]
    fn test_empty_tab_list_falls_back() {
        let config = Config {
            tabs: Vec::new(),
            ..Config::default()
        };
        let bar = TabBar::new(&config, None);
        assert_eq!(bar.wheel.tab_count(), 5);
        assert_eq!(bar.current_route(), Route::new("/ai-chat"));
    }

    #[test]
    fn test_frame_clock_drives_the_wheel() {
        let mut bar = bar();
        assert!(bar.wheel.sync_from_location(&Route::new("/map")));

        // first frame only records the clock
        let now = 1_000_000;
        assert_eq!(bar.frame(now), TickOutcome::Animating);
        assert_eq!(bar.wheel.angle(), 0.0);

        let (outcomes, now) = run_frames(&mut bar, now + FRAME_US);
        assert!(matches!(outcomes.last(), Some(TickOutcome::Settled(_))));
        assert_eq!(bar.current_route(), Route::new("/map"));
        assert_eq!(bar.frame(now + 5_000_000), TickOutcome::Idle);
    }

    #[test]
    fn test_ticker_only_needed_while_moving() {
        let mut bar = bar();
        assert!(!bar.needs_ticker());

        assert!(bar.wheel.select_tab(0));
        assert!(bar.needs_ticker());

        let (outcomes, now) = run_frames(&mut bar, 0);
        assert!(!bar.needs_ticker());
        assert!(outcomes.len() < 600);
        assert!(outcomes.iter().any(|o| matches!(o, TickOutcome::Settled(_))));
        assert_eq!(bar.wheel.press_scale(0), 1.0);

        // an idle bar stays idle and asks for nothing
        assert_eq!(bar.frame(now), TickOutcome::Idle);
        assert!(!bar.needs_ticker());

        // a new transition asks for the ticker again
        assert!(bar.wheel.sync_from_location(&Route::new("/map")));
        assert!(bar.needs_ticker());
    }

    #[test]
    fn test_resize_updates_layout_width() {
        let mut bar = bar();
        bar.resize(800.0);
        assert_eq!(bar.wheel.layout().width, 800.0);
        assert_eq!(TabBar::anchor(bar.wheel.layout(), 110.0).x, 400.0);
    }
}
