//! The tab wheel state machine.
//!
//! [`RadialTabSelector`] owns the tab list, the selection and a spring that
//! carries the unwrapped wheel angle. Selections only ever retarget the
//! spring, and rendering is a pure projection of the current angle, so the
//! host just has to call [`RadialTabSelector::tick`] once per frame and draw
//! [`RadialTabSelector::transforms`].

use crate::angle::{self, Spin, TiePolicy};
use crate::feedback::PressPulse;
use crate::hit::{self, Point};
use crate::spring::{Spring, SpringParams};
use crate::tab::{self, Route, Tab};
use crate::transform::{self, ArcLayout, TabTransform};
use derive_more::{Display, From, Into};
use std::time::Duration;
use thiserror::Error;

/// Receives the navigation requests a tab press produces.
pub trait Navigator {
    fn navigate(&mut self, route: &Route);
}

/// Discards every request.
impl Navigator for () {
    fn navigate(&mut self, _route: &Route) {}
}

/// Records requests in order.
impl Navigator for Vec<Route> {
    fn navigate(&mut self, route: &Route) {
        self.push(route.clone());
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WheelError {
    #[error("A tab wheel needs at least one tab")]
    NoTabs,
}

/// Identifies the newest transition. Retargeting bumps it, which makes any
/// settle report for an older transition impossible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
pub struct TransitionId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing moved.
    Idle,
    Animating,
    /// The wheel came to rest at the end of this transition.
    Settled(TransitionId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelState {
    pub selected: usize,
    pub previous: usize,
    pub last_spin: Option<Spin>,
    pub transition: TransitionId,
    spring: Spring,
}

impl WheelState {
    fn settled_at(index: usize, count: usize, params: SpringParams) -> Self {
        Self {
            selected: index,
            previous: index,
            last_spin: None,
            transition: TransitionId::default(),
            spring: Spring::at_rest(angle::compute_target_angle(index, count), params),
        }
    }

    /// Current unwrapped wheel angle in radians.
    pub fn angle(&self) -> f64 {
        self.spring.value()
    }

    pub fn target_angle(&self) -> f64 {
        self.spring.target()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }
}

pub struct RadialTabSelector<N: Navigator> {
    tabs: Vec<Tab>,
    state: WheelState,
    layout: ArcLayout,
    tie_policy: TiePolicy,
    pulses: Vec<Option<PressPulse>>,
    navigator: N,
}

impl<N: Navigator> RadialTabSelector<N> {
    /// Builds a settled wheel. The initial selection is the tab matching
    /// `location`, or the middle tab when there is none.
    pub fn new(tabs: Vec<Tab>, location: Option<&Route>, navigator: N) -> Result<Self, WheelError> {
        if tabs.is_empty() {
            return Err(WheelError::NoTabs);
        }
        Ok(Self::from_non_empty(tabs, location, navigator))
    }

    /// Same as [`RadialTabSelector::new`] over the built-in tabs, which are
    /// never empty.
    pub fn with_default_tabs(location: Option<&Route>, navigator: N) -> Self {
        Self::from_non_empty(tab::default_tabs(), location, navigator)
    }

    fn from_non_empty(tabs: Vec<Tab>, location: Option<&Route>, navigator: N) -> Self {
        let count = tabs.len();
        let selected = location
            .and_then(|route| tab::find_tab(&tabs, route))
            .unwrap_or(count / 2);

        Self {
            state: WheelState::settled_at(selected, count, SpringParams::default()),
            pulses: vec![None; count],
            tabs,
            layout: ArcLayout::default(),
            tie_policy: TiePolicy::default(),
            navigator,
        }
    }

    pub fn with_layout(mut self, layout: ArcLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_spring(mut self, params: SpringParams) -> Self {
        self.state.spring.set_params(params);
        self
    }

    pub fn with_tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = policy;
        self
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn selected(&self) -> usize {
        self.state.selected
    }

    pub fn selected_tab(&self) -> &Tab {
        &self.tabs[self.state.selected]
    }

    pub fn previous(&self) -> usize {
        self.state.previous
    }

    pub fn angle(&self) -> f64 {
        self.state.angle()
    }

    pub fn transition_id(&self) -> TransitionId {
        self.state.transition
    }

    pub fn is_settled(&self) -> bool {
        self.state.is_settled() && self.pulses.iter().all(Option::is_none)
    }

    pub fn layout(&self) -> &ArcLayout {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: ArcLayout) {
        self.layout = layout;
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn compute_target_angle(&self, index: usize) -> f64 {
        angle::compute_target_angle(index, self.tab_count())
    }

    /// Final unwrapped angle for a transition from `prev` to `new`, measured
    /// from wherever the wheel is right now (possibly mid-flight).
    pub fn choose_rotation_path(&self, prev: usize, new: usize) -> f64 {
        let current = self.angle();
        if prev == new {
            return current;
        }

        angle::shortest_path(
            current,
            self.compute_target_angle(new),
            self.state.last_spin,
            self.tie_policy,
        )
    }

    /// Handles a press on tab `index`. Returns false when the press was
    /// ignored (out of range or already selected).
    pub fn select_tab(&mut self, index: usize) -> bool {
        if !self.begin_transition(index) {
            return false;
        }

        self.pulses[index] = Some(PressPulse::new());
        let route = self.tabs[index].route.clone();
        log::info!("Navigating to '{}' ({})", route, self.tabs[index].name);
        self.navigator.navigate(&route);
        true
    }

    /// Follows a navigation that happened elsewhere. Rotates like a press
    /// but never emits a navigation request.
    pub fn sync_from_location(&mut self, location: &Route) -> bool {
        match tab::find_tab(&self.tabs, location) {
            Some(index) => self.begin_transition(index),
            None => {
                log::debug!("No tab matches location '{}'", location);
                false
            }
        }
    }

    fn begin_transition(&mut self, index: usize) -> bool {
        if index >= self.tab_count() {
            log::debug!(
                "Ignoring selection of tab {} (only {} tabs)",
                index,
                self.tab_count()
            );
            return false;
        }
        if index == self.state.selected {
            return false;
        }

        let prev = self.state.selected;
        let target = self.choose_rotation_path(prev, index);

        if let Some(spin) = Spin::of(target - self.angle()) {
            self.state.last_spin = Some(spin);
        }
        self.state.previous = prev;
        self.state.selected = index;
        self.state.spring.set_target(target);
        self.state.transition = TransitionId(u64::from(self.state.transition) + 1);
        true
    }

    /// Advances the wheel and any press pulses by one frame.
    pub fn tick(&mut self, dt: Duration) -> TickOutcome {
        let mut pulsing = false;
        for slot in &mut self.pulses {
            if let Some(pulse) = slot {
                pulsing = true;
                if !pulse.advance(dt) {
                    *slot = None;
                }
            }
        }

        if self.state.spring.is_settled() {
            return if pulsing {
                TickOutcome::Animating
            } else {
                TickOutcome::Idle
            };
        }

        self.state.spring.tick(dt);

        if self.state.spring.is_settled() {
            TickOutcome::Settled(self.state.transition)
        } else {
            TickOutcome::Animating
        }
    }

    pub fn tab_transform(&self, index: usize) -> Option<TabTransform> {
        (index < self.tab_count()).then(|| {
            transform::project(
                index,
                self.angle(),
                self.state.selected,
                self.tab_count(),
                &self.layout,
            )
        })
    }

    pub fn transforms(&self) -> Vec<TabTransform> {
        (0..self.tab_count())
            .filter_map(|i| self.tab_transform(i))
            .collect()
    }

    /// Tab indices sorted back to front.
    pub fn paint_order(&self) -> Vec<usize> {
        let count = self.tab_count();
        let mut order: Vec<usize> = (0..count).collect();
        order.sort_by_key(|&i| transform::z_order(i, self.state.selected, count));
        order
    }

    /// Press feedback factor, applied on top of the wheel scale.
    pub fn press_scale(&self, index: usize) -> f64 {
        self.pulses
            .get(index)
            .copied()
            .flatten()
            .map_or(1.0, |pulse| pulse.scale())
    }

    pub fn hit_test(&self, point: Point) -> Option<usize> {
        hit::hit_test(&self.transforms(), &self.layout, point)
    }
}
