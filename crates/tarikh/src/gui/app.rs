use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::bar::{self, BAR_HEIGHT, TabBar};
use crate::gui::pages::{self, Pages};
use crate::gui::theme::{self, ThemeColors};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tabwheel::icon;
use tabwheel::{Point, Route, TickOutcome};

pub struct AppModel {
    pub bar: Rc<RefCell<TabBar>>,
    pub visible: bool,
    pub drawing_area: gtk::DrawingArea,
    pub pages: Pages,
    /// Set while a frame clock callback is installed.
    ticking: Rc<Cell<bool>>,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    Press(Point),
    Goto(Route),
    Select(usize),
    /// Switch to the chat and ask the guide.
    Ask(String),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::Goto(route) => AppMsg::Goto(route),
            AppEvent::Select(index) => AppMsg::Select(index),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn show_selected_page(&self) {
        let route = self.bar.borrow().current_route();
        self.pages.show(&route);
    }

    /// Called after anything that may have started a transition.
    fn wheel_changed(&self) {
        if let Some(route) = self.bar.borrow_mut().take_navigation() {
            log::info!("Showing '{}'", route);
            self.pages.show(&route);
        }
        self.drawing_area.queue_draw();
        self.ensure_ticker();
    }

    /// Installs the frame clock callback unless one is running or the bar is
    /// at rest. The callback removes itself once the bar settles.
    fn ensure_ticker(&self) {
        if self.ticking.get() || !self.bar.borrow().needs_ticker() {
            return;
        }
        self.ticking.set(true);

        let bar = self.bar.clone();
        let ticking = self.ticking.clone();
        self.drawing_area.add_tick_callback(move |drawing_area, clock| {
            let mut bar = bar.borrow_mut();
            match bar.frame(clock.frame_time()) {
                TickOutcome::Idle => {}
                TickOutcome::Animating => drawing_area.queue_draw(),
                TickOutcome::Settled(id) => {
                    log::debug!("Transition {} settled", id);
                    drawing_area.queue_draw();
                }
            }

            if bar.needs_ticker() {
                glib::ControlFlow::Continue
            } else {
                ticking.set(false);
                glib::ControlFlow::Break
            }
        });
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, Option<Route>, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Tarikh"),
            set_default_width: 390,
            set_default_height: 760,
            #[watch]
            set_visible: model.visible,
            add_css_class: "tarikh-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Hide);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "content"]
            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_content_height: BAR_HEIGHT,
                    add_css_class: "tarikh-tabbar",

                    add_controller = gtk::GestureClick {
                        connect_released[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::Press(Point::new(x, y)));
                        }
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, location, rx) = init;

        theme::load_css();

        let bar = Rc::new(RefCell::new(TabBar::new(&config, location.as_ref())));

        let ask_sender = sender.clone();
        let pages = Pages::new(move |topic| ask_sender.input(AppMsg::Ask(topic.question())));
        pages.fill(bar.borrow().wheel.tabs());

        let model = AppModel {
            bar: bar.clone(),
            visible: true,
            drawing_area: gtk::DrawingArea::default(),
            pages,
            ticking: Rc::new(Cell::new(false)),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        widgets.content.prepend(&model.pages.stack);
        model.show_selected_page();

        let bar_draw = bar.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = bar::draw(cr, &bar_draw.borrow(), &colors, height as f64) {
                    log::error!("Drawing error: {}", e);
                }
            });

        widgets
            .drawing_area
            .connect_resize(move |_, width, _| bar.borrow_mut().resize(width as f64));

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => {
                self.visible = true;
            }
            AppMsg::Hide => {
                self.visible = false;
            }
            AppMsg::Press(point) => {
                let height = self.drawing_area.height() as f64;
                if self.bar.borrow_mut().press(point, height) {
                    self.wheel_changed();
                }
            }
            AppMsg::Select(index) => {
                if self.bar.borrow_mut().wheel.select_tab(index) {
                    self.wheel_changed();
                }
            }
            AppMsg::Goto(route) => {
                // no navigation request comes back for this, so switch the page here
                if self.bar.borrow_mut().wheel.sync_from_location(&route) {
                    self.show_selected_page();
                    self.wheel_changed();
                }
            }
            AppMsg::Ask(question) => {
                let chat_route = pages::chat_route(self.bar.borrow().wheel.tabs()).cloned();
                match chat_route {
                    Some(route) => {
                        if self.bar.borrow_mut().wheel.sync_from_location(&route) {
                            self.wheel_changed();
                        }
                        self.pages.show(&route);
                        self.pages.chat.ask(&question);
                    }
                    None => log::warn!("No chat tab to ask '{}'", question),
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    icon::clear_cache();
                    let location = self.bar.borrow().current_route();
                    let mut bar = TabBar::new(&new_config, Some(&location));
                    bar.resize(self.drawing_area.width() as f64);
                    *self.bar.borrow_mut() = bar;

                    self.pages.fill(self.bar.borrow().wheel.tabs());
                    self.show_selected_page();
                    self.wheel_changed();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
