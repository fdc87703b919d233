use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub active: Srgba<f64>,
    pub inactive: Srgba<f64>,
    pub background: Srgba<f64>,
    pub arc: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            active: Self::lookup_color(
                context,
                "tarikh_accent_color",
                Srgba::new(0.996, 0.808, 0.102, 1.0),
                None,
            ),
            inactive: Self::lookup_color(
                context,
                "theme_unfocused_fg_color",
                Srgba::new(0.4, 0.4, 0.4, 1.0),
                Some(0.8),
            ),
            background: Self::lookup_color(
                context,
                "theme_base_color",
                Srgba::new(0.98, 0.98, 0.98, 0.92),
                Some(0.92),
            ),
            arc: Srgba::new(1.0, 1.0, 1.0, 0.05),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color tarikh_accent_color #fece1a;

.tarikh-tabbar {
    background: none;
    background-color: transparent;
}

.tarikh-page {
    font-size: 22px;
    font-weight: 600;
}

.tarikh-chat, .tarikh-timeline, .tarikh-topics {
    padding: 12px;
}

.tarikh-bubble {
    padding: 8px 12px;
    border-radius: 14px;
}

.tarikh-bubble-you {
    background-color: alpha(@tarikh_accent_color, 0.25);
}

.tarikh-bubble-guide {
    background-color: alpha(@theme_fg_color, 0.06);
}

.tarikh-event-year {
    color: @tarikh_accent_color;
    font-weight: 600;
}

.tarikh-event-title, .tarikh-topic-title {
    font-size: 16px;
    font-weight: 600;
}

.tarikh-event-location, .tarikh-topic-description {
    opacity: 0.7;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
