use super::model::TabBar;
use super::{
    ACTIVE_BG_ALPHA, BUTTON_RADIUS, CORNER_RADIUS, ICON_SIZE, INDICATOR_RADIUS, LABEL_SIZE,
};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::{FRAC_PI_2, PI};
use tabwheel::{ArcLayout, Point, Tab, TabTransform};

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn rounded_rect(cr: &Context, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0);
    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -FRAC_PI_2, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, FRAC_PI_2);
    cr.arc(x + r, y + h - r, r, FRAC_PI_2, PI);
    cr.arc(x + r, y + r, r, PI, 3.0 * FRAC_PI_2);
    cr.close_path();
}

struct TabRenderer<'a> {
    tab: &'a Tab,
    icon: Option<&'a Pixbuf>,
    transform: TabTransform,
    press_scale: f64,
    active: bool,
    layout: &'a ArcLayout,
}

impl<'a> TabRenderer<'a> {
    fn draw(&self, cr: &Context, anchor: Point, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let t = &self.transform;
        let scale = t.scale * self.press_scale;

        cr.save()?;
        cr.translate(anchor.x + t.translate_x, anchor.y + t.translate_y);
        cr.rotate(t.rotation);
        cr.scale(scale, scale);

        // paint the whole button at once so overlapping parts fade together
        cr.push_group();
        self.draw_button(cr, colors)?;
        self.draw_icon(cr, colors)?;
        self.draw_label(cr, colors)?;
        cr.pop_group_to_source()?;
        cr.paint_with_alpha(t.opacity)?;

        cr.restore()
    }

    fn color(&self, colors: &ThemeColors) -> Srgba<f64> {
        if self.active {
            colors.active
        } else {
            colors.inactive
        }
    }

    fn draw_button(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        if !self.active {
            return Ok(());
        }
        let (w, h) = (self.layout.tab_width, self.layout.tab_height);
        let (r, g, b, _) = colors.active.into_components();
        cr.set_source_rgba(r, g, b, ACTIVE_BG_ALPHA);
        rounded_rect(cr, -w / 2.0, -h / 2.0, w, h, BUTTON_RADIUS);
        cr.fill()
    }

    fn draw_icon(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let size = ICON_SIZE as f64;
        let top = -self.layout.tab_height / 2.0 + 6.0;

        match self.icon {
            Some(pixbuf) => {
                cr.save()?;
                cr.translate(-pixbuf.width() as f64 / 2.0, top);
                cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
                cr.paint()?;
                cr.restore()?;
            }
            None => {
                // no icon: a ring keeps the button shape recognisable
                set_color(cr, self.color(colors));
                cr.set_line_width(2.0);
                cr.new_sub_path();
                cr.arc(0.0, top + size / 2.0, size / 2.0 - 2.0, 0.0, 2.0 * PI);
                cr.stroke()?;
            }
        }

        if self.active {
            set_color(cr, colors.active);
            cr.new_sub_path();
            cr.arc(0.0, top + size + 4.0, INDICATOR_RADIUS, 0.0, 2.0 * PI);
            cr.fill()?;
        }
        Ok(())
    }

    fn draw_label(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let weight = if self.active {
            cairo::FontWeight::Bold
        } else {
            cairo::FontWeight::Normal
        };
        set_color(cr, self.color(colors));
        cr.select_font_face("Sans", cairo::FontSlant::Normal, weight);
        cr.set_font_size(LABEL_SIZE);

        let text = self.tab.name.as_str();
        if let Ok(ext) = cr.text_extents(text) {
            cr.move_to(-ext.width() / 2.0 - ext.x_bearing(), self.layout.tab_height / 2.0 - 4.0);
            cr.show_text(text)?;
        }
        Ok(())
    }
}

fn draw_background(
    cr: &Context,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    set_color(cr, colors.background);
    // only the top corners are rounded, the bottom ones run off the edge
    rounded_rect(cr, 0.0, 0.0, width, height + CORNER_RADIUS, CORNER_RADIUS);
    cr.fill()?;

    set_color(cr, colors.arc);
    cr.save()?;
    cr.translate(width / 2.0, 0.0);
    cr.scale(1.2 * width / 2.0, 80.0);
    cr.arc(0.0, 0.0, 1.0, 0.0, PI);
    cr.restore()?;
    cr.fill()
}

pub fn draw(
    cr: &Context,
    bar: &TabBar,
    colors: &ThemeColors,
    height: f64,
) -> Result<(), cairo::Error> {
    let wheel = &bar.wheel;
    let layout = wheel.layout();
    draw_background(cr, colors, layout.width, height)?;

    let anchor = TabBar::anchor(layout, height);
    for index in wheel.paint_order() {
        let Some(transform) = wheel.tab_transform(index) else {
            continue;
        };
        TabRenderer {
            tab: &wheel.tabs()[index],
            icon: bar.icons.get(index).and_then(Option::as_ref),
            transform,
            press_scale: wheel.press_scale(index),
            active: index == wheel.selected(),
            layout,
        }
        .draw(cr, anchor, colors)?;
    }
    Ok(())
}
