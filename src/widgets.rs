use eframe::egui;
use egui::{Color32, CursorIcon, Response, RichText, Stroke, Ui, Vec2};

use crate::account::{NoticeKind, Screen};

const BUTTON_FILL: Color32 = Color32::from_rgb(0x00, 0x40, 0x85);
const BUTTON_HOVER_FILL: Color32 = Color32::from_rgb(0x00, 0x27, 0x52);
const BUTTON_SIZE: Vec2 = Vec2::new(120.0, 44.0);
const HOVER_GROW: f32 = 3.0;
const HOVER_SECS: f32 = 0.18;

pub const LABEL_COLOR_LOGIN: Color32 = Color32::from_rgb(0xa0, 0xae, 0xc0);
pub const LABEL_COLOR_SIGN_UP: Color32 = Color32::from_rgb(0x88, 0xc0, 0xd0);

pub fn apply_theme(ctx: &egui::Context, screen: Screen) {
    let (panel, field, text) = match screen {
        Screen::Login => (
            Color32::from_rgb(0x1f, 0x29, 0x37),
            Color32::from_rgb(0x2e, 0x34, 0x40),
            Color32::from_rgb(0xe0, 0xe6, 0xf0),
        ),
        Screen::SignUp => (
            Color32::from_rgb(0x2e, 0x34, 0x40),
            Color32::from_rgb(0x3b, 0x42, 0x52),
            Color32::from_rgb(0xd8, 0xde, 0xe9),
        ),
    };
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = panel;
    visuals.window_fill = Color32::from_rgb(0x3b, 0x42, 0x52);
    visuals.extreme_bg_color = field;
    visuals.override_text_color = Some(text);
    visuals.selection.bg_fill = Color32::from_rgb(0x5e, 0x81, 0xac);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.5, Color32::from_rgb(0x4c, 0x56, 0x6a));
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, Color32::from_rgb(0x81, 0xa1, 0xc1));
    visuals.widgets.active.bg_stroke = Stroke::new(1.5, Color32::from_rgb(0x81, 0xa1, 0xc1));
    ctx.set_visuals(visuals);
}

pub fn notice_color(kind: NoticeKind) -> Color32 {
    match kind {
        NoticeKind::Info => Color32::from_rgb(0x88, 0xc0, 0xd0),
        NoticeKind::Warning => Color32::from_rgb(0xeb, 0xcb, 0x8b),
        NoticeKind::Error => Color32::from_rgb(0xbf, 0x61, 0x6a),
    }
}

/// A filled button that eases outward on hover and back on leave.
pub fn animated_button(ui: &mut Ui, text: &str) -> Response {
    let id = ui.make_persistent_id(("animated_button", text));
    let hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);
    let linear = ui.ctx().animate_bool_with_time(id.with("anim"), hovered, HOVER_SECS);
    let t = ease_out_quad(linear);

    let grow = HOVER_GROW * t;
    let button = egui::Button::new(RichText::new(text).size(16.0).strong().color(Color32::WHITE))
        .fill(lerp_color(BUTTON_FILL, BUTTON_HOVER_FILL, t))
        .stroke(Stroke::NONE)
        .rounding(6.0)
        .min_size(BUTTON_SIZE + Vec2::splat(2.0 * grow));

    let response = ui.add(button).on_hover_cursor(CursorIcon::PointingHand);
    ui.ctx().data_mut(|d| d.insert_temp(id, response.hovered()));
    response
}

fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let channel = |a: u8, b: u8| egui::lerp(a as f32..=b as f32, t).round() as u8;
    Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}
