use eframe::egui;
use log::debug;

use crate::account::{Notice, Screen};
use crate::auth::{login, login_notice, register, sign_up_notice};
use crate::store::CredentialStore;
use crate::widgets::{
    animated_button, apply_theme, notice_color, LABEL_COLOR_LOGIN, LABEL_COLOR_SIGN_UP,
};

#[derive(Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Default)]
pub struct SignUpForm {
    pub username: String,
    pub password: String,
    pub confirm: String,
}

/// Owns the current screen, both forms and the pending notice.
pub struct AppState {
    pub screen: Screen,
    pub login: LoginForm,
    pub sign_up: SignUpForm,
    pub notice: Option<Notice>,
    store: Box<dyn CredentialStore>,
    applied_screen: Option<Screen>,
}

impl AppState {
    pub fn new(store: Box<dyn CredentialStore>) -> Self {
        Self {
            screen: Screen::Login,
            login: LoginForm::default(),
            sign_up: SignUpForm::default(),
            notice: None,
            store,
            applied_screen: None,
        }
    }

    pub fn open_sign_up(&mut self) {
        debug!("Switching to sign-up screen");
        self.sign_up = SignUpForm::default();
        self.screen = Screen::SignUp;
    }

    pub fn back_to_login(&mut self) {
        debug!("Switching to login screen");
        self.login = LoginForm::default();
        self.screen = Screen::Login;
    }

    pub fn submit_login(&mut self) {
        let outcome = login(self.store.as_ref(), &self.login.username, &self.login.password);
        self.notice = Some(login_notice(&self.login.username, &outcome));
    }

    pub fn submit_sign_up(&mut self) {
        let outcome = register(
            self.store.as_ref(),
            &self.sign_up.username,
            &self.sign_up.password,
            &self.sign_up.confirm,
        );
        self.notice = Some(sign_up_notice(&outcome));
        if outcome.is_ok() {
            self.sign_up = SignUpForm::default();
        }
    }

    pub fn show_help(&mut self) {
        self.notice = Some(Notice::help());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn sync_window(&mut self, ctx: &egui::Context) {
        if self.applied_screen == Some(self.screen) {
            return;
        }
        let [width, height] = self.screen.window_size();
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.screen.title().to_string()));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(width, height)));
        apply_theme(ctx, self.screen);
        self.applied_screen = Some(self.screen);
    }

    fn login_screen(&mut self, ui: &mut egui::Ui) {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("CEO Platform").size(28.0).strong());
        });
        ui.add_space(30.0);

        field_label(ui, "Username", LABEL_COLOR_LOGIN);
        ui.add(
            egui::TextEdit::singleline(&mut self.login.username)
                .hint_text("Enter your username")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(15.0);

        field_label(ui, "Password", LABEL_COLOR_LOGIN);
        let password = ui.add(
            egui::TextEdit::singleline(&mut self.login.password)
                .password(true)
                .hint_text("Enter your password")
                .desired_width(f32::INFINITY),
        );
        if submitted(ui, &password) {
            self.submit_login();
        }
        ui.add_space(25.0);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 20.0;
            if animated_button(ui, "Log In").clicked() {
                self.submit_login();
            }
            if animated_button(ui, "Sign Up").clicked() {
                self.open_sign_up();
            }
        });
        ui.add_space(15.0);

        ui.vertical_centered(|ui| {
            if animated_button(ui, "Help").clicked() {
                self.show_help();
            }
        });
    }

    fn sign_up_screen(&mut self, ui: &mut egui::Ui) {
        ui.add_space(40.0);

        field_label(ui, "New Username", LABEL_COLOR_SIGN_UP);
        ui.add(
            egui::TextEdit::singleline(&mut self.sign_up.username)
                .hint_text("Enter your username")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(20.0);

        field_label(ui, "New Password", LABEL_COLOR_SIGN_UP);
        ui.add(
            egui::TextEdit::singleline(&mut self.sign_up.password)
                .password(true)
                .hint_text("Enter password")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(20.0);

        field_label(ui, "Confirm Password", LABEL_COLOR_SIGN_UP);
        let confirm = ui.add(
            egui::TextEdit::singleline(&mut self.sign_up.confirm)
                .password(true)
                .hint_text("Re-enter password")
                .desired_width(f32::INFINITY),
        );
        if submitted(ui, &confirm) {
            self.submit_sign_up();
        }
        ui.add_space(25.0);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 20.0;
            if animated_button(ui, "Sign Up").clicked() {
                self.submit_sign_up();
            }
            if animated_button(ui, "Back to Login").clicked() {
                self.back_to_login();
            }
        });
    }
}

fn field_label(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(egui::RichText::new(text).size(14.0).strong().color(color));
}

fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_window(ctx);

        if let Some(notice) = self.notice.clone() {
            egui::Window::new(notice.title.as_str())
                .id(egui::Id::new("notice"))
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(egui::RichText::new(&notice.body).color(notice_color(notice.kind)));
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            self.dismiss_notice();
                        }
                    });
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(20.0))
            .show(ctx, |ui| {
                ui.add_enabled_ui(self.notice.is_none(), |ui| match self.screen {
                    Screen::Login => self.login_screen(ui),
                    Screen::SignUp => self.sign_up_screen(ui),
                });
            });
    }
}
