#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    SignUp,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "CEO Platform - Log In",
            Screen::SignUp => "CEO Platform - Sign Up",
        }
    }

    /// Fixed inner size of the native window for this screen.
    pub fn window_size(self) -> [f32; 2] {
        match self {
            Screen::Login => [500.0, 570.0],
            Screen::SignUp => [480.0, 560.0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A modal message shown on top of the current screen until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: &str, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, title: title.to_string(), body: body.into() }
    }

    pub fn warning(title: &str, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, title: title.to_string(), body: body.into() }
    }

    pub fn error(title: &str, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.to_string(), body: body.into() }
    }

    pub fn help() -> Self {
        Self::info(
            "Help",
            "Developed by ENG Taha and ENG abdulqader\nFor CEO platform support, contact: \nHave a productive day!",
        )
    }
}
