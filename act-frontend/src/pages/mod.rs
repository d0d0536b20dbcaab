mod home;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
}

impl Page {
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
        }
    }
}

pub use self::home::*;
