mod activity;
mod navbar;
mod notice;
mod signup_form;

pub use self::{activity::*, navbar::*, notice::*, signup_form::*};
