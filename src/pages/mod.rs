//! Route components, one module per page.

pub mod community;
pub mod community_form;
pub mod compose;
pub mod explore;
pub mod landing;
pub mod login;
pub mod post;
pub mod profile;
pub mod register;
pub mod reset_password;
