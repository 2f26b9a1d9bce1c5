//! Routed Pages

mod admin;
mod home;
mod login;
mod register;

pub use admin::AdminPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
