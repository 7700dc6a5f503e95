pub mod login_user;
pub mod register_user;

pub use login_user::LoginHandler;
pub use register_user::RegisterHandler;
