mod complete_profile;
mod google_oauth;
mod login_user;
mod refresh_token;
mod register_user;

pub use complete_profile::complete_profile_handler;
pub use google_oauth::{google_callback_handler, google_login_handler};
pub use login_user::login_user_handler;
pub use refresh_token::refresh_token_handler;
pub use register_user::{register_user_handler, RegisterUserRequest, RegisteredUser};

#[doc(hidden)]
pub use register_user::__path_register_user_handler;
#[doc(hidden)]
pub use login_user::__path_login_user_handler;
#[doc(hidden)]
pub use refresh_token::__path_refresh_token_handler;
#[doc(hidden)]
pub use complete_profile::__path_complete_profile_handler;
#[doc(hidden)]
pub use google_oauth::{__path_google_callback_handler, __path_google_login_handler};
