pub mod bootstrap_admin;
pub mod complete_profile;
pub mod google_login;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;

#[cfg(test)]
pub(crate) mod test_doubles;
