#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Whether the viewer holds an authenticated session.
///
/// Determines which view is visible and whether incident polling runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Which form the login view currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Client-side registration checks, short-circuiting on the first failure.
///
/// These run before any network call; the messages are rendered verbatim
/// next to the registration form.
pub fn validate_registration(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}
