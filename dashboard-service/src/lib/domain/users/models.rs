use auth::Authority;

/// Command to register a new user.
///
/// Authorities are a fixed assignment made at creation time; they are never
/// amended from a request afterwards.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub authorities: Vec<Authority>,
}
