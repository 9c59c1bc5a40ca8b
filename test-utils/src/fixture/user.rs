//! Fixture for user test data.

use entity::user;

/// Default test user ID.
pub const DEFAULT_ID: i32 = 1;

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "luke@tatooine.net";

/// Default stored password. Serialized output must never contain it.
pub const DEFAULT_PASSWORD: &str = "use-the-force";

/// Creates a user entity model with default values.
///
/// Returns an in-memory entity without database insertion.
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a customizable user entity builder.
///
/// # Example
/// ```rust,ignore
/// let inactive = fixture::user::entity_builder().is_active(false).build();
/// ```
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for user entity models.
pub struct UserEntityBuilder {
    id: i32,
    email: String,
    password: String,
    is_active: bool,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            is_active: true,
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds the entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            email: self.email,
            password: self.password,
            is_active: self.is_active,
        }
    }
}
