//! DTOs for users_sea adapter.

#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: Option<String>,
}

impl UserCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
