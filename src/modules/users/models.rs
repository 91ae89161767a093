use serde::Serialize;
use uuid::Uuid;

/// Body of POST /users/register
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

impl NewUser {
    /// John Doe with a unique email so repeated runs do not collide
    pub fn generate() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: format!("john.doe.{}@badwolf.com", Uuid::new_v4()),
            password: "SecurePassword123!".to_string(),
            phone: "+1234567890".to_string(),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Body of POST /users/login
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Credentials no backend should accept
    pub fn unknown() -> Self {
        Self {
            email: "nonexistent@example.com".to_string(),
            password: "wrongpassword".to_string(),
        }
    }
}
