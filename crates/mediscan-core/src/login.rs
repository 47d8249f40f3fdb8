//! Login view state.
//!
//! The form has no validation and no backend: submitting it, with any field
//! contents, latches the session on the shell it is handed.

use serde::Serialize;

use crate::shell::Shell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoginField {
    Name,
    Email,
    Password,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginForm {
    mode: LoginMode,
    name: String,
    email: String,
    #[serde(skip)]
    password: String,
}

impl LoginForm {
    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) -> LoginMode {
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::SignUp,
            LoginMode::SignUp => LoginMode::SignIn,
        };
        self.mode
    }

    /// Fields shown in the current mode, top to bottom.
    pub fn fields(&self) -> &'static [LoginField] {
        match self.mode {
            LoginMode::SignIn => &[LoginField::Email, LoginField::Password],
            LoginMode::SignUp => &[LoginField::Name, LoginField::Email, LoginField::Password],
        }
    }

    pub fn field(&self, field: LoginField) -> &str {
        match field {
            LoginField::Name => &self.name,
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Name => self.name = value,
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            LoginMode::SignIn => "Welcome Back",
            LoginMode::SignUp => "Create Account",
        }
    }

    /// Latch the session. Returns true if this submit performed the login.
    pub fn submit(&self, shell: &mut Shell) -> bool {
        shell.login()
    }
}
