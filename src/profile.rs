//! The profile of the logged-in customer

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::traits::{SessionStorage, UserInterface};

/// Key of the session storage that holds the logged-in user
pub const USER_KEY: &str = "user";
/// Where users are sent when they are not logged in
pub const LOGIN_ROUTE: &str = "/login";
/// What users are told when they are not logged in
pub const LOGIN_REQUIRED_MESSAGE: &str = "Debes iniciar sesión para ver tu perfil";
/// Title of the page
pub const PROFILE_TITLE: &str = "Perfil del Usuario";


/// The user record a previous login stored in the session.
///
/// Missing (or `null`) fields are empty, unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionUser {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    /// National identifier
    #[serde(deserialize_with = "null_as_empty")]
    pub rut: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub birth_date: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SessionUser {
    /// Parse a record, as stored in the session
    pub fn from_json(text: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(text)?)
    }
}


/// A labelled, read-only field of the profile
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileField {
    pub label: &'static str,
    pub value: String,
}


#[derive(Clone, Debug, PartialEq)]
pub enum ProfileState {
    /// `load_profile` has not been called yet
    NotLoaded,
    /// There was no user in the session, the user has been sent to the login page
    Redirected,
    Loaded(SessionUser),
}


/// Displays the user stored in the session
#[derive(Debug)]
pub struct ProfileView {
    state: ProfileState,
}

impl ProfileView {
    pub fn new() -> Self {
        Self { state: ProfileState::NotLoaded }
    }

    pub fn state(&self) -> &ProfileState { &self.state }

    pub fn user(&self) -> Option<&SessionUser> {
        match &self.state {
            ProfileState::Loaded(user) => Some(user),
            _ => None,
        }
    }

    /// Read the user from the session.
    ///
    /// If there is none, the user is alerted and sent to the login page.
    /// A record that cannot be parsed is an error, and leaves this view untouched.
    pub fn load_profile<S, U>(&mut self, storage: &S, ui: &U) -> Result<(), Box<dyn Error>>
    where
        S: SessionStorage + ?Sized,
        U: UserInterface + ?Sized,
    {
        match storage.get_item(USER_KEY) {
            None => {
                log::info!("No user in the session, redirecting to {}", LOGIN_ROUTE);
                ui.alert(LOGIN_REQUIRED_MESSAGE);
                ui.navigate(LOGIN_ROUTE);
                self.state = ProfileState::Redirected;
            },
            Some(text) => {
                let user = SessionUser::from_json(&text)?;
                log::debug!("Displaying the profile of {}", user.name);
                self.state = ProfileState::Loaded(user);
            },
        }
        Ok(())
    }

    /// The fields to display. There are none unless a user has been loaded
    pub fn fields(&self) -> Vec<ProfileField> {
        let user = match self.user() {
            None => return Vec::new(),
            Some(user) => user,
        };

        vec![
            ProfileField { label: "Nombre", value: user.name.clone() },
            ProfileField { label: "Email", value: user.email.clone() },
            ProfileField { label: "RUT", value: user.rut.clone() },
            ProfileField { label: "Teléfono", value: user.phone.clone() },
            ProfileField { label: "Fecha de nacimiento", value: user.birth_date.clone() },
        ]
    }
}

impl Display for ProfileView {
    /// Renders nothing unless a user has been loaded
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.user().is_none() {
            return Ok(());
        }

        write!(f, "{}", PROFILE_TITLE)?;
        for field in self.fields() {
            write!(f, "\n{}: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

impl Default for ProfileView {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_session_user() {
        let user = SessionUser::from_json(r#"{"id": 4, "name": "Ana", "email": "a@x.com", "rut": "1-9", "phone": null, "birthDate": "1990-01-01", "admin": false}"#).unwrap();
        assert_eq!(user, SessionUser {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            rut: "1-9".to_string(),
            phone: String::new(),
            birth_date: "1990-01-01".to_string(),
        });

        let user = SessionUser::from_json(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(user.email, "");

        assert!(SessionUser::from_json("not json").is_err());
        assert!(SessionUser::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_no_fields_before_loading() {
        let view = ProfileView::new();
        assert_eq!(view.state(), &ProfileState::NotLoaded);
        assert!(view.fields().is_empty());
        assert_eq!(view.to_string(), "");
    }

    #[test]
    fn test_render_profile() {
        let view = ProfileView {
            state: ProfileState::Loaded(SessionUser::from_json(r#"{"name":"Ana","email":"a@x.com","rut":"1-9","phone":"+56911111111","birthDate":"1990-01-01"}"#).unwrap()),
        };
        assert_eq!(view.to_string(), "Perfil del Usuario\nNombre: Ana\nEmail: a@x.com\nRUT: 1-9\nTeléfono: +56911111111\nFecha de nacimiento: 1990-01-01");

        let redirected = ProfileView { state: ProfileState::Redirected };
        assert_eq!(redirected.to_string(), "");
    }
}
