//
//  baruwa-cli
//  api/user/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User accounts and the resources hanging off them.
//!
//! # Overview
//!
//! - [`User`] / [`UserForm`]: account records under `users`
//! - [`aliases`]: alternative addresses under `aliasaddresses`
//! - [`password`]: password changes under `users/chpw`
//!
//! # Example
//!
//! ```rust,no_run
//! use baruwa_cli::api::BaruwaClient;
//! use baruwa_cli::api::user::UserForm;
//!
//! # async fn example(client: BaruwaClient) -> Result<(), baruwa_cli::api::common::ApiError> {
//! let form = UserForm {
//!     username: Some("andrew".to_string()),
//!     email: Some("andrew@example.com".to_string()),
//!     password1: Some("s3cr3t".to_string()),
//!     password2: Some("s3cr3t".to_string()),
//!     domains: vec![2],
//!     ..Default::default()
//! };
//! let user = client.create_user(&form).await?;
//! println!("created user {}", user.id);
//! # Ok(())
//! # }
//! ```

pub mod aliases;
pub mod password;

pub use aliases::AliasAddress;
pub use password::PasswordForm;

use serde::{Deserialize, Serialize};

use super::common::{ensure_id, messages, required, ApiError, BaruwaTime, ListOptions, ListResponse, LocalFloat64, NamedRef};
use super::form::{Form, ToForm};
use super::BaruwaClient;

/// A Baruwa user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub timezone: String,
    /// 1 = administrator, 2 = domain administrator, 3 = user.
    pub account_type: i64,
    pub active: bool,
    pub send_report: bool,
    pub spam_checks: bool,
    pub low_score: LocalFloat64,
    pub high_score: LocalFloat64,
    pub block_macros: bool,
    pub last_login: BaruwaTime,
    pub domains: Vec<NamedRef>,
    pub organizations: Vec<NamedRef>,
}

/// Fields sent when creating or updating a user.
///
/// `None` fields are left out of the request. For flags that reads as
/// false on the server, so updates start from [`UserForm::from_user`].
/// `id` selects the user on update and is never sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub id: i64,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub password1: Option<String>,
    pub password2: Option<String>,
    pub email: Option<String>,
    pub timezone: Option<String>,
    pub account_type: Option<i64>,
    pub active: Option<bool>,
    pub send_report: Option<bool>,
    pub spam_checks: Option<bool>,
    pub low_score: Option<LocalFloat64>,
    pub high_score: Option<LocalFloat64>,
    pub block_macros: Option<bool>,
    pub domains: Vec<i64>,
    pub organizations: Vec<i64>,
}

impl UserForm {
    /// Starts an update form for an existing user, carrying over every
    /// stored field.
    ///
    /// The server reads a missing checkbox as false, so the boolean
    /// settings are always sent with their current values.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: Some(user.username.clone()),
            firstname: Some(user.firstname.clone()),
            lastname: Some(user.lastname.clone()),
            email: Some(user.email.clone()),
            timezone: Some(user.timezone.clone()),
            account_type: Some(user.account_type),
            active: Some(user.active),
            send_report: Some(user.send_report),
            spam_checks: Some(user.spam_checks),
            low_score: Some(user.low_score),
            high_score: Some(user.high_score),
            block_macros: Some(user.block_macros),
            domains: user.domains.iter().map(|d| d.id).collect(),
            organizations: user.organizations.iter().map(|o| o.id).collect(),
            ..Default::default()
        }
    }
}

impl ToForm for UserForm {
    fn to_form(&self) -> Form {
        Form::new()
            .opt_text("username", self.username.as_deref())
            .opt_text("firstname", self.firstname.as_deref())
            .opt_text("lastname", self.lastname.as_deref())
            .opt_text("password1", self.password1.as_deref())
            .opt_text("password2", self.password2.as_deref())
            .opt_text("email", self.email.as_deref())
            .opt_text("timezone", self.timezone.as_deref())
            .opt_int("account_type", self.account_type)
            .opt_flag("active", self.active)
            .opt_flag("send_report", self.send_report)
            .opt_flag("spam_checks", self.spam_checks)
            .opt_score("low_score", self.low_score)
            .opt_score("high_score", self.high_score)
            .opt_flag("block_macros", self.block_macros)
            .ids("domains", &self.domains)
            .ids("organizations", &self.organizations)
    }
}

impl BaruwaClient {
    /// Lists user accounts, one page at a time.
    pub async fn get_users(&self, opts: Option<&ListOptions>) -> Result<ListResponse<User>, ApiError> {
        self.get("users", opts).await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User, ApiError> {
        ensure_id(user_id, messages::USER_ID)?;
        self.get(&format!("users/{user_id}"), None).await
    }

    pub async fn create_user<'a>(&self, form: impl Into<Option<&'a UserForm>>) -> Result<User, ApiError> {
        let form = required(form, messages::USER_PARAM)?;
        self.post("users", &form.to_form()).await
    }

    pub async fn update_user<'a>(&self, form: impl Into<Option<&'a UserForm>>) -> Result<User, ApiError> {
        let form = required(form, messages::USER_PARAM)?;
        ensure_id(form.id, messages::USER_SID)?;
        self.put(&format!("users/{}", form.id), &form.to_form()).await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        ensure_id(user_id, messages::USER_ID)?;
        self.delete(&format!("users/{user_id}"), None).await
    }
}
