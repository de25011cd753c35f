//
//  baruwa-cli
//  api/user/password.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::common::{ensure_id, messages, required, ApiError};
use crate::api::form::{Form, ToForm};
use crate::api::BaruwaClient;

/// A new password, entered twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub password1: String,
    pub password2: String,
}

impl ToForm for PasswordForm {
    fn to_form(&self) -> Form {
        Form::new()
            .text("password1", self.password1.as_str())
            .text("password2", self.password2.as_str())
    }
}

impl BaruwaClient {
    /// Sets a new password for `user_id`. The server answers without a body.
    pub async fn change_user_password<'a>(
        &self,
        user_id: i64,
        form: impl Into<Option<&'a PasswordForm>>,
    ) -> Result<(), ApiError> {
        let form = required(form, messages::FORM_PARAM)?;
        ensure_id(user_id, messages::USER_ID)?;
        self.post_unit(&format!("users/chpw/{user_id}"), &form.to_form()).await
    }
}
