//! User-facing message localization.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the wait duration in [`MessageCatalog::rate_limited`].
pub const SECONDS_PLACEHOLDER: &str = "{seconds}";

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// English.
    #[default]
    #[serde(rename = "en")]
    En,
    /// Brazilian Portuguese.
    #[serde(rename = "pt-BR")]
    PtBr,
}

/// Localization settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Language of notifications and labels.
    #[serde(default)]
    pub locale: Locale,
}

impl MessagesConfig {
    /// Built-in catalog for the configured locale.
    pub fn catalog(&self) -> MessageCatalog {
        MessageCatalog::for_locale(self.locale)
    }
}

/// Every string the console shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    /// Default fallback when a failure yields no usable message.
    pub unexpected_error: String,
    /// Rate-limit notice; contains [`SECONDS_PLACEHOLDER`].
    pub rate_limited: String,
    /// Shown when the server cannot be reached.
    pub connection_error: String,
    /// A required form field is empty.
    pub fill_all_fields: String,
    /// Username outside the accepted length range.
    pub username_length: String,
    /// Email does not look like an address.
    pub invalid_email: String,
    /// Profile saved.
    pub profile_updated: String,
    /// Fallback for a failed profile save.
    pub profile_update_failed: String,
    /// New password below the minimum length.
    pub password_too_short: String,
    /// New password and confirmation differ.
    pub passwords_mismatch: String,
    /// Password changed.
    pub password_changed: String,
    /// Fallback for a failed password change.
    pub password_change_failed: String,
    /// Placeholder while the current user is not known yet.
    pub loading_profile: String,
    /// Badge for an active account.
    pub account_active: String,
    /// Badge for an inactive account.
    pub account_inactive: String,
    /// Badge for administrators.
    pub administrator: String,
    /// Default confirm button of the delete dialog.
    pub delete_label: String,
    /// Default cancel button of the delete dialog.
    pub cancel_label: String,
    /// Confirm button text while a deletion is running.
    pub deleting_label: String,
}

impl MessageCatalog {
    /// Built-in catalog for a locale.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
            Locale::PtBr => Self::portuguese(),
        }
    }

    /// English catalog.
    pub fn english() -> Self {
        Self {
            unexpected_error: "An unexpected error occurred".into(),
            rate_limited: "Too many requests. Wait {seconds} seconds and try again.".into(),
            connection_error: "Connection error. Check your internet connection.".into(),
            fill_all_fields: "Fill in all fields".into(),
            username_length: "Username must be between 3 and 50 characters".into(),
            invalid_email: "Invalid email".into(),
            profile_updated: "Profile updated successfully!".into(),
            profile_update_failed: "Failed to update profile".into(),
            password_too_short: "The new password must be at least 6 characters long".into(),
            passwords_mismatch: "Passwords do not match".into(),
            password_changed: "Password changed successfully!".into(),
            password_change_failed: "Failed to change password".into(),
            loading_profile: "Loading profile...".into(),
            account_active: "Active account".into(),
            account_inactive: "Inactive".into(),
            administrator: "Administrator".into(),
            delete_label: "Delete".into(),
            cancel_label: "Cancel".into(),
            deleting_label: "Deleting...".into(),
        }
    }

    /// Brazilian Portuguese catalog.
    pub fn portuguese() -> Self {
        Self {
            unexpected_error: "Ocorreu um erro inesperado".into(),
            rate_limited: "Muitas requisições. Aguarde {seconds} segundos e tente novamente."
                .into(),
            connection_error: "Erro de conexão. Verifique sua internet.".into(),
            fill_all_fields: "Preencha todos os campos".into(),
            username_length: "Username deve ter entre 3 e 50 caracteres".into(),
            invalid_email: "E-mail inválido".into(),
            profile_updated: "Perfil atualizado com sucesso!".into(),
            profile_update_failed: "Falha ao atualizar perfil".into(),
            password_too_short: "A nova senha deve ter pelo menos 6 caracteres".into(),
            passwords_mismatch: "As senhas não coincidem".into(),
            password_changed: "Senha alterada com sucesso!".into(),
            password_change_failed: "Falha ao alterar senha".into(),
            loading_profile: "Carregando perfil...".into(),
            account_active: "Conta ativa".into(),
            account_inactive: "Inativo".into(),
            administrator: "Administrador".into(),
            delete_label: "Excluir".into(),
            cancel_label: "Cancelar".into(),
            deleting_label: "Excluindo...".into(),
        }
    }

    /// Rate-limit notice embedding the wait duration.
    pub fn rate_limited(&self, seconds: u64) -> String {
        self.rate_limited
            .replace(SECONDS_PLACEHOLDER, &seconds.to_string())
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}
