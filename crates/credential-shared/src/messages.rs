// ============================================================================
// Credential Shared - Message Catalog
// File: crates/credential-shared/src/messages.rs
// Description: User-facing text for validation, notifications and labels
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Every user-facing string of the form.
///
/// Loaded as configuration so the display locale can change without touching
/// the validators. The defaults are the Spanish texts of the reference UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MessageCatalog {
    #[validate(nested)]
    pub validation: ValidationMessages,
    #[validate(nested)]
    pub submission: SubmissionMessages,
    #[validate(nested)]
    pub actions: ActionMessages,
    #[validate(nested)]
    pub labels: LabelMessages,
}

/// Inline field error messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ValidationMessages {
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub email_required: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub email_invalid: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub password_required: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub confirm_password_required: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub passwords_mismatch: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            email_required: "El email es obligatorio".into(),
            email_invalid: "Ingrese un email válido".into(),
            password_required: "La contraseña es obligatoria".into(),
            confirm_password_required: "Confirmar contraseña es obligatorio".into(),
            passwords_mismatch: "Las contraseñas no coinciden".into(),
        }
    }
}

/// Notification texts for submission outcomes, per mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SubmissionMessages {
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub sign_in_success_title: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub sign_in_success_description: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub register_success_title: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub register_success_description: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub sign_in_failure_title: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub register_failure_title: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub failure_description: String,
}

impl Default for SubmissionMessages {
    fn default() -> Self {
        Self {
            sign_in_success_title: "Inicio de sesión exitoso".into(),
            sign_in_success_description: "Bienvenido de vuelta".into(),
            register_success_title: "Registro exitoso".into(),
            register_success_description: "Su cuenta ha sido creada".into(),
            sign_in_failure_title: "Error al iniciar sesión".into(),
            register_failure_title: "Error al registrarse".into(),
            failure_description: "Ha ocurrido un error, inténtelo de nuevo".into(),
        }
    }
}

/// Notification texts for the auxiliary actions (password reset, OAuth)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ActionMessages {
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub password_reset_title: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub password_reset_description: String,
    /// `{provider}` is replaced with the provider display name.
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub oauth_description: String,
}

impl Default for ActionMessages {
    fn default() -> Self {
        Self {
            password_reset_title: "Restablecer contraseña".into(),
            password_reset_description: "Se enviará un correo para restablecer su contraseña".into(),
            oauth_description: "Iniciando sesión con {provider}...".into(),
        }
    }
}

impl ActionMessages {
    pub fn oauth_description_for(&self, provider: &str) -> String {
        self.oauth_description.replace("{provider}", provider)
    }
}

/// Button and toggle labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LabelMessages {
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub sign_in_submit: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub register_submit: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub sign_in_pending: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub register_pending: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub show_password: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub hide_password: String,
}

impl Default for LabelMessages {
    fn default() -> Self {
        Self {
            sign_in_submit: "Ingresar".into(),
            register_submit: "Registrarse".into(),
            sign_in_pending: "Iniciando sesión...".into(),
            register_pending: "Registrando...".into(),
            show_password: "Mostrar contraseña".into(),
            hide_password: "Ocultar contraseña".into(),
        }
    }
}
