// ============================================================================
// Credential Core - Form State Engine
// File: crates/credential-core/src/services/form_engine.rs
// ============================================================================
//! Form state for sign-in and registration: field edits, validation, the
//! submission lifecycle and the password visibility toggles

use std::sync::Arc;

use credential_shared::MessageCatalog;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::submission::{SubmissionOrchestrator, SubmissionOutcome};
use crate::domain::{
    CredentialRequest, FieldError, FieldName, FieldValues, FormMode, Notification, OAuthProvider,
    SubmissionStatus, ValidationErrors, Visibility,
};
use crate::error::{FormError, GatewayError};
use crate::ports::{CredentialGateway, Notifier};
use crate::validation::Schema;

#[derive(Debug)]
struct FormState {
    values: FieldValues,
    errors: ValidationErrors,
    status: SubmissionStatus,
    visibility: Visibility,
    /// Id of the latest attempt that entered `Pending`
    attempt: u64,
}

impl FormState {
    fn new(mode: FormMode) -> Self {
        Self {
            values: FieldValues::empty(mode),
            errors: ValidationErrors::new(),
            status: SubmissionStatus::Idle,
            visibility: Visibility::default(),
            attempt: 0,
        }
    }

    fn clear_fields(&mut self) {
        self.values = FieldValues::empty(self.values.mode());
        self.errors = ValidationErrors::new();
    }
}

/// One credential form instance. All state is local to the instance.
///
/// The state lock is never held across the gateway await. A second
/// `submit()` while one is pending is rejected by the status check.
pub struct CredentialForm<G: CredentialGateway, N: Notifier> {
    mode: FormMode,
    schema: Schema,
    messages: Arc<MessageCatalog>,
    orchestrator: SubmissionOrchestrator<G, N>,
    state: Mutex<FormState>,
}

impl<G: CredentialGateway, N: Notifier> CredentialForm<G, N> {
    pub fn new(
        mode: FormMode,
        gateway: Arc<G>,
        notifier: Arc<N>,
        messages: Arc<MessageCatalog>,
    ) -> Self {
        Self {
            mode,
            schema: Schema::for_mode(mode),
            orchestrator: SubmissionOrchestrator::new(gateway, notifier, messages.clone()),
            messages,
            state: Mutex::new(FormState::new(mode)),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.lock().status
    }

    pub fn values(&self) -> FieldValues {
        self.state.lock().values.clone()
    }

    /// `None` when the field does not exist in this mode
    pub fn value(&self, field: FieldName) -> Option<String> {
        self.state.lock().values.get(field).map(str::to_string)
    }

    pub fn errors(&self) -> ValidationErrors {
        self.state.lock().errors.clone()
    }

    pub fn error(&self, field: FieldName) -> Option<FieldError> {
        self.state.lock().errors.get(field).cloned()
    }

    pub fn visibility(&self) -> Visibility {
        self.state.lock().visibility
    }

    /// Update one field and re-run the schema over the whole form.
    pub fn set_field(&self, field: FieldName, value: impl Into<String>) -> Result<(), FormError> {
        let mut state = self.state.lock();
        state.values.set(field, value.into())?;
        state.errors = self.schema.validate(&state.values, &self.messages);
        Ok(())
    }

    /// Validate and, if clean, submit. `Pending` is set before the gateway
    /// is called. Returns the resolved status.
    ///
    /// If the returned future is dropped while the gateway call is in flight,
    /// the attempt resolves as `Failed`.
    pub async fn submit(&self) -> Result<SubmissionStatus, FormError> {
        let (pending, request) = self.begin_submission()?;
        let outcome = self.orchestrator.run(&request).await;
        Ok(pending.resolve(outcome))
    }

    fn begin_submission(&self) -> Result<(PendingAttempt<'_, G, N>, CredentialRequest), FormError> {
        let mut state = self.state.lock();

        if state.status.is_pending() {
            warn!("Submit ignored: {} submission already pending", self.mode);
            return Err(FormError::SubmissionInProgress);
        }

        let errors = self.schema.validate(&state.values, &self.messages);
        state.errors = errors.clone();
        if !errors.is_empty() {
            debug!("Submit blocked by validation: {}", errors);
            return Err(FormError::Invalid(errors));
        }

        state.attempt += 1;
        state.status = SubmissionStatus::Pending;
        let request = CredentialRequest::from_values(&state.values);
        let pending = PendingAttempt {
            form: self,
            attempt: state.attempt,
            armed: true,
        };
        Ok((pending, request))
    }

    /// Leave `Pending` for `attempt`. Any later resolution of the same or an
    /// older attempt is ignored.
    fn resolve(&self, attempt: u64, outcome: SubmissionOutcome) -> SubmissionStatus {
        let status = {
            let mut state = self.state.lock();
            if !state.status.is_pending() || state.attempt != attempt {
                warn!(
                    "Ignoring resolution of attempt {} (current attempt {}, status {})",
                    attempt,
                    state.attempt,
                    state.status.as_str()
                );
                return state.status;
            }

            state.status = outcome.status();
            if outcome == SubmissionOutcome::Succeeded && self.mode == FormMode::Register {
                state.clear_fields();
            }
            state.status
        };

        self.orchestrator.announce(self.mode, &outcome);
        status
    }

    /// Clear values and errors. Status and visibility are kept.
    pub fn reset(&self) {
        self.state.lock().clear_fields();
        debug!("{} form reset", self.mode);
    }

    pub fn toggle_password_visibility(&self) -> bool {
        self.state.lock().visibility.toggle_password()
    }

    pub fn toggle_confirm_password_visibility(&self) -> bool {
        self.state.lock().visibility.toggle_confirm_password()
    }

    /// Toggle by field name. Only the password fields of this mode have a
    /// toggle; anything else is `FieldNotInMode`.
    pub fn toggle_visibility(&self, field: FieldName) -> Result<bool, FormError> {
        match field {
            FieldName::Password => Ok(self.toggle_password_visibility()),
            FieldName::ConfirmPassword if self.mode.has_field(field) => {
                Ok(self.toggle_confirm_password_visibility())
            }
            _ => Err(FormError::FieldNotInMode {
                field,
                mode: self.mode,
            }),
        }
    }

    /// Sign-in only. Only a notification is emitted.
    pub fn request_password_reset(&self) -> Result<(), FormError> {
        if self.mode != FormMode::SignIn {
            return Err(FormError::ActionNotInMode {
                action: "password-reset",
                mode: self.mode,
            });
        }
        let actions = &self.messages.actions;
        self.orchestrator.notify(Notification::new(
            &actions.password_reset_title,
            &actions.password_reset_description,
        ));
        Ok(())
    }

    pub fn start_oauth(&self, provider: OAuthProvider) {
        info!("OAuth sign-in requested: {}", provider.as_str());
        let description = self
            .messages
            .actions
            .oauth_description_for(provider.display_name());
        self.orchestrator
            .notify(Notification::new(provider.display_name(), description));
    }

    pub fn can_submit(&self) -> bool {
        !self.status().is_pending()
    }

    pub fn submit_label(&self) -> &str {
        let labels = &self.messages.labels;
        match (self.mode, self.status().is_pending()) {
            (FormMode::SignIn, false) => &labels.sign_in_submit,
            (FormMode::SignIn, true) => &labels.sign_in_pending,
            (FormMode::Register, false) => &labels.register_submit,
            (FormMode::Register, true) => &labels.register_pending,
        }
    }

    /// Label of the show/hide toggle. `None` for fields without a toggle.
    pub fn visibility_label(&self, field: FieldName) -> Option<&str> {
        if !field.is_secret() || !self.mode.has_field(field) {
            return None;
        }
        let labels = &self.messages.labels;
        if self.visibility().is_shown(field) {
            Some(labels.hide_password.as_str())
        } else {
            Some(labels.show_password.as_str())
        }
    }
}

/// An attempt in `Pending`. Dropping it unresolved fails the attempt.
struct PendingAttempt<'a, G: CredentialGateway, N: Notifier> {
    form: &'a CredentialForm<G, N>,
    attempt: u64,
    armed: bool,
}

impl<G: CredentialGateway, N: Notifier> PendingAttempt<'_, G, N> {
    fn resolve(mut self, outcome: SubmissionOutcome) -> SubmissionStatus {
        self.armed = false;
        self.form.resolve(self.attempt, outcome)
    }
}

impl<G: CredentialGateway, N: Notifier> Drop for PendingAttempt<'_, G, N> {
    fn drop(&mut self) {
        if self.armed {
            warn!(
                "{} submission attempt {} dropped while pending",
                self.form.mode, self.attempt
            );
            self.form
                .resolve(self.attempt, SubmissionOutcome::Failed(GatewayError::Abandoned));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockCredentialGateway, MockNotifier};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    type MockForm = CredentialForm<MockCredentialGateway, MockNotifier>;

    fn form(mode: FormMode, gateway: MockCredentialGateway, notifier: MockNotifier) -> MockForm {
        CredentialForm::new(
            mode,
            Arc::new(gateway),
            Arc::new(notifier),
            Arc::new(MessageCatalog::default()),
        )
    }

    fn fill<G: CredentialGateway, N: Notifier>(form: &CredentialForm<G, N>, fields: &[(FieldName, &str)]) {
        for (field, value) in fields {
            form.set_field(*field, *value).unwrap();
        }
    }

    const VALID_SIGN_IN: &[(FieldName, &str)] =
        &[(FieldName::Email, "a@b.co"), (FieldName::Password, "p1")];

    const VALID_REGISTER: &[(FieldName, &str)] = &[
        (FieldName::Email, "a@b.co"),
        (FieldName::Password, "p1"),
        (FieldName::ConfirmPassword, "p1"),
    ];

    /// Holds the submission open until released
    struct GatedGateway {
        release: Notify,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CredentialGateway for GatedGateway {
        async fn submit(&self, _request: &CredentialRequest) -> Result<(), GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(())
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let form = form(FormMode::Register, MockCredentialGateway::new(), MockNotifier::new());

        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.errors().is_empty());
        assert_eq!(form.value(FieldName::ConfirmPassword), Some(String::new()));
        assert_eq!(form.visibility(), Visibility::default());
    }

    #[test]
    fn test_set_field_revalidates() {
        let form = form(FormMode::SignIn, MockCredentialGateway::new(), MockNotifier::new());

        form.set_field(FieldName::Email, "usuario").unwrap();
        assert_eq!(
            form.error(FieldName::Email).map(|e| e.message),
            Some("Ingrese un email válido".to_string())
        );
        assert!(form.errors().contains(FieldName::Password));

        fill(&form, VALID_SIGN_IN);
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_sign_in_has_no_confirm_password() {
        let form = form(FormMode::SignIn, MockCredentialGateway::new(), MockNotifier::new());

        let result = form.set_field(FieldName::ConfirmPassword, "x");
        assert!(matches!(result, Err(FormError::FieldNotInMode { .. })));
        assert_eq!(form.value(FieldName::ConfirmPassword), None);
    }

    #[tokio::test]
    async fn test_invalid_submit_does_not_reach_gateway() {
        // No expectations: any gateway or notifier call panics.
        let form = form(FormMode::SignIn, MockCredentialGateway::new(), MockNotifier::new());
        form.set_field(FieldName::Email, "a@b.co").unwrap();

        match form.submit().await {
            Err(FormError::Invalid(errors)) => {
                assert!(errors.contains(FieldName::Password));
                assert!(!errors.contains(FieldName::ConfirmPassword));
            }
            other => panic!("Expected validation failure, got {:?}", other),
        }
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.errors().contains(FieldName::Password));
    }

    #[tokio::test]
    async fn test_register_mismatch_blocks_submit() {
        let form = form(FormMode::Register, MockCredentialGateway::new(), MockNotifier::new());
        fill(
            &form,
            &[
                (FieldName::Email, "a@b.co"),
                (FieldName::Password, "p1"),
                (FieldName::ConfirmPassword, "p2"),
            ],
        );

        let errors = match form.submit().await {
            Err(FormError::Invalid(errors)) => errors,
            other => panic!("Expected validation failure, got {:?}", other),
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(FieldName::ConfirmPassword),
            Some("Las contraseñas no coinciden")
        );
    }

    #[tokio::test]
    async fn test_sign_in_success_keeps_values() {
        let mut gateway = MockCredentialGateway::new();
        gateway
            .expect_submit()
            .withf(|r| r.mode == FormMode::SignIn && r.email == "a@b.co" && r.password == "p1")
            .times(1)
            .returning(|_| Ok(()));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.title == "Inicio de sesión exitoso" && !n.is_destructive())
            .times(1)
            .return_const(());

        let form = form(FormMode::SignIn, gateway, notifier);
        fill(&form, VALID_SIGN_IN);
        let before = form.values();

        assert_eq!(form.submit().await, Ok(SubmissionStatus::Succeeded));
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
        assert_eq!(form.values(), before);
    }

    #[tokio::test]
    async fn test_register_success_resets_values() {
        let mut gateway = MockCredentialGateway::new();
        gateway
            .expect_submit()
            .withf(|r| r.mode == FormMode::Register)
            .times(1)
            .returning(|_| Ok(()));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.title == "Registro exitoso" && n.description == "Su cuenta ha sido creada")
            .times(1)
            .return_const(());

        let form = form(FormMode::Register, gateway, notifier);
        fill(&form, VALID_REGISTER);

        assert_eq!(form.submit().await, Ok(SubmissionStatus::Succeeded));
        assert_eq!(form.values(), FieldValues::empty(FormMode::Register));
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_failure_keeps_data_and_allows_retry() {
        let mut gateway = MockCredentialGateway::new();
        let mut calls = 0;
        gateway.expect_submit().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(GatewayError::Unavailable("timeout".into()))
            } else {
                Ok(())
            }
        });
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.title == "Error al registrarse" && n.is_destructive())
            .times(1)
            .return_const(());
        notifier
            .expect_notify()
            .withf(|n| n.title == "Registro exitoso")
            .times(1)
            .return_const(());

        let form = form(FormMode::Register, gateway, notifier);
        fill(&form, VALID_REGISTER);
        let before = form.values();

        assert_eq!(form.submit().await, Ok(SubmissionStatus::Failed));
        assert_eq!(form.values(), before);
        assert!(form.errors().is_empty());
        assert!(form.can_submit());

        assert_eq!(form.submit().await, Ok(SubmissionStatus::Succeeded));
        assert_eq!(form.values(), FieldValues::empty(FormMode::Register));
    }

    #[tokio::test]
    async fn test_submit_while_pending_is_rejected() {
        let gateway = Arc::new(GatedGateway {
            release: Notify::new(),
            calls: AtomicUsize::new(0),
        });
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(1).return_const(());

        let form = CredentialForm::new(
            FormMode::SignIn,
            gateway.clone(),
            Arc::new(notifier),
            Arc::new(MessageCatalog::default()),
        );
        fill(&form, VALID_SIGN_IN);

        let second = async {
            while !form.status().is_pending() {
                tokio::task::yield_now().await;
            }
            assert!(!form.can_submit());
            assert_eq!(form.submit_label(), "Iniciando sesión...");
            let values = form.values();

            let result = form.submit().await;

            assert_eq!(form.status(), SubmissionStatus::Pending);
            assert_eq!(form.values(), values);
            gateway.release.notify_one();
            result
        };

        let (first, second) = tokio::join!(form.submit(), second);

        assert_eq!(first, Ok(SubmissionStatus::Succeeded));
        assert_eq!(second, Err(FormError::SubmissionInProgress));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_pending_resolves_exactly_once() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(1).return_const(());
        let form = form(FormMode::SignIn, MockCredentialGateway::new(), notifier);
        fill(&form, VALID_SIGN_IN);

        let (pending, request) = form.begin_submission().unwrap();
        let attempt = pending.attempt;
        assert_eq!(request.email, "a@b.co");
        assert_eq!(form.status(), SubmissionStatus::Pending);

        assert_eq!(
            pending.resolve(SubmissionOutcome::Succeeded),
            SubmissionStatus::Succeeded
        );
        let late = SubmissionOutcome::Failed(GatewayError::Unavailable("late".into()));
        assert_eq!(form.resolve(attempt, late), SubmissionStatus::Succeeded);
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_stale_attempt_is_ignored() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(1).return_const(());
        let form = form(FormMode::SignIn, MockCredentialGateway::new(), notifier);
        fill(&form, VALID_SIGN_IN);

        let (pending, _) = form.begin_submission().unwrap();
        assert_eq!(
            form.resolve(pending.attempt + 1, SubmissionOutcome::Succeeded),
            SubmissionStatus::Pending
        );
        let failed = SubmissionOutcome::Failed(GatewayError::Rejected("no".into()));
        assert_eq!(pending.resolve(failed), SubmissionStatus::Failed);
    }

    #[test]
    fn test_reset_clears_fields_only() {
        let form = form(FormMode::Register, MockCredentialGateway::new(), MockNotifier::new());
        form.set_field(FieldName::Email, "bad").unwrap();
        form.toggle_password_visibility();

        form.reset();

        assert_eq!(form.values(), FieldValues::empty(FormMode::Register));
        assert!(form.errors().is_empty());
        assert!(form.visibility().password);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_visibility_toggles_leave_validation_alone() {
        let form = form(FormMode::Register, MockCredentialGateway::new(), MockNotifier::new());
        form.set_field(FieldName::Password, "p1").unwrap();
        let errors = form.errors();
        let values = form.values();

        assert!(form.toggle_password_visibility());
        assert!(!form.visibility().confirm_password);
        assert_eq!(form.visibility_label(FieldName::Password), Some("Ocultar contraseña"));
        assert_eq!(
            form.visibility_label(FieldName::ConfirmPassword),
            Some("Mostrar contraseña")
        );

        assert!(form.toggle_confirm_password_visibility());
        assert!(!form.toggle_password_visibility());
        assert!(!form.toggle_confirm_password_visibility());

        assert_eq!(form.visibility(), Visibility::default());
        assert_eq!(form.errors(), errors);
        assert_eq!(form.values(), values);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_visibility_label_absent_for_missing_fields() {
        let form = form(FormMode::SignIn, MockCredentialGateway::new(), MockNotifier::new());
        assert_eq!(form.visibility_label(FieldName::Email), None);
        assert_eq!(form.visibility_label(FieldName::ConfirmPassword), None);
        assert_eq!(form.visibility_label(FieldName::Password), Some("Mostrar contraseña"));
    }

    #[test]
    fn test_password_reset_only_for_sign_in() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| {
                n.title == "Restablecer contraseña"
                    && n.description == "Se enviará un correo para restablecer su contraseña"
            })
            .times(1)
            .return_const(());
        let sign_in = form(FormMode::SignIn, MockCredentialGateway::new(), notifier);
        assert!(sign_in.request_password_reset().is_ok());

        let register = form(FormMode::Register, MockCredentialGateway::new(), MockNotifier::new());
        assert!(matches!(
            register.request_password_reset(),
            Err(FormError::ActionNotInMode { mode: FormMode::Register, .. })
        ));
    }

    #[test]
    fn test_oauth_notifies_provider() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.title == "Google" && n.description == "Iniciando sesión con Google...")
            .times(1)
            .return_const(());
        let form = form(FormMode::Register, MockCredentialGateway::new(), notifier);

        form.start_oauth(OAuthProvider::Google);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_submit_labels() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.title == "Error al registrarse" && n.is_destructive())
            .times(1)
            .return_const(());
        let sign_in = form(FormMode::SignIn, MockCredentialGateway::new(), MockNotifier::new());
        let register = form(FormMode::Register, MockCredentialGateway::new(), notifier);
        assert_eq!(sign_in.submit_label(), "Ingresar");
        assert_eq!(register.submit_label(), "Registrarse");

        fill(&register, VALID_REGISTER);
        let (pending, _) = register.begin_submission().unwrap();
        assert_eq!(register.submit_label(), "Registrando...");

        drop(pending);
        assert_eq!(register.status(), SubmissionStatus::Failed);
        assert_eq!(register.submit_label(), "Registrarse");
    }

    #[tokio::test]
    async fn test_caller_timeout_fails_pending_attempt() {
        let gateway = Arc::new(GatedGateway {
            release: Notify::new(),
            calls: AtomicUsize::new(0),
        });
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.title == "Error al iniciar sesión" && n.is_destructive())
            .times(1)
            .return_const(());
        notifier
            .expect_notify()
            .withf(|n| n.title == "Inicio de sesión exitoso")
            .times(1)
            .return_const(());

        let form = CredentialForm::new(
            FormMode::SignIn,
            gateway.clone(),
            Arc::new(notifier),
            Arc::new(MessageCatalog::default()),
        );
        fill(&form, VALID_SIGN_IN);
        let before = form.values();

        let timed_out = tokio::time::timeout(Duration::from_millis(20), form.submit()).await;
        assert!(timed_out.is_err());
        assert_eq!(form.status(), SubmissionStatus::Failed);
        assert!(form.can_submit());
        assert_eq!(form.submit_label(), "Ingresar");
        assert_eq!(form.values(), before);

        gateway.release.notify_one();
        assert_eq!(form.submit().await, Ok(SubmissionStatus::Succeeded));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_toggle_visibility_by_field() {
        let sign_in = form(FormMode::SignIn, MockCredentialGateway::new(), MockNotifier::new());
        assert_eq!(sign_in.toggle_visibility(FieldName::Password), Ok(true));
        assert_eq!(
            sign_in.toggle_visibility(FieldName::ConfirmPassword),
            Err(FormError::FieldNotInMode {
                field: FieldName::ConfirmPassword,
                mode: FormMode::SignIn,
            })
        );
        assert!(sign_in.toggle_visibility(FieldName::Email).is_err());
        assert!(!sign_in.visibility().confirm_password);

        let register = form(FormMode::Register, MockCredentialGateway::new(), MockNotifier::new());
        assert_eq!(register.toggle_visibility(FieldName::ConfirmPassword), Ok(true));
        assert!(!register.visibility().password);
    }
}
