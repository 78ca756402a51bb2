//! View-Sync Controller
//!
//! Maps user intents onto API calls and applies the outcome to
//! [`AppState`](crate::state::AppState). Every failure is written to the
//! state as a notice before it is returned, so front ends can ignore the
//! `Result` when they only render.
//!
//! Requests are never retried, queued or cancelled. Overlapping calls each
//! write their own outcome; the last response to land wins.

use thiserror::Error;

use crate::api::{ApiClient, ApiError, Transport};
use crate::model::ApostaId;
use crate::state::{today, FormError, Notice, Store};

pub const LOGIN_FAILED: &str = "Erro no login";
pub const REGISTER_FAILED: &str = "Erro no registro";
pub const CREATE_FAILED: &str = "Erro ao salvar aposta";
pub const UPDATE_FAILED: &str = "Erro ao atualizar aposta";
pub const DELETE_FAILED: &str = "Erro ao excluir aposta";
pub const REGISTER_SUCCEEDED: &str = "Usuário criado com sucesso! Faça login.";
pub const DELETE_PROMPT: &str = "Tem certeza que deseja excluir esta aposta?";

/// Interactive yes/no prompt guarding destructive actions
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Fixed answer, for non-interactive use
#[derive(Debug, Clone, Copy)]
pub struct AlwaysConfirm(pub bool);

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Why a user action did not complete
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Form(#[from] FormError),
}

pub type ActionResult<T = ()> = Result<T, ActionError>;

#[derive(Clone)]
pub struct Controller<T, S, C> {
    api: ApiClient<T>,
    store: S,
    confirm: C,
}

impl<T, S, C> Controller<T, S, C>
where
    T: Transport,
    S: Store,
    C: Confirm,
{
    pub fn new(transport: T, store: S, confirm: C) -> Self {
        Self {
            api: ApiClient::new(transport),
            store,
            confirm,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit the login form
    pub async fn login(&self) -> ActionResult {
        let request = self.store.read(|s| s.login_form.to_request());

        match self.api.login(&request).await {
            Ok(user) => {
                tracing::info!(username = %user.username, "logged in");
                self.store.write(|s| s.adopt_session(user));
                self.refresh_all().await;
                Ok(())
            }
            Err(e) => Err(self.fail(e, LOGIN_FAILED)),
        }
    }

    /// Submit the registration form
    pub async fn register(&self) -> ActionResult {
        let request = self.store.read(|s| s.register_form.to_request());

        match self.api.register(&request).await {
            Ok(()) => {
                self.store.write(|s| {
                    s.notify(Notice::info(REGISTER_SUCCEEDED));
                    s.show_login_tab();
                    s.reset_register_form();
                });
                Ok(())
            }
            Err(e) => Err(self.fail(e, REGISTER_FAILED)),
        }
    }

    /// Best-effort server logout; the local session is always torn down
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            tracing::warn!(error = %e, "logout request failed, clearing local session anyway");
        }
        self.store.write(|s| s.clear_session());
    }

    /// Restore a server-side session at startup, silently
    pub async fn probe_session(&self) -> bool {
        match self.api.profile().await {
            Ok(user) => {
                tracing::debug!(username = %user.username, "restored existing session");
                self.store.write(|s| s.adopt_session(user));
                self.refresh_all().await;
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "no active session");
                false
            }
        }
    }

    /// Submit the entry form
    pub async fn create_bet(&self) -> ActionResult {
        let payload = self
            .store
            .read(|s| s.entry_form.to_payload())
            .map_err(|e| self.reject(e))?;

        match self.api.create_aposta(&payload).await {
            Ok(created) => {
                tracing::debug!(id = %created.id, "bet created");
                self.store.write(|s| {
                    s.reset_entry_form(today());
                    s.hide_add_form();
                });
                self.refresh_all().await;
                Ok(())
            }
            Err(e) => Err(self.fail(e, CREATE_FAILED)),
        }
    }

    /// Submit the edit modal. A no-op when the modal is closed.
    pub async fn update_bet(&self) -> ActionResult {
        let Some((id, form)) = self
            .store
            .read(|s| s.edit.as_ref().map(|e| (e.id, e.form.clone())))
        else {
            return Ok(());
        };

        let payload = form.to_payload().map_err(|e| self.reject(e))?;

        match self.api.update_aposta(id, &payload).await {
            Ok(_) => {
                self.store.write(|s| s.close_edit());
                self.refresh_all().await;
                Ok(())
            }
            Err(e) => Err(self.fail(e, UPDATE_FAILED)),
        }
    }

    /// Delete after confirmation. Returns whether a delete actually happened.
    pub async fn delete_bet(&self, id: ApostaId) -> ActionResult<bool> {
        if !self.confirm.confirm(DELETE_PROMPT) {
            return Ok(false);
        }

        match self.api.delete_aposta(id).await {
            Ok(()) => {
                tracing::debug!(%id, "bet deleted");
                self.refresh_all().await;
                Ok(true)
            }
            Err(e) => Err(self.fail(e, DELETE_FAILED)),
        }
    }

    /// Replace the ledger cache with the server's list
    pub async fn refresh_ledger(&self) {
        match self.api.list_apostas().await {
            Ok(apostas) => self.store.write(|s| s.replace_ledger(apostas)),
            Err(e) => tracing::warn!(error = %e, "failed to load bets"),
        }
    }

    /// Re-fetch the dashboard aggregate
    pub async fn refresh_summary(&self) {
        match self.api.resumo().await {
            Ok(resumo) => self.store.write(|s| s.set_resumo(resumo)),
            Err(e) => tracing::warn!(error = %e, "failed to load summary"),
        }
    }

    async fn refresh_all(&self) {
        self.refresh_summary().await;
        self.refresh_ledger().await;
    }

    fn fail(&self, error: ApiError, fallback: &str) -> ActionError {
        let message = error.user_message(fallback);
        self.store.write(|s| s.notify(Notice::error(message)));
        ActionError::Api(error)
    }

    fn reject(&self, error: FormError) -> ActionError {
        let message = error.to_string();
        self.store.write(|s| s.notify(Notice::error(message)));
        ActionError::Form(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::ScriptedTransport;
    use crate::api::{Method, CONNECTION_ERROR_MESSAGE};
    use crate::state::{AppState, AuthTab, Screen, SharedState};
    use crate::view::{LedgerView, EMPTY_LEDGER_MESSAGE};
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type TestController = Controller<ScriptedTransport, SharedState, AlwaysConfirm>;

    fn setup(confirm: bool) -> (TestController, ScriptedTransport, SharedState) {
        let transport = ScriptedTransport::new();
        let state: SharedState = Rc::new(RefCell::new(AppState::default()));
        let controller = Controller::new(transport.clone(), state.clone(), AlwaysConfirm(confirm));
        (controller, transport, state)
    }

    fn aposta_json(id: i64, entrada: f64, odd: f64, valor_final: f64) -> serde_json::Value {
        json!({
            "id": id,
            "user_id": 1,
            "data": "2024-05-01",
            "entrada": entrada,
            "odd": odd,
            "total_previsto": entrada * odd,
            "valor_final": valor_final,
            "created_at": null,
            "updated_at": null
        })
    }

    fn script_lists(transport: &ScriptedTransport) {
        transport
            .json(
                Method::Get,
                "/api/apostas",
                200,
                json!([aposta_json(2, 50.0, 3.0, 150.0), aposta_json(1, 100.0, 2.5, -100.0)]),
            )
            .json(
                Method::Get,
                "/api/apostas/resumo",
                200,
                json!({
                    "total_investido": 150.0,
                    "total_retorno_bruto": 50.0,
                    "total_retorno_liquido": -100.0,
                    "total_previsto": 400.0,
                    "quantidade_apostas": 2
                }),
            );
    }

    async fn logged_in(confirm: bool) -> (TestController, ScriptedTransport, SharedState) {
        let (controller, transport, state) = setup(confirm);
        script_lists(&transport);
        transport.json(Method::Get, "/api/profile", 200, json!({"id": 1, "username": "ana"}));
        assert!(controller.probe_session().await);
        transport.clear_log();
        (controller, transport, state)
    }

    #[tokio::test]
    async fn test_login_success_loads_ledger_and_summary_once() {
        let (controller, transport, state) = setup(true);
        script_lists(&transport);
        transport.json(
            Method::Post,
            "/api/login",
            200,
            json!({"message": "Login realizado com sucesso", "user": {"id": 1, "username": "ana"}}),
        );

        state.write(|s| {
            s.login_form.username = "ana".into();
            s.login_form.password = "pw".into();
        });

        controller.login().await.unwrap();

        let s = state.borrow();
        assert_eq!(s.screen, Screen::Main);
        assert_eq!(s.username(), "ana");
        assert_eq!(s.apostas.len(), 2);
        assert_eq!(s.resumo.as_ref().unwrap().quantidade_apostas, 2);
        assert!(s.notice.is_none());

        assert_eq!(transport.count(Method::Get, "/api/apostas"), 1);
        assert_eq!(transport.count(Method::Get, "/api/apostas/resumo"), 1);

        let login = &transport.requests()[0];
        assert_eq!(login.body, Some(json!({"username": "ana", "password": "pw"})));
    }

    #[tokio::test]
    async fn test_login_rejected_shows_server_text_verbatim() {
        let (controller, transport, state) = setup(true);
        transport.json(
            Method::Post,
            "/api/login",
            401,
            json!({"error": "Credenciais inválidas"}),
        );

        let result = controller.login().await;
        assert!(matches!(result, Err(ActionError::Api(ApiError::Status { status: 401, .. }))));

        let s = state.borrow();
        assert!(s.session.is_none());
        assert_eq!(s.screen, Screen::Login);
        assert_eq!(s.notice, Some(Notice::error("Credenciais inválidas")));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_login_plain_text_failure() {
        let (controller, transport, state) = setup(true);
        transport.text(Method::Post, "/api/login", 502, "Bad Gateway");

        let _ = controller.login().await;
        assert_eq!(state.borrow().notice, Some(Notice::error("Bad Gateway")));
    }

    #[tokio::test]
    async fn test_login_connection_error_is_generic() {
        let (controller, transport, state) = setup(true);
        transport.unreachable(Method::Post, "/api/login");

        let _ = controller.login().await;
        assert_eq!(
            state.borrow().notice,
            Some(Notice::error(CONNECTION_ERROR_MESSAGE))
        );
    }

    #[tokio::test]
    async fn test_register_success_resets_form_and_switches_tab() {
        let (controller, transport, state) = setup(true);
        transport.json(Method::Post, "/api/register", 201, json!({"message": "ok"}));

        state.write(|s| {
            s.show_register_tab();
            s.register_form.username = "bia".into();
            s.register_form.email = "bia@example.com".into();
            s.register_form.password = "pw".into();
        });

        controller.register().await.unwrap();

        let s = state.borrow();
        assert_eq!(s.auth_tab, AuthTab::Login);
        assert!(s.register_form.username.is_empty());
        assert_eq!(s.notice, Some(Notice::info(REGISTER_SUCCEEDED)));
        assert!(s.session.is_none());
    }

    #[tokio::test]
    async fn test_register_failure_keeps_form() {
        let (controller, transport, state) = setup(true);
        transport.json(Method::Post, "/api/register", 400, json!({"error": "Email já cadastrado"}));
        state.write(|s| s.register_form.username = "bia".into());

        assert!(controller.register().await.is_err());
        let s = state.borrow();
        assert_eq!(s.register_form.username, "bia");
        assert_eq!(s.notice, Some(Notice::error("Email já cadastrado")));
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_server_unreachable() {
        let (controller, transport, state) = logged_in(true).await;
        transport.unreachable(Method::Post, "/api/logout");

        controller.logout().await;

        let s = state.borrow();
        assert!(s.session.is_none());
        assert_eq!(s.screen, Screen::Login);
        assert!(s.apostas.is_empty());
        assert_eq!(transport.count(Method::Post, "/api/logout"), 1);
    }

    #[tokio::test]
    async fn test_probe_without_session_stays_on_login() {
        let (controller, transport, state) = setup(true);
        transport.text(Method::Get, "/api/profile", 401, "Unauthorized");

        assert!(!controller.probe_session().await);
        let s = state.borrow();
        assert_eq!(s.screen, Screen::Login);
        assert!(s.notice.is_none());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_create_success_resets_and_collapses_form() {
        let (controller, transport, state) = logged_in(true).await;
        transport.json(Method::Post, "/api/apostas", 201, aposta_json(3, 100.0, 2.5, 0.0));

        state.write(|s| {
            s.show_add_form();
            s.entry_form.data = "2024-05-01".into();
            s.entry_form.entrada = "100.00".into();
            s.entry_form.odd = "2.5".into();
            s.entry_form.valor_final = "30".into();
        });
        assert_eq!(state.borrow().entry_form.preview_label(), "R$ 250,00");

        controller.create_bet().await.unwrap();

        let s = state.borrow();
        assert_eq!(s.entry_form.data, today().format("%Y-%m-%d").to_string());
        assert_eq!(s.entry_form.valor_final, "0");
        assert!(s.entry_form.entrada.is_empty());
        assert!(!s.entry_open);

        let create = &transport.requests()[0];
        assert_eq!(
            create.body,
            Some(json!({"data": "2024-05-01", "entrada": 100.0, "odd": 2.5, "valor_final": 30.0}))
        );
        assert_eq!(transport.count(Method::Get, "/api/apostas"), 1);
        assert_eq!(transport.count(Method::Get, "/api/apostas/resumo"), 1);
    }

    #[tokio::test]
    async fn test_create_failure_keeps_entered_values() {
        let (controller, transport, state) = logged_in(true).await;
        transport.json(Method::Post, "/api/apostas", 400, json!({}));

        state.write(|s| {
            s.show_add_form();
            s.entry_form.entrada = "10".into();
            s.entry_form.odd = "3".into();
        });

        assert!(controller.create_bet().await.is_err());

        let s = state.borrow();
        assert!(s.entry_open);
        assert_eq!(s.entry_form.entrada, "10");
        assert_eq!(s.notice, Some(Notice::error(CREATE_FAILED)));
        assert_eq!(transport.count(Method::Get, "/api/apostas"), 0);
    }

    #[tokio::test]
    async fn test_create_with_invalid_stake_sends_nothing() {
        let (controller, transport, state) = logged_in(true).await;
        state.write(|s| s.entry_form.odd = "2".into());

        let result = controller.create_bet().await;
        assert!(matches!(result, Err(ActionError::Form(_))));
        assert!(transport.requests().is_empty());
        assert!(state.borrow().notice.as_ref().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_update_success_closes_modal_and_refreshes() {
        let (controller, transport, state) = logged_in(true).await;
        transport.json(Method::Put, "/api/apostas/1", 200, aposta_json(1, 100.0, 2.5, 250.0));

        state.write(|s| {
            assert!(s.open_edit(ApostaId(1)));
            s.edit.as_mut().unwrap().form.valor_final = "250".into();
        });

        controller.update_bet().await.unwrap();

        assert!(state.borrow().edit.is_none());
        let put = &transport.requests()[0];
        assert_eq!(put.method, Method::Put);
        assert_eq!(put.body.as_ref().unwrap()["valor_final"], 250.0);
        assert_eq!(transport.count(Method::Get, "/api/apostas"), 1);
    }

    #[tokio::test]
    async fn test_update_rejected_keeps_modal_open_without_refresh() {
        let (controller, transport, state) = logged_in(true).await;
        transport.text(Method::Put, "/api/apostas/2", 404, "");

        state.write(|s| {
            s.open_edit(ApostaId(2));
        });

        assert!(controller.update_bet().await.is_err());

        let s = state.borrow();
        assert_eq!(s.edit.as_ref().map(|e| e.id), Some(ApostaId(2)));
        assert_eq!(s.notice, Some(Notice::error(UPDATE_FAILED)));
        assert_eq!(transport.count(Method::Get, "/api/apostas"), 0);
        assert_eq!(transport.count(Method::Get, "/api/apostas/resumo"), 0);
    }

    #[tokio::test]
    async fn test_update_without_open_modal_is_noop() {
        let (controller, transport, _state) = logged_in(true).await;
        controller.update_bet().await.unwrap();
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unconfirmed_sends_nothing() {
        let (controller, transport, state) = logged_in(false).await;
        let before = state.borrow().apostas.clone();

        assert_eq!(controller.delete_bet(ApostaId(1)).await, Ok(false));
        assert!(transport.requests().is_empty());
        assert_eq!(state.borrow().apostas, before);
    }

    #[tokio::test]
    async fn test_delete_confirmed_refreshes() {
        let (controller, transport, _state) = logged_in(true).await;
        transport.text(Method::Delete, "/api/apostas/1", 204, "");

        assert_eq!(controller.delete_bet(ApostaId(1)).await, Ok(true));
        assert_eq!(transport.count(Method::Delete, "/api/apostas/1"), 1);
        assert_eq!(transport.count(Method::Get, "/api/apostas"), 1);
        assert_eq!(transport.count(Method::Get, "/api/apostas/resumo"), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_surfaces_message() {
        let (controller, transport, state) = logged_in(true).await;
        transport.json(Method::Delete, "/api/apostas/9", 404, json!({"error": "Não encontrada"}));

        assert!(controller.delete_bet(ApostaId(9)).await.is_err());
        assert_eq!(state.borrow().notice, Some(Notice::error("Não encontrada")));
    }

    #[tokio::test]
    async fn test_confirm_prompt_text() {
        struct Recorder(Rc<Cell<bool>>);
        impl Confirm for Recorder {
            fn confirm(&self, message: &str) -> bool {
                self.0.set(message == DELETE_PROMPT);
                false
            }
        }

        let asked = Rc::new(Cell::new(false));
        let state: SharedState = Rc::new(RefCell::new(AppState::default()));
        let controller = Controller::new(ScriptedTransport::new(), state, Recorder(asked.clone()));

        controller.delete_bet(ApostaId(1)).await.unwrap();
        assert!(asked.get());
    }

    #[tokio::test]
    async fn test_empty_ledger_renders_placeholder() {
        let (controller, transport, state) = logged_in(true).await;
        assert_eq!(state.borrow().apostas.len(), 2);
        transport.json(Method::Get, "/api/apostas", 200, json!([]));

        controller.refresh_ledger().await;

        assert_eq!(transport.count(Method::Get, "/api/apostas"), 1);
        assert!(state.borrow().apostas.is_empty());
        assert_eq!(
            LedgerView::build(&state.borrow().apostas),
            LedgerView::Empty(EMPTY_LEDGER_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_ledger_row_with_null_final_value_is_kept() {
        let (controller, transport, state) = logged_in(true).await;
        transport.json(
            Method::Get,
            "/api/apostas",
            200,
            json!([
                {"id": 1, "data": "2024-03-05", "entrada": 100.0, "odd": 2.5,
                 "total_previsto": 250.0, "valor_final": 5.0},
                {"id": 2, "data": "2024-03-06", "entrada": 20.0, "odd": 1.5,
                 "total_previsto": 30.0, "valor_final": null}
            ]),
        );

        controller.refresh_ledger().await;

        let apostas = state.borrow().apostas.clone();
        assert_eq!(apostas.len(), 2);
        assert_eq!(apostas[1].valor_final, 0.0);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_cache() {
        let (controller, transport, state) = logged_in(true).await;
        transport.unreachable(Method::Get, "/api/apostas");

        controller.refresh_ledger().await;
        assert_eq!(state.borrow().apostas.len(), 2);
        assert!(state.borrow().notice.is_none());
    }
}
