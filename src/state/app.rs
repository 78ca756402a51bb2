//! Application State
//!
//! Everything the front ends render from. Transitions are plain methods so
//! they can be driven from the controller, from UI events, or from tests.

use chrono::NaiveDate;

use super::forms::{BetForm, LoginForm, RegisterForm};
use crate::model::{Aposta, ApostaId, Resumo, User};

/// Which top-level screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Main,
}

/// Tab on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// The signed-in user, held in memory only
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
}

impl From<User> for Session {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Message surfaced to the user after an action
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Open edit modal
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    pub id: ApostaId,
    pub form: BetForm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub session: Option<Session>,
    pub screen: Screen,
    pub auth_tab: AuthTab,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    /// Ledger cache, in server order
    pub apostas: Vec<Aposta>,
    pub resumo: Option<Resumo>,
    pub entry_form: BetForm,
    pub entry_open: bool,
    pub edit: Option<EditState>,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            session: None,
            screen: Screen::Login,
            auth_tab: AuthTab::Login,
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            apostas: Vec::new(),
            resumo: None,
            entry_form: BetForm::new(today),
            entry_open: false,
            edit: None,
            notice: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn username(&self) -> &str {
        self.session
            .as_ref()
            .map(|s| s.username.as_str())
            .unwrap_or("")
    }

    /// Adopt a session from login or the startup probe
    pub fn adopt_session(&mut self, user: User) {
        self.session = Some(Session::from(user));
        self.screen = Screen::Main;
        self.login_form.password.clear();
    }

    /// Local logout; always succeeds
    pub fn clear_session(&mut self) {
        self.session = None;
        self.screen = Screen::Login;
        self.auth_tab = AuthTab::Login;
        self.apostas.clear();
        self.resumo = None;
        self.edit = None;
        self.entry_open = false;
    }

    pub fn show_login_tab(&mut self) {
        self.auth_tab = AuthTab::Login;
    }

    pub fn show_register_tab(&mut self) {
        self.auth_tab = AuthTab::Register;
    }

    pub fn reset_register_form(&mut self) {
        self.register_form = RegisterForm::default();
    }

    pub fn show_add_form(&mut self) {
        self.entry_open = true;
    }

    pub fn hide_add_form(&mut self) {
        self.entry_open = false;
    }

    pub fn reset_entry_form(&mut self, today: NaiveDate) {
        self.entry_form = BetForm::new(today);
    }

    /// Replace the whole ledger cache
    pub fn replace_ledger(&mut self, apostas: Vec<Aposta>) {
        self.apostas = apostas;
    }

    pub fn set_resumo(&mut self, resumo: Resumo) {
        self.resumo = Some(resumo);
    }

    pub fn find(&self, id: ApostaId) -> Option<&Aposta> {
        self.apostas.iter().find(|a| a.id == id)
    }

    /// Open the edit modal for a cached record. Returns false for unknown ids.
    pub fn open_edit(&mut self, id: ApostaId) -> bool {
        let Some(form) = self.find(id).map(BetForm::from_aposta) else {
            return false;
        };
        self.edit = Some(EditState { id, form });
        true
    }

    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(today())
    }
}

/// Local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64) -> Aposta {
        Aposta {
            id: ApostaId(id),
            data: NaiveDate::from_ymd_opt(2024, 1, id as u32).unwrap(),
            entrada: 10.0 * id as f64,
            odd: 2.0,
            total_previsto: 20.0 * id as f64,
            valor_final: 0.0,
            user_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn user(name: &str) -> User {
        User {
            id: Some(1),
            username: name.to_string(),
            email: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(state.screen, Screen::Login);
        assert_eq!(state.auth_tab, AuthTab::Login);
        assert!(!state.is_authenticated());
        assert_eq!(state.entry_form.data, "2024-01-01");
        assert!(!state.entry_open);
    }

    #[test]
    fn test_session_lifecycle() {
        let mut state = AppState::default();
        state.login_form.password = "secret".into();
        state.adopt_session(user("ana"));
        assert_eq!(state.screen, Screen::Main);
        assert_eq!(state.username(), "ana");
        assert!(state.login_form.password.is_empty());

        state.replace_ledger(vec![sample(1)]);
        state.clear_session();
        assert_eq!(state.screen, Screen::Login);
        assert!(state.session.is_none());
        assert!(state.apostas.is_empty());
        assert_eq!(state.username(), "");
    }

    #[test]
    fn test_replace_ledger_keeps_server_order() {
        let mut state = AppState::default();
        state.replace_ledger(vec![sample(3), sample(1), sample(2)]);
        let ids: Vec<i64> = state.apostas.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        state.replace_ledger(vec![sample(2)]);
        assert_eq!(state.apostas.len(), 1);
    }

    #[test]
    fn test_open_edit() {
        let mut state = AppState::default();
        state.replace_ledger(vec![sample(1), sample(2)]);

        assert!(!state.open_edit(ApostaId(99)));
        assert!(state.edit.is_none());

        assert!(state.open_edit(ApostaId(2)));
        let edit = state.edit.as_ref().unwrap();
        assert_eq!(edit.id, ApostaId(2));
        assert_eq!(edit.form.entrada, "20");
        assert_eq!(edit.form.preview_label(), "R$ 40,00");

        state.close_edit();
        assert!(state.edit.is_none());
    }

    #[test]
    fn test_tabs_and_add_form() {
        let mut state = AppState::default();
        state.show_register_tab();
        assert_eq!(state.auth_tab, AuthTab::Register);
        state.show_login_tab();
        assert_eq!(state.auth_tab, AuthTab::Login);

        state.show_add_form();
        assert!(state.entry_open);
        state.hide_add_form();
        assert!(!state.entry_open);
    }
}
