//! Session/view state machine and polling lifecycle.
//!
//! The `SessionController` owns the only pieces of mutable client state:
//! which view is visible (login vs dashboard), the poll timer handle, the
//! form error text, and the incidents table contents. Every mutation ends
//! by pushing a [`ViewState`] snapshot into the injected [`ViewSink`], so
//! the UI layer only ever reflects controller state.
//!
//! DESIGN
//! ======
//! Network access goes through the [`Collaborator`] trait and timer
//! creation through [`PollScheduler`], so tests can substitute recording
//! fakes and drive the full state machine natively. The controller is
//! cheaply cloneable (shared `Rc` interior) so event closures and the
//! poll-tick effect all act on the same state. Borrows are never held
//! across an await.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::net::api::Collaborator;
use crate::state::incidents::IncidentsState;
use crate::state::session::{Session, validate_registration};

/// Fixed delay between incident fetches while the dashboard is visible.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Renderable snapshot of the controller state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub session: Session,
    pub login_error: Option<String>,
    pub register_error: Option<String>,
    pub incidents: IncidentsState,
}

/// Receives a snapshot after every controller mutation.
///
/// The real implementation writes into a Leptos signal; tests record the
/// sequence of snapshots.
pub trait ViewSink {
    fn render(&self, view: &ViewState);
}

/// Creates the repeating poll timer.
///
/// Dropping the returned handle must cancel the underlying timer; the
/// controller relies on this to guarantee at most one timer is ever live.
pub trait PollScheduler {
    type Handle;

    fn schedule(&self, period: Duration) -> Self::Handle;
}

struct Inner<H> {
    session: Session,
    login_error: Option<String>,
    register_error: Option<String>,
    incidents: IncidentsState,
    poll: Option<H>,
}

impl<H> Default for Inner<H> {
    fn default() -> Self {
        Self {
            session: Session::default(),
            login_error: None,
            register_error: None,
            incidents: IncidentsState::default(),
            poll: None,
        }
    }
}

/// The session/view state machine.
pub struct SessionController<C, V, P: PollScheduler> {
    net: C,
    sink: V,
    scheduler: P,
    inner: Rc<RefCell<Inner<P::Handle>>>,
}

// Manual impl: a derive would also require `P::Handle: Clone`, but the
// handle is shared through the `Rc` and never cloned itself.
impl<C: Clone, V: Clone, P: PollScheduler + Clone> Clone for SessionController<C, V, P> {
    fn clone(&self) -> Self {
        Self {
            net: self.net.clone(),
            sink: self.sink.clone(),
            scheduler: self.scheduler.clone(),
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C, V, P> SessionController<C, V, P>
where
    C: Collaborator,
    V: ViewSink,
    P: PollScheduler,
{
    pub fn new(net: C, sink: V, scheduler: P) -> Self {
        Self {
            net,
            sink,
            scheduler,
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    /// Current renderable state.
    pub fn snapshot(&self) -> ViewState {
        let inner = self.inner.borrow();
        ViewState {
            session: inner.session,
            login_error: inner.login_error.clone(),
            register_error: inner.register_error.clone(),
            incidents: inner.incidents.clone(),
        }
    }

    fn push(&self) {
        let view = self.snapshot();
        self.sink.render(&view);
    }

    /// Show the dashboard, start polling, and fetch incidents once.
    ///
    /// Any previously scheduled timer is cancelled before the replacement
    /// is created.
    pub async fn enter_dashboard(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.session = Session::LoggedIn;
            inner.poll = None;
            inner.poll = Some(self.scheduler.schedule(POLL_INTERVAL));
        }
        self.push();
        self.refresh_incidents().await;
    }

    /// Show the login view, stop polling, and drop any fetched incidents.
    ///
    /// Idempotent: safe to call when already logged out.
    pub fn enter_login(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.session = Session::LoggedOut;
            inner.poll = None;
            inner.incidents = IncidentsState::default();
        }
        self.push();
    }

    /// Send credentials to the login endpoint and map the outcome to view
    /// state. Rejections and transport failures surface as inline error
    /// text and leave the session logged out; there is no automatic retry.
    pub async fn submit_login(&self, username: &str, password: &str) {
        match self.net.login(username, password).await {
            Ok(()) => {
                self.inner.borrow_mut().login_error = None;
                self.enter_dashboard().await;
            }
            Err(err) => {
                self.inner.borrow_mut().login_error = Some(err.user_message("Login failed"));
                self.push();
            }
        }
    }

    /// Validate locally, then register. The two checks short-circuit before
    /// any network call; a passing registration behaves exactly like a
    /// login against the register endpoint.
    pub async fn submit_registration(&self, username: &str, password: &str, confirm: &str) {
        if let Err(message) = validate_registration(password, confirm) {
            self.inner.borrow_mut().register_error = Some(message.to_owned());
            self.push();
            return;
        }

        match self.net.register(username, password).await {
            Ok(()) => {
                self.inner.borrow_mut().register_error = None;
                self.enter_dashboard().await;
            }
            Err(err) => {
                self.inner.borrow_mut().register_error =
                    Some(err.user_message("Registration failed"));
                self.push();
            }
        }
    }

    /// Notify the service, then return to the login view regardless of the
    /// outcome. Logout always succeeds from the user's perspective.
    pub async fn logout(&self) {
        if let Err(err) = self.net.logout().await {
            log::warn!("logout request failed: {err}");
        }
        self.enter_login();
    }

    /// Replace the incidents table with a fresh fetch.
    ///
    /// The table shows the loading placeholder while the request is
    /// outstanding. The session is re-checked before issuing the request
    /// (timer ticks racing a logout do nothing) and again before applying
    /// the result, so a response landing after logout never repaints the
    /// table. Overlapping refreshes are last-write-wins.
    pub async fn refresh_incidents(&self) {
        if self.inner.borrow().session != Session::LoggedIn {
            return;
        }

        self.inner.borrow_mut().incidents = IncidentsState::Loading;
        self.push();

        let result = self.net.fetch_incidents().await;

        if self.inner.borrow().session != Session::LoggedIn {
            return;
        }

        self.inner.borrow_mut().incidents = match result {
            Ok(incidents) => IncidentsState::Loaded(incidents),
            Err(err) => {
                log::warn!("incident fetch failed: {err}");
                IncidentsState::Failed
            }
        };
        self.push();
    }

    /// Clear both forms' error text (used when the login/register tab
    /// changes).
    pub fn clear_errors(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.login_error = None;
            inner.register_error = None;
        }
        self.push();
    }
}
