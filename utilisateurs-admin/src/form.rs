//! Form controller
//!
//! Create or edit one record. The mode comes from the route; an edit
//! form loads its record on open. Local constraints are checked before
//! any gateway call and every remote rejection collapses to one message.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use validator::ValidationErrors;

use shared::StaleSignal;
use utilisateurs_client::{ClientResult, CrudGateway};

use crate::context::AppContext;
use crate::error::{AdminError, AdminResult};
use crate::navigation::Route;
use crate::screens::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Editing(i64),
}

#[derive(Debug)]
pub enum SubmitOutcome<E> {
    /// Local constraints failed, nothing was sent
    Invalid(ValidationErrors),
    Saved(E),
    Failed,
}

/// Scheduled navigation away from a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
}

pub struct FormController<E: Screen> {
    ctx: Arc<AppContext>,
    gateway: Arc<E::Gateway>,
    mode: FormMode,
    values: E,
    error: Option<String>,
    redirect: Option<JoinHandle<()>>,
}

impl<E: Screen> FormController<E> {
    pub fn new(ctx: Arc<AppContext>, gateway: Arc<E::Gateway>, mode: FormMode) -> Self {
        Self {
            ctx,
            gateway,
            mode,
            values: E::default(),
            error: None,
            redirect: None,
        }
    }

    /// Form for `/{resource}/new` or `/{resource}/{id}/edit`
    pub fn from_route(
        ctx: Arc<AppContext>,
        gateway: Arc<E::Gateway>,
        route: Route,
    ) -> AdminResult<Self> {
        let mode = match route {
            Route::New(resource) if resource == E::RESOURCE => FormMode::New,
            Route::Edit(resource, id) if resource == E::RESOURCE => FormMode::Editing(id),
            other => return Err(AdminError::InvalidRoute(other.path())),
        };
        Ok(Self::new(ctx, gateway, mode))
    }

    /// Load the edited record; a new form has nothing to load
    pub async fn open(&mut self) {
        let FormMode::Editing(id) = self.mode else {
            return;
        };

        let result = {
            let _busy = self.ctx.busy.begin();
            self.gateway.get(id).await
        };
        if let Some(redirect) = self.apply_loaded(result) {
            tracing::info!(to = %redirect.to, delay_ms = redirect.after.as_millis() as u64, "Redirect scheduled");
            self.redirect = Some(self.ctx.navigator.navigate_after(redirect.to, redirect.after));
        }
    }

    /// Apply the result of the initial load
    pub fn apply_loaded(&mut self, result: ClientResult<E>) -> Option<Redirect> {
        match result {
            Ok(record) => {
                self.values = record;
                None
            }
            Err(e) => {
                tracing::warn!(resource = %E::RESOURCE, error = %e, "Form record not loaded");
                self.error = Some(E::TEXT.not_loaded.to_string());
                E::REDIRECT_ON_LOAD_FAILURE.then(|| Redirect {
                    to: Route::List(E::RESOURCE),
                    after: self.ctx.redirect_delay,
                })
            }
        }
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> AdminResult<()> {
        self.values.set_field(field, value)
    }

    pub fn values(&self) -> &E {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut E {
        &mut self.values
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Inline error message
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Pending redirect task, if a failed load scheduled one
    pub fn take_redirect(&mut self) -> Option<JoinHandle<()>> {
        self.redirect.take()
    }

    pub async fn submit(&mut self) -> SubmitOutcome<E> {
        if let Err(errors) = self.values.validate() {
            tracing::debug!(resource = %E::RESOURCE, %errors, "Form invalid");
            return SubmitOutcome::Invalid(errors);
        }

        let mut payload = self.values.clone();
        let result = {
            let _busy = self.ctx.busy.begin();
            match self.mode {
                FormMode::New => {
                    payload.set_id(None);
                    self.gateway.create(&payload).await
                }
                FormMode::Editing(id) => {
                    payload.set_id(Some(id));
                    self.gateway.update(id, &payload).await
                }
            }
        };
        self.apply_submitted(result)
    }

    fn apply_submitted(&mut self, result: ClientResult<E>) -> SubmitOutcome<E> {
        match result {
            Ok(saved) => {
                tracing::info!(resource = %E::RESOURCE, id = ?saved.id(), "Record saved");
                self.error = None;
                self.ctx.stale.publish(StaleSignal::new(E::RESOURCE));
                self.ctx.navigator.navigate(Route::List(E::RESOURCE));
                SubmitOutcome::Saved(saved)
            }
            Err(_) => {
                let message = match self.mode {
                    FormMode::New => E::TEXT.create_failed,
                    FormMode::Editing(_) => E::TEXT.update_failed,
                };
                self.error = Some(message.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}
