//! List controller
//!
//! `ListView` holds the state and its transitions; `ListController`
//! runs the gateway calls around it under the busy indicator and turns
//! failures into notifications.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use shared::{Entity, Notification, Resource, StaleSignal, Vacataire};
use utilisateurs_client::{ClientResult, CrudGateway, VacataireGateway};

use crate::confirm::ConfirmPrompt;
use crate::context::AppContext;
use crate::navigation::Route;
use crate::screens::Screen;

const REACTIVATED: &str = "Vacataire réactivé avec succès";
const DEACTIVATED: &str = "Vacataire désactivé avec succès";
const STATUS_CHANGE_FAILED: &str = "Erreur lors du changement de statut";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}

/// Records and filter of one list view
#[derive(Debug, Clone)]
pub struct ListView<E> {
    state: ListState,
    records: Vec<E>,
    filter: String,
}

impl<E: Entity> ListView<E> {
    pub fn new() -> Self {
        Self {
            state: ListState::Idle,
            records: Vec::new(),
            filter: String::new(),
        }
    }

    pub fn begin_load(&mut self) {
        self.state = ListState::Loading;
    }

    /// Apply a load result; a failure keeps the previous records and
    /// yields the notification to show
    pub fn finish_load(
        &mut self,
        result: ClientResult<Vec<E>>,
        failure_message: &str,
    ) -> Option<Notification> {
        match result {
            Ok(records) => {
                self.records = records;
                self.state = ListState::Loaded;
                None
            }
            Err(_) => {
                self.state = ListState::LoadFailed;
                Some(Notification::error(failure_message))
            }
        }
    }

    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.trim().to_lowercase();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    /// Every stored record, ignoring the filter
    pub fn records(&self) -> &[E] {
        &self.records
    }

    /// Records matching the filter, in stored order
    pub fn visible(&self) -> Vec<&E> {
        self.records
            .iter()
            .filter(|record| matches_filter(*record, &self.filter))
            .collect()
    }
}

impl<E: Entity> Default for ListView<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// `needle` must already be trimmed and lowercased
pub fn matches_filter<E: Entity>(record: &E, needle: &str) -> bool {
    needle.is_empty()
        || format!("{} {}", record.nom(), record.prenom())
            .to_lowercase()
            .contains(needle)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Prompt declined, the gateway was not called
    Cancelled,
    Deleted,
    Failed,
}

pub struct ListController<E: Screen> {
    ctx: Arc<AppContext>,
    gateway: Arc<E::Gateway>,
    view: ListView<E>,
    stale_rx: mpsc::UnboundedReceiver<StaleSignal>,
    nav_rx: watch::Receiver<Route>,
}

impl<E: Screen> ListController<E> {
    pub fn new(ctx: Arc<AppContext>, gateway: Arc<E::Gateway>) -> Self {
        let stale_rx = ctx.stale.subscribe();
        let mut nav_rx = ctx.navigator.subscribe();
        nav_rx.mark_unchanged();
        Self {
            ctx,
            gateway,
            view: ListView::new(),
            stale_rx,
            nav_rx,
        }
    }

    /// View activation
    pub async fn open(&mut self) {
        self.load().await;
    }

    pub async fn load(&mut self) {
        let _busy = self.ctx.busy.begin();
        self.view.begin_load();
        let result = E::fetch_list(&*self.gateway).await;
        if let Ok(records) = &result {
            tracing::debug!(resource = %E::RESOURCE, count = records.len(), "List loaded");
        }
        if let Some(notification) = self.view.finish_load(result, E::TEXT.load_failed) {
            self.ctx.notifications.emit(notification);
        }
    }

    pub fn set_filter(&mut self, text: &str) {
        self.view.set_filter(text);
    }

    pub fn visible(&self) -> Vec<&E> {
        self.view.visible()
    }

    pub fn view(&self) -> &ListView<E> {
        &self.view
    }

    /// Confirm, delete, then reload; on failure the current list stays
    pub async fn delete(&mut self, id: i64, prompt: &dyn ConfirmPrompt) -> DeleteOutcome {
        if !prompt.confirm(E::TEXT.confirm_delete).await {
            tracing::debug!(resource = %E::RESOURCE, id, "Delete cancelled");
            return DeleteOutcome::Cancelled;
        }

        let result = {
            let _busy = self.ctx.busy.begin();
            self.gateway.delete(id).await
        };

        match result {
            Ok(()) => {
                self.ctx.notifications.success(E::TEXT.deleted);
                self.load().await;
                DeleteOutcome::Deleted
            }
            Err(_) => {
                self.ctx.notifications.error(E::TEXT.delete_failed);
                DeleteOutcome::Failed
            }
        }
    }

    /// Reload once if the data went stale or, for screens that reload on
    /// return, navigation came back to this list. Returns whether it
    /// reloaded.
    pub async fn sync(&mut self) -> bool {
        let mut stale = false;
        while let Ok(signal) = self.stale_rx.try_recv() {
            stale |= signal.resource == E::RESOURCE;
        }

        if self.nav_rx.has_changed().unwrap_or(false) {
            let route = *self.nav_rx.borrow_and_update();
            stale |= E::RELOAD_ON_RETURN && route == Route::List(E::RESOURCE);
        }

        if stale {
            tracing::debug!(resource = %E::RESOURCE, "Reloading stale list");
            self.load().await;
        }
        stale
    }
}

impl ListController<Vacataire> {
    pub async fn activate(&mut self, id: i64) -> bool {
        let result = {
            let _busy = self.ctx.busy.begin();
            self.gateway.activate(id).await
        };
        self.after_transition(result.map(|_| ()), REACTIVATED).await
    }

    pub async fn deactivate(&mut self, id: i64) -> bool {
        let result = {
            let _busy = self.ctx.busy.begin();
            self.gateway.deactivate(id).await
        };
        self.after_transition(result.map(|_| ()), DEACTIVATED).await
    }

    async fn after_transition(&mut self, result: ClientResult<()>, success: &str) -> bool {
        match result {
            Ok(()) => {
                self.ctx.notifications.success(success);
                self.ctx.stale.publish(StaleSignal::new(Resource::Vacataires));
                self.sync().await;
                true
            }
            Err(_) => {
                self.ctx.notifications.error(STATUS_CHANGE_FAILED);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGateway, ScriptedPrompt, vacataire};
    use shared::{Enseignant, NotificationLevel};
    use utilisateurs_client::ErrorKind;

    fn enseignant(id: i64, nom: &str, prenom: &str) -> Enseignant {
        Enseignant {
            id: Some(id),
            nom: nom.to_string(),
            prenom: prenom.to_string(),
            email: format!("{}@univ.sn", nom.to_lowercase()),
            telephone: "771234567".to_string(),
            ..Enseignant::default()
        }
    }

    fn vacataire_list(
        ctx: &Arc<AppContext>,
        records: Vec<Vacataire>,
    ) -> (Arc<FakeGateway<Vacataire>>, ListController<Vacataire>) {
        let fake = Arc::new(FakeGateway::new(records));
        let gateway: Arc<dyn VacataireGateway> = fake.clone();
        (fake, ListController::new(ctx.clone(), gateway))
    }

    #[test]
    fn test_filter_matches_nom_and_prenom_case_insensitively() {
        let mut view = ListView::new();
        view.finish_load(
            Ok(vec![enseignant(1, "Diop", "Awa"), enseignant(2, "Fall", "Moussa")]),
            "",
        );

        view.set_filter("  DIOP ");
        assert_eq!(view.visible().len(), 1);
        view.set_filter("moussa");
        assert_eq!(view.visible()[0].id, Some(2));
        view.set_filter("diop awa");
        assert_eq!(view.visible().len(), 1);
        view.set_filter("");
        assert_eq!(view.visible().len(), 2);
    }

    #[test]
    fn test_filter_commutes_with_reload() {
        let data = vec![enseignant(1, "Diop", "Awa"), enseignant(2, "Fall", "Moussa")];

        let mut filtered_first = ListView::new();
        filtered_first.set_filter("fall");
        filtered_first.finish_load(Ok(data.clone()), "");

        let mut loaded_first = ListView::new();
        loaded_first.finish_load(Ok(data), "");
        loaded_first.set_filter("fall");
        let once = loaded_first.visible().len();
        loaded_first.set_filter("fall");

        assert_eq!(filtered_first.visible(), loaded_first.visible());
        assert_eq!(once, loaded_first.visible().len());
    }

    #[test]
    fn test_failed_load_keeps_previous_records() {
        let mut view = ListView::new();
        view.finish_load(Ok(vec![enseignant(1, "Diop", "Awa")]), "");

        view.begin_load();
        let notification = view.finish_load(
            Err(utilisateurs_client::ClientError::Internal("down".into())),
            "Erreur chargement enseignants",
        );

        assert_eq!(view.state(), ListState::LoadFailed);
        assert_eq!(view.records().len(), 1);
        assert_eq!(notification.unwrap().level, NotificationLevel::Error);
    }

    #[tokio::test]
    async fn test_vacataire_list_uses_unfiltered_listing() {
        let ctx = AppContext::new();
        let (fake, mut list) = vacataire_list(
            &ctx,
            vec![vacataire(1, "Sarr", "Ali", true), vacataire(2, "Ba", "Fatou", false)],
        );

        list.open().await;
        list.set_filter("dup");

        assert_eq!(fake.calls(), vec!["all"]);
        assert_eq!(list.view().state(), ListState::Loaded);
        assert!(list.visible().is_empty());
        assert_eq!(list.view().records().len(), 2);
        assert!(!ctx.busy.is_visible());
    }

    #[tokio::test]
    async fn test_load_failure_notifies_and_clears_busy() {
        let ctx = AppContext::new();
        let mut toasts = ctx.notifications.subscribe();
        let fake = Arc::new(FakeGateway::<Enseignant>::new(vec![]));
        fake.fail("list", ErrorKind::Transport);
        let mut list = ListController::<Enseignant>::new(ctx.clone(), fake.clone());

        list.open().await;

        assert_eq!(list.view().state(), ListState::LoadFailed);
        assert_eq!(toasts.try_recv().unwrap(), Notification::error("Erreur chargement enseignants"));
        assert!(!ctx.busy.is_visible());
    }

    #[tokio::test]
    async fn test_declined_delete_never_calls_gateway() {
        let ctx = AppContext::new();
        let fake = Arc::new(FakeGateway::new(vec![enseignant(1, "Diop", "Awa")]));
        let mut list = ListController::<Enseignant>::new(ctx, fake.clone());
        list.open().await;

        let prompt = ScriptedPrompt::answering(false);
        let outcome = list.delete(1, &prompt).await;

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(prompt.asked(), 1);
        assert_eq!(fake.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_confirmed_delete_reloads_full_list() {
        let ctx = AppContext::new();
        let mut toasts = ctx.notifications.subscribe();
        let fake = Arc::new(FakeGateway::new(vec![
            enseignant(1, "Diop", "Awa"),
            enseignant(2, "Fall", "Moussa"),
        ]));
        let mut list = ListController::<Enseignant>::new(ctx, fake.clone());
        list.open().await;

        let outcome = list.delete(1, &ScriptedPrompt::answering(true)).await;

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(fake.calls(), vec!["list", "delete 1", "list"]);
        assert_eq!(list.view().records().len(), 1);
        assert_eq!(toasts.try_recv().unwrap(), Notification::success("Enseignant supprimé avec succès"));
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_list_untouched() {
        let ctx = AppContext::new();
        let mut toasts = ctx.notifications.subscribe();
        let fake = Arc::new(FakeGateway::new(vec![enseignant(1, "Diop", "Awa")]));
        fake.fail("delete", ErrorKind::Transport);
        let mut list = ListController::<Enseignant>::new(ctx.clone(), fake.clone());
        list.open().await;

        let outcome = list.delete(1, &ScriptedPrompt::answering(true)).await;

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert_eq!(fake.calls(), vec!["list", "delete 1"]);
        assert_eq!(list.view().records().len(), 1);
        assert_eq!(toasts.try_recv().unwrap(), Notification::error("Erreur lors de la suppression"));
        assert!(!ctx.busy.is_visible());
    }

    #[tokio::test]
    async fn test_deactivate_notifies_and_reloads_once() {
        let ctx = AppContext::new();
        let mut toasts = ctx.notifications.subscribe();
        let (fake, mut list) = vacataire_list(&ctx, vec![vacataire(1, "Sarr", "Ali", true)]);
        list.open().await;

        assert!(list.deactivate(1).await);

        assert_eq!(fake.calls(), vec!["all", "deactivate 1", "all"]);
        assert!(!list.view().records()[0].actif);
        assert_eq!(toasts.try_recv().unwrap(), Notification::success(DEACTIVATED));
        assert!(!list.sync().await);
    }

    #[tokio::test]
    async fn test_failed_activate_reports_status_error() {
        let ctx = AppContext::new();
        let mut toasts = ctx.notifications.subscribe();
        let (fake, mut list) = vacataire_list(&ctx, vec![vacataire(1, "Sarr", "Ali", false)]);
        fake.fail("activate", ErrorKind::Transport);
        list.open().await;

        assert!(!list.activate(1).await);
        assert_eq!(fake.calls(), vec!["all", "activate 1"]);
        assert_eq!(toasts.try_recv().unwrap(), Notification::error(STATUS_CHANGE_FAILED));
    }

    #[tokio::test]
    async fn test_sync_reloads_on_stale_signal_for_same_resource() {
        let ctx = AppContext::new();
        let fake = Arc::new(FakeGateway::new(vec![enseignant(1, "Diop", "Awa")]));
        let mut list = ListController::<Enseignant>::new(ctx.clone(), fake.clone());
        list.open().await;

        ctx.stale.publish(StaleSignal::new(Resource::Etudiants));
        assert!(!list.sync().await);

        ctx.stale.publish(StaleSignal::new(Resource::Enseignants));
        ctx.stale.publish(StaleSignal::new(Resource::Enseignants));
        assert!(list.sync().await);
        assert_eq!(fake.calls(), vec!["list", "list"]);
    }

    #[tokio::test]
    async fn test_vacataire_list_reloads_when_navigation_returns() {
        let ctx = AppContext::new();
        let (fake, mut list) = vacataire_list(&ctx, vec![vacataire(1, "Sarr", "Ali", true)]);
        list.open().await;

        ctx.navigator.navigate(Route::Edit(Resource::Vacataires, 1));
        assert!(!list.sync().await);
        ctx.navigator.navigate(Route::List(Resource::Vacataires));
        assert!(list.sync().await);

        assert_eq!(fake.calls(), vec!["all", "all"]);
    }

    #[tokio::test]
    async fn test_enseignant_list_ignores_navigation_return() {
        let ctx = AppContext::new();
        let fake = Arc::new(FakeGateway::new(vec![enseignant(1, "Diop", "Awa")]));
        let mut list = ListController::<Enseignant>::new(ctx.clone(), fake.clone());
        list.open().await;

        ctx.navigator.navigate(Route::List(Resource::Enseignants));

        assert!(!list.sync().await);
        assert_eq!(fake.calls(), vec!["list"]);
    }
}
