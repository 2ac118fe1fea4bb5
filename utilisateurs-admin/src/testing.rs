//! In-memory gateway and prompt fakes for controller tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use shared::{Entity, Vacataire};
use utilisateurs_client::{ClientError, ClientResult, CrudGateway, ErrorKind, VacataireGateway};

use crate::confirm::ConfirmPrompt;
use crate::loading::BusyIndicator;

/// Gateway over a vector of records
///
/// Every call is logged (`"get 5"`, `"create"`, ...). `fail(op, kind)`
/// makes every later call of that operation fail with `kind`.
/// `observe_busy` records the indicator's pending count at each call.
pub struct FakeGateway<E> {
    records: Mutex<Vec<E>>,
    calls: Mutex<Vec<String>>,
    failures: Mutex<HashMap<&'static str, ErrorKind>>,
    writes: Mutex<Vec<E>>,
    busy: Mutex<Option<BusyIndicator>>,
    pending_seen: Mutex<Vec<usize>>,
}

impl<E: Entity> FakeGateway<E> {
    pub fn new(records: Vec<E>) -> Self {
        Self {
            records: Mutex::new(records),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            writes: Mutex::new(Vec::new()),
            busy: Mutex::new(None),
            pending_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn fail(&self, op: &'static str, kind: ErrorKind) {
        self.failures.lock().unwrap().insert(op, kind);
    }

    pub fn observe_busy(&self, busy: &BusyIndicator) {
        *self.busy.lock().unwrap() = Some(busy.clone());
    }

    /// Pending count seen inside each call, in call order
    pub fn pending_seen(&self) -> Vec<usize> {
        self.pending_seen.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Payloads received by create and update, in order
    pub fn writes(&self) -> Vec<E> {
        self.writes.lock().unwrap().clone()
    }

    pub fn records(&self) -> Vec<E> {
        self.records.lock().unwrap().clone()
    }

    fn record_call(&self, op: &'static str, id: Option<i64>) -> ClientResult<()> {
        let call = match id {
            Some(id) => format!("{} {}", op, id),
            None => op.to_string(),
        };
        self.calls.lock().unwrap().push(call.clone());
        if let Some(busy) = self.busy.lock().unwrap().as_ref() {
            self.pending_seen.lock().unwrap().push(busy.pending());
        }

        match self.failures.lock().unwrap().get(op) {
            None => Ok(()),
            Some(ErrorKind::NotFound) => Err(ClientError::NotFound(call)),
            Some(ErrorKind::Validation) => Err(ClientError::Validation(call)),
            Some(ErrorKind::Transport) => Err(ClientError::Status {
                status: 500,
                body: call,
            }),
        }
    }

    fn find(&self, id: i64) -> ClientResult<E> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("{} {}", E::RESOURCE, id)))
    }
}

#[async_trait]
impl<E: Entity> CrudGateway<E> for FakeGateway<E> {
    async fn list(&self) -> ClientResult<Vec<E>> {
        self.record_call("list", None)?;
        Ok(self.records())
    }

    async fn get(&self, id: i64) -> ClientResult<E> {
        self.record_call("get", Some(id))?;
        self.find(id)
    }

    async fn create(&self, entity: &E) -> ClientResult<E> {
        self.record_call("create", None)?;
        self.writes.lock().unwrap().push(entity.clone());

        let mut records = self.records.lock().unwrap();
        let next_id = records.iter().filter_map(|r| r.id()).max().unwrap_or(0) + 1;
        let mut created = entity.clone();
        created.set_id(Some(next_id));
        records.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, entity: &E) -> ClientResult<E> {
        self.record_call("update", Some(id))?;
        self.writes.lock().unwrap().push(entity.clone());

        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or_else(|| ClientError::Validation(format!("no record {}", id)))?;
        *slot = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.record_call("delete", Some(id))?;
        self.records.lock().unwrap().retain(|r| r.id() != Some(id));
        Ok(())
    }
}

impl FakeGateway<Vacataire> {
    fn set_actif(&self, id: i64, actif: bool) -> ClientResult<Vacataire> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| ClientError::Status {
                status: 404,
                body: String::new(),
            })?;
        record.actif = actif;
        Ok(record.clone())
    }
}

#[async_trait]
impl VacataireGateway for FakeGateway<Vacataire> {
    async fn list_including_inactive(&self) -> ClientResult<Vec<Vacataire>> {
        self.record_call("all", None)?;
        Ok(self.records())
    }

    async fn activate(&self, id: i64) -> ClientResult<Vacataire> {
        self.record_call("activate", Some(id))?;
        self.set_actif(id, true)
    }

    async fn deactivate(&self, id: i64) -> ClientResult<Vacataire> {
        self.record_call("deactivate", Some(id))?;
        self.set_actif(id, false)
    }
}

/// Prompt with a fixed answer that remembers the questions asked
pub struct ScriptedPrompt {
    answer: bool,
    asked: AtomicUsize,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfirmPrompt for ScriptedPrompt {
    async fn confirm(&self, _message: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

pub fn vacataire(id: i64, nom: &str, prenom: &str, actif: bool) -> Vacataire {
    Vacataire {
        id: Some(id),
        nom: nom.to_string(),
        prenom: prenom.to_string(),
        email: format!("{}@univ.sn", nom.to_lowercase()),
        telephone: "771234567".to_string(),
        specialite: None,
        actif,
    }
}
