//! The complaint store.
//!
//! Sole owner of the persisted complaint collection. Every operation is one
//! read-modify-write of the whole slot, serialized by an in-process lock.

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::config::{CorruptSlotPolicy, StoreConfig};
use crate::error::StoreError;
use crate::logging::structured::LogContext;
use crate::validation::transition::TransitionPolicy;
use crate::{log_debug, log_error, log_info, log_warn};

use super::backend::PersistenceBackend;
use super::clock::{Clock, SystemClock};
use super::ids::IdGenerator;
use super::models::{Complaint, ComplaintDraft, ComplaintStatus};

/// Outcome of [`ComplaintStore::apply_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// The whole collection after the update.
    pub complaints: Vec<Complaint>,
    /// Status before the update; `None` when the id was not found.
    pub previous: Option<ComplaintStatus>,
}

/// Complaint collection bound to one persistence slot.
pub struct ComplaintStore {
    backend: Arc<dyn PersistenceBackend>,
    clock: Box<dyn Clock>,
    slot: String,
    default_user: String,
    transitions: TransitionPolicy,
    corrupt_slot: CorruptSlotPolicy,
    max_image_bytes: usize,
    // Held for the whole read-modify-write of each mutating call.
    ids: Mutex<IdGenerator>,
    log_ctx: LogContext,
}

impl ComplaintStore {
    pub fn new(backend: Arc<dyn PersistenceBackend>, config: &StoreConfig) -> Self {
        let store_id = format!("store-{}", &Uuid::new_v4().simple().to_string()[..8]);
        let log_ctx = LogContext::new(&store_id);

        log_info!(
            log_ctx,
            "STORE_OPEN",
            backend = backend.describe(),
            slot = config.slot_name,
            transitions = config.transition_policy.as_str(),
            corrupt_slot = config.corrupt_slot_policy.as_str(),
        );

        Self {
            backend,
            clock: Box::new(SystemClock),
            slot: config.slot_name.clone(),
            default_user: config.default_user.clone(),
            transitions: config.transition_policy,
            corrupt_slot: config.corrupt_slot_policy,
            max_image_bytes: config.max_image_bytes,
            ids: Mutex::new(IdGenerator::new()),
            log_ctx,
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Largest decoded photo accepted on submission.
    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes
    }

    /// All complaints, newest first.
    ///
    /// A missing, unreadable or undecodable slot reads as empty.
    pub fn list(&self) -> Vec<Complaint> {
        match self.try_list() {
            Ok(complaints) => complaints,
            Err(e) => {
                log_warn!(self.log_ctx, "LIST_FALLBACK_EMPTY", error = e.to_string());
                Vec::new()
            }
        }
    }

    /// All complaints, newest first, surfacing backend and decode errors.
    pub fn try_list(&self) -> Result<Vec<Complaint>, StoreError> {
        let _guard = self.ids.lock();
        self.load()
    }

    /// Create a complaint from `draft` and put it at the head of the list.
    ///
    /// `user` defaults to the configured placeholder identity.
    pub fn add(&self, draft: ComplaintDraft, user: Option<&str>) -> Result<Complaint, StoreError> {
        let mut ids = self.ids.lock();
        let mut complaints = self.load_for_write()?;

        let now = self.clock.now();
        let max_existing = complaints.iter().map(|c| c.id).max();
        let id = match ids.next(now.timestamp_millis(), max_existing) {
            Some(id) => id,
            None => {
                log_error!(
                    self.log_ctx,
                    "ID_SPACE_EXHAUSTED",
                    slot = self.slot,
                    max_existing = max_existing,
                );
                return Err(StoreError::IdSpaceExhausted {
                    slot: self.slot.clone(),
                    max_existing: max_existing.unwrap_or_default(),
                });
            }
        };

        let complaint = Complaint {
            id,
            user: user
                .map(str::to_string)
                .unwrap_or_else(|| self.default_user.clone()),
            location: draft.location,
            district: draft.district,
            severity: draft.severity,
            status: ComplaintStatus::Pending,
            date: now.date_naive(),
            description: draft.description,
            image: draft.image,
        };

        complaints.insert(0, complaint.clone());
        self.persist(&complaints)?;

        log_info!(
            self.log_ctx.with_complaint(id),
            "COMPLAINT_ADDED",
            district = complaint.district.as_str(),
            severity = complaint.severity.as_str(),
            has_image = complaint.image.is_some(),
            total = complaints.len(),
        );

        Ok(complaint)
    }

    /// Set the status of complaint `id` and return the whole collection.
    ///
    /// An unknown id leaves the collection unchanged. Nothing is written
    /// unless a status actually changes.
    pub fn update_status(
        &self,
        id: u64,
        status: ComplaintStatus,
    ) -> Result<Vec<Complaint>, StoreError> {
        self.apply_status(id, status).map(|update| update.complaints)
    }

    /// Like [`update_status`](Self::update_status), but also reports the
    /// status the complaint had before, read under the same lock.
    pub fn apply_status(
        &self,
        id: u64,
        status: ComplaintStatus,
    ) -> Result<StatusUpdate, StoreError> {
        let _guard = self.ids.lock();
        let mut complaints = self.load_for_write()?;
        let ctx = self.log_ctx.with_complaint(id);

        let record = match complaints.iter_mut().find(|c| c.id == id) {
            Some(record) => record,
            None => {
                log_warn!(ctx, "STATUS_UPDATE_NOT_FOUND", requested = status.as_str());
                return Ok(StatusUpdate {
                    complaints,
                    previous: None,
                });
            }
        };

        let from = record.status;
        if !self.transitions.allows(from, status) {
            log_warn!(
                ctx,
                "STATUS_TRANSITION_REJECTED",
                from = from.as_str(),
                to = status.as_str(),
                policy = self.transitions.as_str(),
            );
            return Err(StoreError::TransitionRejected { id, from, to: status });
        }

        if from == status {
            log_debug!(ctx, "STATUS_UNCHANGED", status = status.as_str());
            return Ok(StatusUpdate {
                complaints,
                previous: Some(from),
            });
        }

        record.status = status;
        self.persist(&complaints)?;

        log_info!(
            ctx,
            "STATUS_UPDATED",
            from = from.as_str(),
            to = status.as_str(),
        );

        Ok(StatusUpdate {
            complaints,
            previous: Some(from),
        })
    }

    fn load(&self) -> Result<Vec<Complaint>, StoreError> {
        let raw = self
            .backend
            .read(&self.slot)
            .map_err(|source| StoreError::Backend {
                slot: self.slot.clone(),
                source,
            })?;

        match raw {
            // An empty slot value reads the same as an unset one.
            Some(data) if !data.trim().is_empty() => {
                serde_json::from_str(&data).map_err(|source| StoreError::CorruptSlot {
                    slot: self.slot.clone(),
                    source,
                })
            }
            _ => Ok(Vec::new()),
        }
    }

    fn load_for_write(&self) -> Result<Vec<Complaint>, StoreError> {
        match self.load() {
            Err(err @ StoreError::CorruptSlot { .. }) => match self.corrupt_slot {
                CorruptSlotPolicy::TreatAsEmpty => {
                    log_warn!(
                        self.log_ctx,
                        "CORRUPT_SLOT_DISCARDED",
                        slot = self.slot,
                        error = err.to_string(),
                    );
                    Ok(Vec::new())
                }
                CorruptSlotPolicy::FailFast => {
                    log_error!(
                        self.log_ctx,
                        "CORRUPT_SLOT_WRITE_REFUSED",
                        slot = self.slot,
                        error = err.to_string(),
                    );
                    Err(err)
                }
            },
            other => other,
        }
    }

    fn persist(&self, complaints: &[Complaint]) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(complaints)?;
        self.backend
            .write(&self.slot, &encoded)
            .map_err(|source| StoreError::Backend {
                slot: self.slot.clone(),
                source,
            })?;

        log_debug!(
            self.log_ctx,
            "SLOT_WRITTEN",
            slot = self.slot,
            records = complaints.len(),
            bytes = encoded.len(),
        );
        Ok(())
    }
}
