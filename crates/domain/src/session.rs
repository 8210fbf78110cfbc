use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Deref;
use log::debug;
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

use crate::{
    CompletionContext, CompletionSnapshot, EngineConfig, Goal, Label, LoggedSet, MetricProfile,
    Name, SessionError, SessionMetrics, aggregate_sets, build_completion_snapshot, purge_sets,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SessionStatus {
    #[default]
    #[strum(to_string = "in_progress", serialize = "in-progress", serialize = "active")]
    InProgress,
    #[strum(to_string = "completed", serialize = "complete", serialize = "finished")]
    Completed,
}

/// An exercise as performed in one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionExercise {
    pub name: Name,
    pub primary_muscles: Vec<Label>,
    pub secondary_muscles: Vec<Label>,
    pub profile: MetricProfile,
    pub e1rm_eligible: bool,
    pub order: u32,
    pub sets: Vec<LoggedSet>,
}

impl SessionExercise {
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            name,
            primary_muscles: vec![],
            secondary_muscles: vec![],
            profile: MetricProfile::default(),
            e1rm_eligible: false,
            order: 0,
            sets: vec![],
        }
    }

    #[must_use]
    pub fn completed_sets(&self) -> Vec<&LoggedSet> {
        self.sets.iter().filter(|s| s.completed).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionID,
    pub user_id: UserID,
    pub focus: Vec<Label>,
    pub goal: Option<Goal>,
    pub intensity: Option<Label>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: SessionStatus,
    pub body_weight_kg: Option<f32>,
    pub exercises: Vec<SessionExercise>,
    pub snapshot: Option<CompletionSnapshot>,
}

impl Session {
    #[must_use]
    pub fn new(id: SessionID, user_id: UserID) -> Self {
        Self {
            id,
            user_id,
            focus: vec![],
            goal: None,
            intensity: None,
            started_at: None,
            ended_at: None,
            status: SessionStatus::InProgress,
            body_weight_kg: None,
            exercises: vec![],
            snapshot: None,
        }
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.id.is_nil() {
            return Err(SessionError::MissingId);
        }

        if self.user_id.is_nil() {
            return Err(SessionError::MissingUser);
        }

        Ok(())
    }

    /// Day the session is attributed to.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.started_at.or(self.ended_at).map(|t| t.date_naive())
    }

    #[must_use]
    pub fn sets(&self) -> Vec<&LoggedSet> {
        self.exercises.iter().flat_map(|e| &e.sets).collect()
    }

    #[must_use]
    pub fn live_metrics(&self, config: &EngineConfig) -> SessionMetrics {
        aggregate_sets(self.started_at, self.ended_at, self.sets(), config)
    }

    /// Metrics of the session, taken from the completion snapshot if present.
    #[must_use]
    pub fn metrics(&self, config: &EngineConfig) -> SessionMetricsView {
        match &self.snapshot {
            Some(snapshot) => SessionMetricsView {
                source: MetricsSource::Snapshot,
                metrics: snapshot.metrics,
            },
            None => SessionMetricsView {
                source: MetricsSource::Live,
                metrics: self.live_metrics(config),
            },
        }
    }

    /// Finish the session.
    ///
    /// Sets that do not qualify for the snapshot are removed permanently. A
    /// missing end time is set to `ended_at`.
    pub fn complete(
        &mut self,
        ended_at: DateTime<Utc>,
        context: &CompletionContext,
    ) -> Result<&CompletionSnapshot, SessionError> {
        self.validate()?;

        if self.status == SessionStatus::Completed || self.snapshot.is_some() {
            return Err(SessionError::AlreadyCompleted);
        }

        if self.ended_at.is_none() {
            self.ended_at = Some(ended_at);
        }

        let purged = purge_sets(&mut self.exercises);
        if purged > 0 {
            debug!("purged {purged} set(s) from session {}", *self.id);
        }
        self.exercises.retain(|e| !e.sets.is_empty());

        self.status = SessionStatus::Completed;
        let snapshot = build_completion_snapshot(self, context);
        Ok(self.snapshot.insert(snapshot))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum MetricsSource {
    Snapshot,
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionMetricsView {
    pub source: MetricsSource,
    pub metrics: SessionMetrics,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionID(Uuid);

impl SessionID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
