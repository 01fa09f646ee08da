//! User activities and the fetch-once-per-identity tracker that guards
//! loading them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::error::{FetchError, Result};

/// Opaque identifier handed out by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Signed-in user as exposed by the auth context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A recorded activity. Only `activity_name` is interpreted; any other
/// field the backend sends is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub activity_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActivityRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            activity_name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Response of the user activities action (mirrors backend payload).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitiesResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<ActivityRecord>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ActivitiesResponse {
    /// Successful responses without `data` count as an empty list.
    pub fn into_result(self) -> Result<Vec<ActivityRecord>> {
        if self.success {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(FetchError::Failure(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// Backend action that returns the activities recorded for a user.
#[async_trait(?Send)]
pub trait ActivitySource {
    async fn user_activities(&self, user: &UserId) -> Result<Vec<ActivityRecord>>;
}

/// Handle for one issued fetch. Only the ticket of the most recent
/// request may commit its result.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub user: UserId,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    Started(FetchTicket),
    Finished(FetchTicket, Result<Vec<ActivityRecord>>),
}

/// Activities for the current identity together with the guard that
/// decides whether a new fetch is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityTracker {
    last_requested: Option<UserId>,
    generation: u64,
    loading: bool,
    activities: Vec<ActivityRecord>,
    error: Option<FetchError>,
}

impl Default for ActivityTracker {
    fn default() -> Self {
        Self {
            last_requested: None,
            generation: 0,
            // The grid is not shown until the first fetch has finished.
            loading: true,
            activities: Vec::new(),
            error: None,
        }
    }
}

impl ActivityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a ticket when `identity` is present and no fetch has been
    /// issued for it yet. Does not change state; apply
    /// [`TrackerEvent::Started`] with the ticket to record the request.
    pub fn request(&self, identity: Option<&UserId>) -> Option<FetchTicket> {
        let user = identity?;
        if self.last_requested.as_ref() == Some(user) {
            return None;
        }
        Some(FetchTicket {
            user: user.clone(),
            generation: self.generation + 1,
        })
    }

    pub fn apply(&mut self, event: TrackerEvent) {
        match event {
            TrackerEvent::Started(ticket) => {
                debug!(user = %ticket.user, generation = ticket.generation, "Activity fetch started");
                self.last_requested = Some(ticket.user);
                self.generation = ticket.generation;
                self.loading = true;
                self.error = None;
            }
            TrackerEvent::Finished(ticket, result) => {
                if ticket.generation != self.generation {
                    warn!(
                        user = %ticket.user,
                        generation = ticket.generation,
                        current = self.generation,
                        "Dropping stale activity response"
                    );
                    return;
                }
                self.loading = false;
                match result {
                    Ok(activities) => {
                        info!(user = %ticket.user, count = activities.len(), "Activities loaded");
                        self.activities = activities;
                        self.error = None;
                    }
                    Err(err) => {
                        warn!(user = %ticket.user, error = %err, "Falling back to empty activity list");
                        self.activities = Vec::new();
                        self.error = Some(err);
                    }
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn activities(&self) -> &[ActivityRecord] {
        &self.activities
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn last_requested(&self) -> Option<&UserId> {
        self.last_requested.as_ref()
    }

    /// 100 when some record matches `game_name` exactly, 0 otherwise or
    /// while loading.
    pub fn progress(&self, game_name: &str) -> u8 {
        if self.loading {
            return 0;
        }
        if self.activities.iter().any(|a| a.activity_name == game_name) {
            100
        } else {
            0
        }
    }
}

/// Boxed fetch that commits its result when awaited.
pub type PendingFetch = Pin<Box<dyn Future<Output = ()>>>;

/// Starts loading the activities of `identity` if `tracker` asks for it.
///
/// `apply` receives [`TrackerEvent::Started`] right away and
/// [`TrackerEvent::Finished`] once the returned future completes. `None`
/// means no fetch is needed and nothing was applied.
pub fn fetch_activities<F>(
    tracker: &ActivityTracker,
    source: Rc<dyn ActivitySource>,
    identity: Option<&UserId>,
    apply: F,
) -> Option<PendingFetch>
where
    F: Fn(TrackerEvent) + 'static,
{
    let ticket = tracker.request(identity)?;
    debug!(user = %ticket.user, generation = ticket.generation, "Requesting activities");
    apply(TrackerEvent::Started(ticket.clone()));

    Some(Box::pin(async move {
        let result = source.user_activities(&ticket.user).await;
        apply(TrackerEvent::Finished(ticket, result));
    }))
}
