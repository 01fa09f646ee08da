use arcade_common::{ActivitiesResponse, ActivityRecord, ActivitySource, FetchError, UserId};
use async_trait::async_trait;
use crate::api_client;

/// Activity source backed by `GET /users/{id}/activities`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HttpActivitySource;

impl HttpActivitySource {
    pub fn new() -> Self {
        Self
    }
}

/// Get the activities recorded for a user
pub async fn get_user_activities(user: &UserId) -> Result<ActivitiesResponse, String> {
    log::trace!("Fetching activities for user: {}", user);
    let user_segment = String::from(js_sys::encode_uri_component(user.as_str()));
    let result = api_client::get::<ActivitiesResponse>(&format!("/users/{}/activities", user_segment)).await;
    match &result {
        Ok(response) if response.success => log::info!(
            "Fetched {} activities for user {}",
            response.data.as_ref().map_or(0, Vec::len),
            user
        ),
        Ok(response) => log::error!(
            "Error fetching activities for user {}: {}",
            user,
            response.error.as_deref().unwrap_or("no error message")
        ),
        Err(e) => log::error!("Error fetching activities for user {}: {}", user, e),
    }
    result
}

#[async_trait(?Send)]
impl ActivitySource for HttpActivitySource {
    async fn user_activities(&self, user: &UserId) -> arcade_common::error::Result<Vec<ActivityRecord>> {
        get_user_activities(user)
            .await
            .map_err(FetchError::Fault)?
            .into_result()
    }
}
