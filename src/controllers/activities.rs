// ABOUTME: Activities controller holding the pagination cursor, cached listing and statistics
// ABOUTME: Wraps CRUD calls and refreshes the list and statistics after every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroU32;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::errors::ClientResult;
use crate::models::{Activity, ActivityStats};
use crate::pagination::{ActivityFilters, ActivityPage, PageCursor};

#[derive(Debug, Default)]
struct ActivitiesState {
    cursor: PageCursor,
    activity_type: Option<String>,
    activities: Vec<Activity>,
    statistics: Option<ActivityStats>,
}

/// Orchestrates the activity endpoints for view code
pub struct ActivitiesController {
    api: Arc<ApiClient>,
    state: Mutex<ActivitiesState>,
    mutations: AsyncMutex<()>,
}

impl ActivitiesController {
    /// New controller on page 1 with the given page size
    #[must_use]
    pub fn new(api: Arc<ApiClient>, per_page: NonZeroU32) -> Self {
        Self {
            api,
            state: Mutex::new(ActivitiesState {
                cursor: PageCursor::with_per_page(per_page),
                ..ActivitiesState::default()
            }),
            mutations: AsyncMutex::new(()),
        }
    }

    /// Fetch a listing page
    ///
    /// Explicit filter values win over the cursor, which is not modified. The
    /// type filter is remembered for [`next`](Self::next) and
    /// [`previous`](Self::previous).
    ///
    /// # Errors
    ///
    /// Propagates the request failure; the cached list is kept in that case
    pub async fn list(&self, filters: &ActivityFilters) -> ClientResult<ActivityPage> {
        let merged = {
            let mut state = self.lock_state();
            state.activity_type.clone_from(&filters.activity_type);
            filters.merged_over(&state.cursor)
        };
        self.fetch(&merged).await
    }

    /// Fetch one activity
    ///
    /// # Errors
    ///
    /// Propagates the request failure
    pub async fn get(&self, id: i64) -> ClientResult<Activity> {
        self.api.get_activity(id).await
    }

    /// Create an activity, then refresh list and statistics
    ///
    /// # Errors
    ///
    /// Propagates the creation failure or a failed list refresh
    pub async fn create<T: Serialize + ?Sized>(&self, activity: &T) -> ClientResult<Value> {
        let _guard = self.mutations.lock().await;
        let response = self.api.create_activity(activity).await?;
        info!("Activity created");
        self.refresh_after_mutation().await?;
        Ok(response)
    }

    /// Update an activity, then refresh list and statistics
    ///
    /// # Errors
    ///
    /// Propagates the update failure or a failed list refresh
    pub async fn update<T: Serialize + ?Sized>(&self, id: i64, activity: &T) -> ClientResult<Value> {
        let _guard = self.mutations.lock().await;
        let response = self.api.update_activity(id, activity).await?;
        info!(activity_id = id, "Activity updated");
        self.refresh_after_mutation().await?;
        Ok(response)
    }

    /// Delete an activity, then refresh list and statistics
    ///
    /// # Errors
    ///
    /// Propagates the deletion failure or a failed list refresh
    pub async fn delete(&self, id: i64) -> ClientResult<Value> {
        let _guard = self.mutations.lock().await;
        let response = self.api.delete_activity(id).await?;
        info!(activity_id = id, "Activity deleted");
        self.refresh_after_mutation().await?;
        Ok(response)
    }

    /// Fetch summary statistics, caching the outcome
    ///
    /// A failure is logged and clears the cached statistics.
    pub async fn refresh_statistics(&self) -> Option<ActivityStats> {
        match self.load_statistics().await {
            Ok(stats) => Some(stats),
            Err(error) => {
                warn!(error = %error, kind = ?error.kind(), "Failed to load activity statistics");
                None
            }
        }
    }

    /// Fetch summary statistics, caching the outcome
    ///
    /// # Errors
    ///
    /// Propagates the request failure after clearing the cached statistics
    pub async fn load_statistics(&self) -> ClientResult<ActivityStats> {
        let result = self.api.activity_stats().await;
        self.lock_state().statistics = result.as_ref().ok().cloned();
        result
    }

    /// Advance one page and fetch it
    ///
    /// # Errors
    ///
    /// Propagates the request failure; the cursor stays advanced
    pub async fn next(&self) -> ClientResult<ActivityPage> {
        let filters = {
            let mut state = self.lock_state();
            state.cursor.advance();
            Self::cursor_filters(&state)
        };
        self.fetch(&filters).await
    }

    /// Go back one page and fetch it
    ///
    /// On page 1 nothing is requested and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Propagates the request failure; the cursor stays moved back
    pub async fn previous(&self) -> ClientResult<Option<ActivityPage>> {
        let filters = {
            let mut state = self.lock_state();
            if !state.cursor.retreat() {
                debug!("Already on the first page");
                return Ok(None);
            }
            Self::cursor_filters(&state)
        };
        self.fetch(&filters).await.map(Some)
    }

    /// Change the page size
    pub fn set_per_page(&self, per_page: NonZeroU32) {
        self.lock_state().cursor.set_per_page(per_page);
    }

    /// Back to page 1
    pub fn reset_cursor(&self) {
        self.lock_state().cursor.reset();
    }

    /// Current cursor
    #[must_use]
    pub fn cursor(&self) -> PageCursor {
        self.lock_state().cursor
    }

    /// Last fetched activities
    #[must_use]
    pub fn activities(&self) -> Vec<Activity> {
        self.lock_state().activities.clone()
    }

    /// Last fetched statistics
    #[must_use]
    pub fn statistics(&self) -> Option<ActivityStats> {
        self.lock_state().statistics.clone()
    }

    async fn fetch(&self, filters: &ActivityFilters) -> ClientResult<ActivityPage> {
        let page = self.api.list_activities(filters).await?;
        debug!(
            page = page.page,
            total = page.total,
            count = page.activities.len(),
            "Activity listing loaded"
        );
        self.lock_state().activities.clone_from(&page.activities);
        Ok(page)
    }

    async fn refresh_after_mutation(&self) -> ClientResult<()> {
        let filters = Self::cursor_filters(&self.lock_state());
        self.fetch(&filters).await?;
        self.refresh_statistics().await;
        Ok(())
    }

    fn cursor_filters(state: &ActivitiesState) -> ActivityFilters {
        ActivityFilters {
            activity_type: state.activity_type.clone(),
            ..ActivityFilters::default()
        }
        .merged_over(&state.cursor)
    }

    fn lock_state(&self) -> MutexGuard<'_, ActivitiesState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
