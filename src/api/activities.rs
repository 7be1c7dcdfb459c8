// ABOUTME: Activity endpoint bindings for the FitTrack API client
// ABOUTME: Listing with ordered query parameters, CRUD on single activities, and summary stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, RequestOptions};
use crate::constants::routes;
use crate::errors::ClientResult;
use crate::models::{Activity, ActivityStats};
use crate::pagination::{ActivityFilters, ActivityPage};

/// Listing path with the filters' query string
///
/// Parameters appear only when present, always in `tipo`, `pagina`,
/// `por_pagina` order.
#[must_use]
pub fn activities_endpoint(filters: &ActivityFilters) -> String {
    let query = filters
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        routes::ACTIVITIES.to_owned()
    } else {
        format!("{}?{query}", routes::ACTIVITIES)
    }
}

fn activity_endpoint(id: i64) -> String {
    format!("{}/{id}", routes::ACTIVITIES)
}

impl ApiClient {
    /// `GET /atividades?tipo=&pagina=&por_pagina=`
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure, or `InvalidResponse` if the
    /// listing is not shaped like a page
    pub async fn list_activities(&self, filters: &ActivityFilters) -> ClientResult<ActivityPage> {
        self.request(&activities_endpoint(filters), RequestOptions::default())
            .await?
            .decode("activity listing")
    }

    /// `GET /atividades/{id}`
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure, or `InvalidResponse` for a non-object body
    pub async fn get_activity(&self, id: i64) -> ClientResult<Activity> {
        self.request(&activity_endpoint(id), RequestOptions::default())
            .await?
            .decode("activity")
    }

    /// `POST /atividades`
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure
    pub async fn create_activity<T: Serialize + ?Sized>(&self, activity: &T) -> ClientResult<Value> {
        let options = RequestOptions::new(Method::POST).with_json(activity)?;
        self.request_json(routes::ACTIVITIES, options).await
    }

    /// `PUT /atividades/{id}`
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure
    pub async fn update_activity<T: Serialize + ?Sized>(
        &self,
        id: i64,
        activity: &T,
    ) -> ClientResult<Value> {
        let options = RequestOptions::new(Method::PUT).with_json(activity)?;
        self.request_json(&activity_endpoint(id), options).await
    }

    /// `DELETE /atividades/{id}`
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure
    pub async fn delete_activity(&self, id: i64) -> ClientResult<Value> {
        self.request_json(&activity_endpoint(id), RequestOptions::new(Method::DELETE))
            .await
    }

    /// `GET /atividades/resumo/stats`
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure, or `InvalidResponse` for a malformed summary
    pub async fn activity_stats(&self) -> ClientResult<ActivityStats> {
        self.request(routes::ACTIVITY_STATS, RequestOptions::default())
            .await?
            .decode("activity statistics")
    }
}
