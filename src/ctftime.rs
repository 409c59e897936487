//! CTFtime API adapter.
//!
//! Read-only client for the two query shapes the bot needs (list events in a
//! time window, fetch one event's detail) plus the team profile endpoint for
//! the daily stats message. One attempt per call, no caching, no retries: a
//! failed fetch aborts the calling tick and the next scheduled tick tries
//! again.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::error::AppError;
use crate::model::CtfEvent;

/// Raw event JSON as returned by `/events/` and `/events/{id}/`.
#[derive(Debug, Deserialize)]
pub struct EventDto {
    pub id: u64,
    pub title: String,
    pub start: DateTime<Utc>,
    pub finish: DateTime<Utc>,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

impl From<EventDto> for CtfEvent {
    fn from(dto: EventDto) -> Self {
        let canceled = dto
            .format
            .as_deref()
            .map(|f| f.eq_ignore_ascii_case("canceled"))
            .unwrap_or(false);
        CtfEvent {
            id: dto.id,
            title: dto.title,
            start: dto.start,
            finish: dto.finish,
            weight: dto.weight,
            url: dto.url,
            logo: dto.logo.filter(|l| !l.is_empty()),
            discord: dto.discord.filter(|d| !d.is_empty()),
            canceled,
        }
    }
}

/// Team profile from `/teams/{id}/`.
#[derive(Debug, Deserialize)]
pub struct TeamProfile {
    pub name: String,
    #[serde(default)]
    pub rating_points: Option<f64>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub rating: std::collections::HashMap<String, TeamRatingYear>,
}

#[derive(Debug, Deserialize)]
pub struct TeamRatingYear {
    #[serde(default)]
    pub rating_place: Option<i64>,
    #[serde(default)]
    pub country_place: Option<i64>,
}

impl TeamProfile {
    /// Placement from the most recent rating year, if any.
    pub fn latest_places(&self) -> (Option<i64>, Option<i64>) {
        self.rating
            .iter()
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, year)| (year.rating_place, year.country_place))
            .unwrap_or((None, None))
    }
}

#[derive(Clone)]
pub struct CtftimeClient {
    http: reqwest::Client,
    base_url: String,
}

impl CtftimeClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Lists events starting within `window` of `now`, soonest first as the
    /// API returns them. Capped at 10 entries, matching the selection policy's
    /// input size.
    pub async fn upcoming_events(
        &self,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<Vec<CtfEvent>, AppError> {
        let url = format!(
            "{}/events/?limit=10&start={}&finish={}",
            self.base_url,
            now.timestamp(),
            (now + window).timestamp()
        );
        let dtos: Vec<EventDto> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(dtos.into_iter().map(CtfEvent::from).collect())
    }

    /// Fetches one event's detail by CTFtime ID.
    pub async fn event_details(&self, event_id: u64) -> Result<CtfEvent, AppError> {
        let url = format!("{}/events/{}/", self.base_url, event_id);
        let dto: EventDto = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(dto.into())
    }

    /// Fetches the configured team's profile.
    pub async fn team_profile(&self, team_id: u64) -> Result<TeamProfile, AppError> {
        let url = format!("{}/teams/{}/", self.base_url, team_id);
        let profile: TeamProfile = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(profile)
    }
}
