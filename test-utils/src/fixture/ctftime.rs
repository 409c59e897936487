//! CTFtime API response fixtures.
//!
//! Shapes mirror the live `/events/` and `/teams/{id}/` endpoints closely
//! enough for parser and selection-policy tests. Event 2405 is canceled via
//! the `format` field.

/// `/events/?limit=10&start=..&finish=..` response with five events.
pub const EVENT_LIST_JSON: &str = r#"[
  {
    "id": 2401,
    "title": "Winter Warmup CTF",
    "start": "2026-02-07T10:00:00+00:00",
    "finish": "2026-02-08T10:00:00+00:00",
    "weight": 23.91,
    "url": "https://winter.example.org/",
    "logo": "https://ctftime.org/media/events/logo2401.png",
    "format": "Jeopardy",
    "onsite": false
  },
  {
    "id": 2402,
    "title": "Midnight Quals 2026",
    "start": "2026-02-10T00:00:00+00:00",
    "finish": "2026-02-12T00:00:00+00:00",
    "weight": 54.3,
    "url": "https://ctf.example.org/",
    "logo": "",
    "format": "Jeopardy",
    "onsite": false
  },
  {
    "id": 2403,
    "title": "PlaidWeek Open",
    "start": "2026-02-14T16:00:00+00:00",
    "finish": "2026-02-16T16:00:00+00:00",
    "weight": 89.5,
    "url": "https://plaidweek.example.com/",
    "logo": null,
    "format": "Jeopardy",
    "onsite": false
  },
  {
    "id": 2404,
    "title": "Village Attack-Defense",
    "start": "2026-02-21T09:00:00+00:00",
    "finish": "2026-02-22T21:00:00+00:00",
    "weight": 35.0,
    "url": "https://village.example.net/",
    "format": "Attack-Defense",
    "onsite": true
  },
  {
    "id": 2405,
    "title": "Ghost CTF (canceled)",
    "start": "2026-02-28T12:00:00+00:00",
    "finish": "2026-03-01T12:00:00+00:00",
    "weight": 44.0,
    "url": "https://ghost.example.io/",
    "format": "canceled",
    "onsite": false
  }
]"#;

/// `/events/{id}/` response for event 2402.
pub const EVENT_DETAIL_JSON: &str = r#"{
  "id": 2402,
  "title": "Midnight Quals 2026",
  "start": "2026-02-10T00:00:00+00:00",
  "finish": "2026-02-12T00:00:00+00:00",
  "weight": 54.3,
  "url": "https://ctf.example.org/",
  "logo": "https://ctftime.org/media/events/logo2402.png",
  "discord": "https://discord.gg/example",
  "format": "Jeopardy",
  "onsite": false
}"#;

/// `/teams/{id}/` response.
pub const TEAM_PROFILE_JSON: &str = r#"{
  "name": "Example Team",
  "rating_points": 123.45,
  "logo": "https://ctftime.org/media/team/logo.png",
  "country": "KR",
  "rating": {
    "2025": { "rating_place": 77, "country_place": 5, "rating_points": 88.1 },
    "2026": { "rating_place": 42, "country_place": 3, "rating_points": 123.45 }
  }
}"#;
