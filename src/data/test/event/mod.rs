use crate::data::event::CtfEventRepository;
use crate::model::{CtfEvent, LifecycleState};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::ctf_event::CtfEventFactory;

mod create_announced;
mod find_by_message_id;
mod mark_archived;
mod set_channel_created;

fn sample_event(id: u64) -> CtfEvent {
    CtfEvent {
        id,
        title: format!("Sample CTF {}", id),
        start: Utc.with_ymd_and_hms(2026, 2, 10, 0, 0, 0).unwrap(),
        finish: Utc.with_ymd_and_hms(2026, 2, 12, 0, 0, 0).unwrap(),
        weight: 54.3,
        url: Some("https://ctf.example.org/".to_string()),
        logo: None,
        discord: None,
        canceled: false,
    }
}
