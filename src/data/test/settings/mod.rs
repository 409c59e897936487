use crate::data::settings::{BotConfigRepository, SCOREBOARD_MESSAGE_ID};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod message_id;
