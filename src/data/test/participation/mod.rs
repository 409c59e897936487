use crate::data::participation::ParticipationRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod record;
