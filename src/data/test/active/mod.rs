use crate::data::active::ActiveChallengeRepository;
use crate::model::Category;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod claim;
