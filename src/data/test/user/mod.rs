use crate::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::solved_challenge::SolvedChallengeFactory;
use test_utils::factory::user::UserFactory;

mod leaderboard;
mod rank_of;
