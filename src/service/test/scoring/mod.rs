use crate::data::{ActiveChallengeRepository, ParticipationRepository, SolveRepository, UserRepository};
use crate::error::AppError;
use crate::model::{Category, Difficulty};
use crate::service::ScoringService;
use test_utils::builder::TestBuilder;
use test_utils::factory::solved_challenge::SolvedChallengeFactory;
use test_utils::factory::user::UserFactory;

mod profile;
mod record_solve;
mod reset_all;
mod revoke_solve;
