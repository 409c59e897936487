use crate::data::solve::SolveRepository;
use crate::model::Category;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::solved_challenge::SolvedChallengeFactory;

mod counts;
