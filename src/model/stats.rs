use std::collections::HashMap;

/// One ranked scoreboard line: ledger totals joined with the solve count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreboardEntry {
    pub user_id: String,
    pub solves: u64,
    pub points: i32,
    pub first_bloods: i32,
}

/// Aggregated profile for one member.
#[derive(Clone, Debug)]
pub struct ProfileStats {
    pub user_id: String,
    pub points: i32,
    pub first_bloods: i32,
    /// 1-based rank by points, ties broken by ascending user ID.
    pub rank: u64,
    pub solves: u64,
    pub first_blood_solves: u64,
    /// Solve count per category key (`Category::as_str`).
    pub solves_by_category: HashMap<String, u64>,
    pub participated_events: Vec<String>,
}
