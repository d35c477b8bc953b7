use serde::Deserialize;

/// `GET /api/progress/deck?user_id=..&deck_id=..`
#[derive(Deserialize, Debug, Default)]
pub struct ProgressQuery {
    pub user_id: Option<i64>,
    pub deck_id: Option<i64>,
}
