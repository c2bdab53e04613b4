use sqlx::PgPool;

use crate::ApiConfig;

#[derive(Clone, Debug)]
pub struct ApiState {
    pub pool: PgPool,
    pub schedule_max_range_days: i64,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        Self {
            pool,
            schedule_max_range_days: config.schedule_max_range_days,
        }
    }
}
