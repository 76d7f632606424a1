use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub rounds: usize,
    pub pivot_year: u32,
    pub easy_time_limit: Duration,
    pub difficult_time_limit: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rounds: 10,
            pivot_year: 1990,
            easy_time_limit: Duration::from_secs(5 * 60),
            difficult_time_limit: Duration::from_secs(3 * 60),
        }
    }
}
