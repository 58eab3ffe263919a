pub mod calculator;
pub mod history;
pub mod models {
    pub mod entry;
}

pub mod helpers {
    pub mod format;
    pub mod logging;
    pub mod math;

    pub mod handelbars {
        pub mod format_number;
        pub mod format_speed;
        pub mod format_time;
        pub mod params;
    }
}
