use once_cell::sync::Lazy;
use prometheus::{register_int_counter, IntCounter};

/// Ошибки разбора, проглоченные дневным отчётом.
pub static DAY_INFO_PARSE_ERRORS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "tracker_day_info_parse_errors_total",
        "Записи дневной активности, отброшенные на разборе"
    )
    .expect("register tracker_day_info_parse_errors_total")
});

/// Ошибки расчёта калорий, проглоченные дневным отчётом.
pub static DAY_INFO_CALORIE_ERRORS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "tracker_day_info_calorie_errors_total",
        "Записи дневной активности, отброшенные на расчёте калорий"
    )
    .expect("register tracker_day_info_calorie_errors_total")
});
