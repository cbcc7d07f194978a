pub mod calories;
pub mod consts;
pub mod daysteps;
pub mod duration;
pub mod error;
pub mod metrics;
pub mod models;
pub mod record;

pub use calories::{
    distance_km, mean_speed_kmh, running_calories, training_info, training_report,
    walking_calories,
};
pub use daysteps::{day_action_info, day_report};
pub use duration::{parse_duration, DurationExt};
pub use error::TrackerError;
pub use models::{ActivityKind, Biometrics, DayRecord, DayReport, TrainingRecord, TrainingReport};
pub use record::{parse_day, parse_training};
