// core/src/daysteps.rs
use crate::calories::walking_calories;
use crate::consts::{M_IN_KM, STEP_LENGTH_M};
use crate::error::TrackerError;
use crate::metrics::{DAY_INFO_CALORIE_ERRORS, DAY_INFO_PARSE_ERRORS};
use crate::models::{Biometrics, DayRecord, DayReport};
use crate::record::parse_day;

/// Метрики дневной активности по уже разобранной записи.
/// Дистанция считается по фиксированной длине шага, рост не участвует.
pub fn day_report(record: &DayRecord, personal: &Biometrics) -> Result<DayReport, TrackerError> {
    let distance_km = record.steps as f64 * STEP_LENGTH_M / M_IN_KM;
    let calories = walking_calories(
        record.steps,
        personal.weight_kg,
        personal.height_m,
        record.duration,
    )?;

    Ok(DayReport {
        steps: record.steps,
        distance_km,
        calories_kcal: calories,
    })
}

/// Текстовый отчёт о дневной активности. Ошибки не возвращаются:
/// запись логируется и отдаётся пустая строка.
pub fn day_action_info(data: &str, personal: &Biometrics) -> String {
    let record = match parse_day(data) {
        Ok(record) => record,
        Err(err) => {
            DAY_INFO_PARSE_ERRORS.inc();
            log::error!("ошибка: {err}");
            return String::new();
        }
    };

    match day_report(&record, personal) {
        Ok(report) => report.to_string(),
        Err(err) => {
            DAY_INFO_CALORIE_ERRORS.inc();
            log::error!("ошибка: {err}");
            String::new()
        }
    }
}
