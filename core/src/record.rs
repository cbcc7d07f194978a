// core/src/record.rs
use chrono::Duration;

use crate::duration::parse_duration;
use crate::error::TrackerError;
use crate::models::{ActivityKind, DayRecord, TrainingRecord};

/// Разбирает запись тренировки "<шаги>,<вид>,<длительность>".
/// Вид проверяется до числовых полей: запись с неизвестным видом
/// возвращает ошибку вида, даже если шаги не разбираются.
pub fn parse_training(data: &str) -> Result<TrainingRecord, TrackerError> {
    let parts: Vec<&str> = data.split(',').collect();
    if parts.len() != 3 {
        return Err(TrackerError::InvalidFormat);
    }

    let kind: ActivityKind = parts[1].parse()?;
    let steps: i64 = parts[0].parse()?;
    let duration = parse_duration(parts[2])?;

    if steps <= 0 {
        return Err(TrackerError::NonPositiveSteps);
    }
    if duration <= Duration::zero() {
        return Err(TrackerError::NonPositiveDuration);
    }

    Ok(TrainingRecord {
        steps,
        kind,
        duration,
    })
}

/// Разбирает запись дневной активности "<шаги>,<длительность>".
pub fn parse_day(data: &str) -> Result<DayRecord, TrackerError> {
    let parts: Vec<&str> = data.split(',').collect();
    if parts.len() != 2 {
        return Err(TrackerError::InvalidFormat);
    }

    let steps: i64 = parts[0].parse()?;
    if steps <= 0 {
        return Err(TrackerError::NonPositiveSteps);
    }

    let duration = parse_duration(parts[1])?;
    if duration <= Duration::zero() {
        return Err(TrackerError::NonPositiveDuration);
    }

    Ok(DayRecord { steps, duration })
}
