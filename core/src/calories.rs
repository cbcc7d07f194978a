// core/src/calories.rs
use chrono::Duration;

use crate::consts::{MIN_IN_H, M_IN_KM, STEP_LENGTH_COEFFICIENT, WALKING_CALORIES_COEFFICIENT};
use crate::duration::DurationExt;
use crate::error::TrackerError;
use crate::models::{ActivityKind, Biometrics, TrainingRecord, TrainingReport};
use crate::record::parse_training;

/// Длина шага (м) из роста.
#[inline]
pub fn step_length_m(height_m: f64) -> f64 {
    STEP_LENGTH_COEFFICIENT * height_m
}

/// Дистанция (км) за тренировку.
pub fn distance_km(steps: i64, height_m: f64) -> f64 {
    steps as f64 * step_length_m(height_m) / M_IN_KM
}

/// Средняя скорость (км/ч). Для нулевой или отрицательной длительности — 0.
pub fn mean_speed_kmh(steps: i64, height_m: f64, duration: Duration) -> f64 {
    if duration <= Duration::zero() {
        return 0.0;
    }
    distance_km(steps, height_m) / duration.as_hours_f64()
}

/// Калории при беге. Все четыре входа строго положительны,
/// длительность проверяется первой.
pub fn running_calories(
    steps: i64,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> Result<f64, TrackerError> {
    if duration <= Duration::zero() {
        return Err(TrackerError::NonPositiveDuration);
    }
    if steps <= 0 {
        return Err(TrackerError::NonPositiveSteps);
    }
    if weight_kg <= 0.0 {
        return Err(TrackerError::NonPositiveWeight);
    }
    if height_m <= 0.0 {
        return Err(TrackerError::NonPositiveHeight);
    }

    let speed = mean_speed_kmh(steps, height_m, duration);
    Ok(weight_kg * speed * duration.as_minutes_f64() / MIN_IN_H)
}

/// Калории при ходьбе: беговая формула с понижающим коэффициентом.
/// Валидация входов та же, что у `running_calories`.
pub fn walking_calories(
    steps: i64,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> Result<f64, TrackerError> {
    let running = running_calories(steps, weight_kg, height_m, duration)?;
    Ok(running * WALKING_CALORIES_COEFFICIENT)
}

/// Метрики тренировки по уже разобранной записи.
pub fn training_report(
    record: &TrainingRecord,
    personal: &Biometrics,
) -> Result<TrainingReport, TrackerError> {
    let calories = match record.kind {
        ActivityKind::Running => running_calories(
            record.steps,
            personal.weight_kg,
            personal.height_m,
            record.duration,
        )?,
        ActivityKind::Walking => walking_calories(
            record.steps,
            personal.weight_kg,
            personal.height_m,
            record.duration,
        )?,
    };

    Ok(TrainingReport {
        kind: record.kind,
        duration_h: record.duration.as_hours_f64(),
        distance_km: distance_km(record.steps, personal.height_m),
        speed_kmh: mean_speed_kmh(record.steps, personal.height_m, record.duration),
        calories_kcal: calories,
    })
}

/// Текстовый отчёт о тренировке. Любая ошибка возвращается вызывающему как есть.
pub fn training_info(data: &str, personal: &Biometrics) -> Result<String, TrackerError> {
    let record = parse_training(data)?;
    let report = training_report(&record, personal)?;
    Ok(report.to_string())
}
