use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Вид тренировки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Running,
    Walking,
}

impl ActivityKind {
    /// Метка вида в записи и в отчёте.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Бег",
            ActivityKind::Walking => "Ходьба",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Бег" => Ok(ActivityKind::Running),
            "Ходьба" => Ok(ActivityKind::Walking),
            _ => Err(TrackerError::UnknownTraining),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Параметры пользователя. Не сохраняются, передаются на каждый вызов.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Biometrics {
    pub weight_kg: f64,
    pub height_m: f64,
}

/// Разобранная запись тренировки ("<шаги>,<вид>,<длительность>").
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    pub steps: i64,
    pub kind: ActivityKind,
    pub duration: Duration,
}

/// Разобранная запись дневной активности ("<шаги>,<длительность>").
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub steps: i64,
    pub duration: Duration,
}

/// Итог тренировки.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub kind: ActivityKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Тип тренировки: {}", self.kind)?;
        writeln!(f, "Длительность: {:.2} ч.", self.duration_h)?;
        writeln!(f, "Дистанция: {:.2} км.", self.distance_km)?;
        writeln!(f, "Скорость: {:.2} км/ч", self.speed_kmh)?;
        writeln!(f, "Сожгли калорий: {:.2}", self.calories_kcal)
    }
}

/// Итог дневной активности.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayReport {
    pub steps: i64,
    pub distance_km: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Количество шагов: {}.", self.steps)?;
        writeln!(f, "Дистанция составила {:.2} км.", self.distance_km)?;
        writeln!(f, "Вы сожгли {:.2} ккал.", self.calories_kcal)
    }
}
