// core/src/consts.rs

/// Средняя длина шага (м) для дневного отчёта — фиксированная, без учёта роста.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Коэффициент длины шага от роста (тренировочный расчёт).
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;

pub const M_IN_KM: f64 = 1000.0; // метров в километре
pub const MIN_IN_H: f64 = 60.0; // минут в часе

/// Коэффициент калорий при ходьбе относительно бега.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;
