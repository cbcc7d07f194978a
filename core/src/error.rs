use thiserror::Error;

/// Ошибки разбора и валидации записей активности.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// Неверное число полей в записи.
    #[error("invalid data format")]
    InvalidFormat,

    /// Поле шагов не является целым числом.
    #[error("invalid steps value: {0}")]
    ParseSteps(#[from] std::num::ParseIntError),

    /// Строка длительности не соответствует грамматике ("1h30m", "40m", ...).
    #[error("invalid duration: {0:?}")]
    ParseDuration(String),

    /// Метка вида тренировки не распознана.
    #[error("unknown training type")]
    UnknownTraining,

    #[error("activity duration cannot be negative or zero")]
    NonPositiveDuration,

    #[error("number of steps cannot be negative or zero")]
    NonPositiveSteps,

    #[error("weight cannot be negative or zero")]
    NonPositiveWeight,

    #[error("height cannot be negative or zero")]
    NonPositiveHeight,
}
