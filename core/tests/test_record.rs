use chrono::Duration;
use tracker_core::{parse_day, parse_training, ActivityKind, TrackerError};

#[test]
fn test_parse_training_ok() {
    let record = parse_training("3456,Ходьба,3h00m").unwrap();
    assert_eq!(record.steps, 3456);
    assert_eq!(record.kind, ActivityKind::Walking);
    assert_eq!(record.duration, Duration::hours(3));

    let record = parse_training("1000,Бег,40m").unwrap();
    assert_eq!(record.kind, ActivityKind::Running);
    assert_eq!(record.duration, Duration::minutes(40));
}

#[test]
fn test_parse_training_field_count() {
    assert_eq!(
        parse_training("3456,Ходьба").unwrap_err(),
        TrackerError::InvalidFormat
    );
    assert_eq!(
        parse_training("1,Бег,40m,x").unwrap_err(),
        TrackerError::InvalidFormat
    );
    assert_eq!(parse_training("").unwrap_err(), TrackerError::InvalidFormat);
}

#[test]
fn test_parse_training_unknown_kind() {
    assert_eq!(
        parse_training("1000,Плавание,40m").unwrap_err(),
        TrackerError::UnknownTraining
    );
    // вид проверяется раньше шагов: ошибка вида, а не разбора числа
    assert_eq!(
        parse_training("abc,Плавание,40m").unwrap_err(),
        TrackerError::UnknownTraining
    );
}

#[test]
fn test_parse_training_steps() {
    assert!(matches!(
        parse_training("abc,Бег,40m").unwrap_err(),
        TrackerError::ParseSteps(_)
    ));
    // пробелы не обрезаются
    assert!(matches!(
        parse_training(" 1000,Бег,40m").unwrap_err(),
        TrackerError::ParseSteps(_)
    ));
    // ноль и отрицательные отвергаются после разбора
    assert_eq!(
        parse_training("0,Бег,40m").unwrap_err(),
        TrackerError::NonPositiveSteps
    );
    assert_eq!(
        parse_training("-100,Бег,40m").unwrap_err(),
        TrackerError::NonPositiveSteps
    );
}

#[test]
fn test_parse_training_duration() {
    assert!(matches!(
        parse_training("1000,Бег,40x").unwrap_err(),
        TrackerError::ParseDuration(_)
    ));
    assert_eq!(
        parse_training("1000,Бег,-40m").unwrap_err(),
        TrackerError::NonPositiveDuration
    );
    assert_eq!(
        parse_training("1000,Бег,0").unwrap_err(),
        TrackerError::NonPositiveDuration
    );
}

#[test]
fn test_parse_day_ok() {
    let record = parse_day("678,3h00m").unwrap();
    assert_eq!(record.steps, 678);
    assert_eq!(record.duration, Duration::hours(3));
}

#[test]
fn test_parse_day_errors() {
    assert_eq!(parse_day("678").unwrap_err(), TrackerError::InvalidFormat);
    assert_eq!(
        parse_day("678,1h,2h").unwrap_err(),
        TrackerError::InvalidFormat
    );
    assert!(matches!(
        parse_day("abc,3h").unwrap_err(),
        TrackerError::ParseSteps(_)
    ));
    assert_eq!(
        parse_day("0,3h").unwrap_err(),
        TrackerError::NonPositiveSteps
    );
    assert_eq!(
        parse_day("678,0").unwrap_err(),
        TrackerError::NonPositiveDuration
    );
    assert!(matches!(
        parse_day("678,3x").unwrap_err(),
        TrackerError::ParseDuration(_)
    ));
}
