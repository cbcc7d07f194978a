// core/src/duration.rs
use chrono::Duration;

use crate::error::TrackerError;

/// Наносекунд в единице измерения.
fn unit_nanos(unit: &str) -> Option<f64> {
    match unit {
        "ns" => Some(1.0),
        "us" | "µs" | "μs" => Some(1_000.0),
        "ms" => Some(1_000_000.0),
        "s" => Some(1_000_000_000.0),
        "m" => Some(60_000_000_000.0),
        "h" => Some(3_600_000_000_000.0),
        _ => None,
    }
}

/// Разбирает строку длительности: одна или несколько групп «число + единица»
/// без разделителей ("3h00m", "40m", "1.5h", "300ms"). Знак относится ко всей
/// строке, "0" допустим без единицы. Отрицательный результат здесь легален —
/// диапазон проверяют вызывающие.
pub fn parse_duration(input: &str) -> Result<Duration, TrackerError> {
    let bad = || TrackerError::ParseDuration(input.to_string());

    let mut s = input;
    let mut neg = false;
    if let Some(rest) = s.strip_prefix('-') {
        neg = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(Duration::zero());
    }
    if s.is_empty() {
        return Err(bad());
    }

    let mut total_ns = 0.0f64;
    while !s.is_empty() {
        // целая часть
        let int_len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (int_part, rest) = s.split_at(int_len);

        // дробная часть
        let (frac_part, rest) = match rest.strip_prefix('.') {
            Some(r) => {
                let frac_len = r.find(|c: char| !c.is_ascii_digit()).unwrap_or(r.len());
                r.split_at(frac_len)
            }
            None => ("", rest),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(bad());
        }

        // единица — всё до следующей цифры или точки
        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let (unit, tail) = rest.split_at(unit_len);
        let scale = unit_nanos(unit).ok_or_else(bad)?;

        let mut value = 0.0f64;
        if !int_part.is_empty() {
            value = int_part.parse::<f64>().map_err(|_| bad())?;
        }
        if !frac_part.is_empty() {
            let frac = frac_part.parse::<f64>().map_err(|_| bad())?;
            value += frac / 10f64.powi(frac_part.len() as i32);
        }

        total_ns += value * scale;
        s = tail;
    }

    let signed = if neg { -total_ns } else { total_ns };
    Ok(Duration::nanoseconds(signed.round() as i64))
}

/// Длительность в часах/минутах как f64 (для формул скорости и калорий).
pub trait DurationExt {
    fn as_hours_f64(&self) -> f64;
    fn as_minutes_f64(&self) -> f64;
}

impl DurationExt for Duration {
    fn as_hours_f64(&self) -> f64 {
        match self.num_nanoseconds() {
            Some(ns) => ns as f64 / 3_600_000_000_000.0,
            // num_nanoseconds переполняется на очень больших интервалах
            None => self.num_milliseconds() as f64 / 3_600_000.0,
        }
    }

    fn as_minutes_f64(&self) -> f64 {
        match self.num_nanoseconds() {
            Some(ns) => ns as f64 / 60_000_000_000.0,
            None => self.num_milliseconds() as f64 / 60_000.0,
        }
    }
}
