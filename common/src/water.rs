//! 水分摂取トラッカー

use crate::error::{Error, Result};

/// 1日の目標量 (ml)
pub const DEFAULT_WATER_GOAL_ML: u32 = 2000;

/// クイック追加ボタンの量 (ml)
pub const DEFAULT_WATER_PRESETS_ML: [u32; 2] = [250, 500];

/// 水分摂取量と目標
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterTracker {
    pub consumed_ml: u32,
    pub goal_ml: u32,
}

impl Default for WaterTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WATER_GOAL_ML)
    }
}

impl WaterTracker {
    pub fn new(goal_ml: u32) -> Self {
        Self {
            consumed_ml: 0,
            goal_ml,
        }
    }

    pub fn add(&mut self, amount_ml: u32) {
        self.consumed_ml = self.consumed_ml.saturating_add(amount_ml);
    }

    /// 目標に対する進捗率 (0.0〜100.0)
    pub fn progress_percent(&self) -> f64 {
        if self.goal_ml == 0 {
            return if self.consumed_ml > 0 { 100.0 } else { 0.0 };
        }
        (self.consumed_ml as f64 / self.goal_ml as f64 * 100.0).min(100.0)
    }

    /// プログレスバーの幅 例: "37.5%"
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress_percent())
    }

    pub fn goal_reached(&self) -> bool {
        self.consumed_ml >= self.goal_ml
    }
}

/// 整数の先頭部分を読み取る（"300ml" → 300, "12.7" → 12）
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // 桁あふれは範囲外の値として扱う
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// カスタム入力欄の水分量を検証
pub fn parse_water_amount(input: &str) -> Result<u32> {
    match parse_leading_int(input) {
        Some(value) if value > 0 => u32::try_from(value).map_err(|_| Error::InvalidWaterAmount),
        _ => Err(Error::InvalidWaterAmount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_progress() {
        let mut water = WaterTracker::default();
        water.add(250);
        water.add(500);
        assert_eq!(water.consumed_ml, 750);
        assert_eq!(water.progress_percent(), 37.5);
        assert_eq!(water.progress_width(), "37.5%");
        assert!(!water.goal_reached());
    }

    #[test]
    fn test_progress_clamped() {
        let mut water = WaterTracker::new(2000);
        water.add(2500);
        assert_eq!(water.progress_percent(), 100.0);
        assert_eq!(water.progress_width(), "100%");
        assert!(water.goal_reached());
    }

    #[test]
    fn test_progress_zero_goal() {
        let mut water = WaterTracker::new(0);
        assert_eq!(water.progress_percent(), 0.0);
        water.add(1);
        assert_eq!(water.progress_percent(), 100.0);
    }

    #[test]
    fn test_add_saturates() {
        let mut water = WaterTracker::default();
        water.consumed_ml = u32::MAX - 10;
        water.add(500);
        assert_eq!(water.consumed_ml, u32::MAX);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("250"), Some(250));
        assert_eq!(parse_leading_int("  300ml"), Some(300));
        assert_eq!(parse_leading_int("12.7"), Some(12));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("+40"), Some(40));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_parse_water_amount() {
        assert_eq!(parse_water_amount("330").unwrap(), 330);
        assert_eq!(parse_water_amount("150 ml").unwrap(), 150);

        for input in ["", "abc", "0", "-100", "99999999999999999999"] {
            let err = parse_water_amount(input).unwrap_err();
            assert!(matches!(err, Error::InvalidWaterAmount), "input {:?}", input);
        }
    }
}
