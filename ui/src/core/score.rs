//! Composition score derivation.
//!
//! Axis values arrive as numbers or numeric strings. Anything missing or
//! unparsable counts as 0 and still takes part in the overall mean, so a broken
//! axis lowers the overall score instead of being excluded.

use api::{CompositionScore, ScoreValue};

/// Scores as the render layer sees them.
///
/// `NoData` means the record has no score object at all, which is not the same
/// thing as three zero axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCard {
    NoData,
    Scored(AxisScores),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisScores {
    pub color: u32,
    pub lighting: u32,
    pub composition: u32,
}

impl AxisScores {
    pub fn from_score(score: &CompositionScore) -> Self {
        Self {
            color: parse_axis(score.color.as_ref()),
            lighting: parse_axis(score.lighting.as_ref()),
            composition: parse_axis(score.composition.as_ref()),
        }
    }

    /// Floor of the mean of the three axes.
    pub fn overall(&self) -> u32 {
        (self.color + self.lighting + self.composition) / 3
    }
}

impl ScoreCard {
    pub fn from_score(score: Option<&CompositionScore>) -> Self {
        match score {
            Some(score) => ScoreCard::Scored(AxisScores::from_score(score)),
            None => ScoreCard::NoData,
        }
    }

    pub fn overall(&self) -> Option<u32> {
        match self {
            ScoreCard::Scored(axes) => Some(axes.overall()),
            ScoreCard::NoData => None,
        }
    }
}

/// Parse one axis into 0..=100.
///
/// Numbers are truncated toward zero. Strings take their integer prefix
/// (`" 70.5"` and `"70abc"` are 70); strings with no leading digits are 0.
pub fn parse_axis(value: Option<&ScoreValue>) -> u32 {
    let raw = match value {
        None => 0,
        Some(ScoreValue::Number(n)) if n.is_finite() => n.trunc() as i64,
        Some(ScoreValue::Number(_)) => 0,
        Some(ScoreValue::Text(text)) => integer_prefix(text).unwrap_or(0),
    };
    raw.clamp(0, 100) as u32
}

fn integer_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Only the sign matters once the prefix exceeds the 0..=100 range.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Colour tier for a score ring or bar.
pub fn score_color(value: u32) -> &'static str {
    if value >= 80 {
        "#10b981"
    } else if value >= 60 {
        "#f59e0b"
    } else if value >= 40 {
        "#f97316"
    } else {
        "#ef4444"
    }
}

/// SVG geometry for a circular indicator drawn in a 100×100 viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl RingGeometry {
    pub const RADIUS: f64 = 40.0;

    pub fn for_value(value: u32) -> Self {
        let circumference = 2.0 * std::f64::consts::PI * Self::RADIUS;
        let fraction = value.min(100) as f64 / 100.0;
        Self {
            radius: Self::RADIUS,
            circumference,
            dash_offset: circumference - fraction * circumference,
        }
    }
}
