use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Numeric view over a `"<number>/10"` rating string.
///
/// Unparsable ratings (`"N/A"`, empty, numbers without the `/10` suffix) score 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, ToSchema)]
pub struct HealthRating {
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RatingBand {
    Good,
    Fair,
    Poor,
}

impl HealthRating {
    pub const MAX_SCORE: f64 = 10.0;

    pub fn parse(raw: &str) -> Self {
        let score = raw
            .trim()
            .split_once('/')
            .filter(|(_, denominator)| denominator.trim() == "10")
            .and_then(|(numerator, _)| numerator.trim().parse::<f64>().ok())
            .filter(|score| score.is_finite())
            .unwrap_or(0.0);

        Self { score }
    }

    /// Share of the rating bar to fill, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        (self.score / Self::MAX_SCORE).clamp(0.0, 1.0)
    }

    pub fn band(&self) -> RatingBand {
        if self.score >= 8.0 {
            RatingBand::Good
        } else if self.score >= 6.0 {
            RatingBand::Fair
        } else {
            RatingBand::Poor
        }
    }
}

impl RatingBand {
    pub fn color(&self) -> &'static str {
        match self {
            RatingBand::Good => "#4CAF50",
            RatingBand::Fair => "#FF9800",
            RatingBand::Poor => "#f44336",
        }
    }
}

/// Base64 image payload tagged with its MIME type, ready to embed in a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    pub fn jpeg(data: String) -> Self {
        Self {
            mime_type: "image/jpeg".to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional_scores() {
        assert_eq!(HealthRating::parse("7/10").score, 7.0);
        assert_eq!(HealthRating::parse(" 6.5 / 10 ").score, 6.5);
    }

    #[test]
    fn test_parse_malformed_defaults_to_zero() {
        for raw in ["N/A", "", "7", "seven/10", "7/5", "/10", "NaN/10"] {
            assert_eq!(HealthRating::parse(raw).score, 0.0, "input {raw:?}");
        }
    }

    #[test]
    fn test_fill_ratio_is_clamped() {
        assert_eq!(HealthRating::parse("5/10").fill_ratio(), 0.5);
        assert_eq!(HealthRating::parse("12/10").fill_ratio(), 1.0);
        assert_eq!(HealthRating::parse("-3/10").fill_ratio(), 0.0);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(HealthRating::parse("8/10").band(), RatingBand::Good);
        assert_eq!(HealthRating::parse("6/10").band(), RatingBand::Fair);
        assert_eq!(HealthRating::parse("5.9/10").band(), RatingBand::Poor);
        assert_eq!(HealthRating::parse("N/A").band().color(), "#f44336");
    }
}
