use crate::domain::transaction::PaymentRequest;
use rust_decimal_macros::dec;
use serde::Serialize;

const BASE_SCORE: f64 = 0.1;
const LARGE_AMOUNT_WEIGHT: f64 = 0.3;
const EXTERNAL_RECEIVER_WEIGHT: f64 = 0.4;

/// Coarse bucket shown next to the score in the security check.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score <= 0.3 {
            RiskLevel::Low
        } else if score <= 0.7 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Proceed,
    Verify,
    Block,
}

/// Outcome of the display-only security check.
///
/// This is never consulted by the payment flow: the transaction's terminal
/// status comes from an independent policy draw. The assessment only feeds
/// the indicator the user sees before confirming.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct RiskAssessment {
    pub score: f64,
    pub level: RiskLevel,
    pub recommendation: Recommendation,
    pub factors: Vec<String>,
}

/// Scores a request shape. Pure and deterministic: 0.1 base, +0.3 for
/// amounts over 1000, +0.4 when the receiver mentions "external"
/// (case-insensitive), clamped to 1.0.
pub fn score(request: &PaymentRequest) -> f64 {
    let mut score = BASE_SCORE;
    if request.amount > dec!(1000) {
        score += LARGE_AMOUNT_WEIGHT;
    }
    if request.receiver.to_lowercase().contains("external") {
        score += EXTERNAL_RECEIVER_WEIGHT;
    }
    score.min(1.0)
}

/// Full assessment for the security-check indicator: the heuristic score
/// plus the bucket, recommendation, and human-readable contributing factors.
pub fn assess(request: &PaymentRequest) -> RiskAssessment {
    let score = score(request);
    let level = RiskLevel::from_score(score);

    let mut factors = Vec::new();
    if request.amount > dec!(1000) {
        factors.push("Amount exceeds normal range".to_string());
    } else {
        factors.push("Amount within normal range".to_string());
    }
    if request.receiver.to_lowercase().contains("external") {
        factors.push("Receiver flagged as external".to_string());
    } else {
        factors.push("Trusted receiver verified".to_string());
    }

    let recommendation = match level {
        RiskLevel::Low => Recommendation::Proceed,
        RiskLevel::Medium => Recommendation::Verify,
        RiskLevel::High => Recommendation::Block,
    };

    RiskAssessment {
        score,
        level,
        recommendation,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::Purpose;
    use rust_decimal::Decimal;

    fn request(amount: Decimal, receiver: &str) -> PaymentRequest {
        PaymentRequest::new(Purpose::Fees, amount, receiver)
    }

    #[test]
    fn test_base_score_at_amount_boundary() {
        // 1000 is NOT over the threshold
        assert_eq!(score(&request(dec!(1000), "Bursar")), 0.1);
    }

    #[test]
    fn test_large_amount_increment() {
        assert_eq!(score(&request(dec!(1001), "Bursar")), 0.4);
    }

    #[test]
    fn test_external_receiver_increment() {
        let s = score(&request(dec!(1001), "External Vendor"));
        assert!((s - 0.8).abs() < f64::EPSILON, "expected 0.8, got {s}");
    }

    #[test]
    fn test_external_match_is_case_insensitive_substring() {
        assert_eq!(score(&request(dec!(50), "some EXTERNAL party")), 0.5);
        assert_eq!(score(&request(dec!(50), "Internal Office")), 0.1);
    }

    #[test]
    fn test_score_is_deterministic() {
        let r = request(dec!(2000), "external");
        assert_eq!(score(&r), score(&r));
    }

    #[test]
    fn test_level_buckets() {
        assert_eq!(RiskLevel::from_score(0.1), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.3), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.4), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.7), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.8), RiskLevel::High);
    }

    #[test]
    fn test_assessment_recommendation_and_factors() {
        let assessment = assess(&request(dec!(1001), "External Vendor"));
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.recommendation, Recommendation::Block);
        assert!(
            assessment
                .factors
                .iter()
                .any(|f| f.contains("external") || f.contains("Receiver flagged"))
        );

        let calm = assess(&request(dec!(45.99), "Campus Bookstore"));
        assert_eq!(calm.recommendation, Recommendation::Proceed);
        assert_eq!(calm.factors[0], "Amount within normal range");
    }
}
