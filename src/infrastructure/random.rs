use crate::domain::ports::OutcomePolicy;
use crate::domain::transaction::TransactionStatus;
use rand::Rng;

/// The demo outcome policy: success with a fixed probability, and a
/// uniformly drawn low risk score. Both draws are independent.
pub struct SimulatedOutcomes {
    success_rate: f64,
}

impl SimulatedOutcomes {
    /// 90% of submissions succeed.
    pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;

    pub fn new(success_rate: f64) -> Self {
        Self { success_rate }
    }
}

impl Default for SimulatedOutcomes {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SUCCESS_RATE)
    }
}

impl OutcomePolicy for SimulatedOutcomes {
    fn draw_status(&self) -> TransactionStatus {
        if rand::thread_rng().r#gen::<f64>() < self.success_rate {
            TransactionStatus::Success
        } else {
            TransactionStatus::Failed
        }
    }

    fn draw_risk_score(&self) -> f64 {
        // Low-risk simulation: uniform in [0, 0.5)
        rand::thread_rng().gen_range(0.0..0.5)
    }
}

/// A policy that always returns the same outcome. Lets tests (and the demo
/// CLI) force a specific branch without patching global randomness.
pub struct FixedOutcomes {
    pub status: TransactionStatus,
    pub risk_score: f64,
}

impl FixedOutcomes {
    pub fn success() -> Self {
        Self {
            status: TransactionStatus::Success,
            risk_score: 0.2,
        }
    }

    pub fn failure() -> Self {
        Self {
            status: TransactionStatus::Failed,
            risk_score: 0.2,
        }
    }
}

impl OutcomePolicy for FixedOutcomes {
    fn draw_status(&self) -> TransactionStatus {
        self.status
    }

    fn draw_risk_score(&self) -> f64 {
        self.risk_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_outcomes_extremes() {
        let always = SimulatedOutcomes::new(1.0);
        let never = SimulatedOutcomes::new(0.0);
        for _ in 0..100 {
            assert_eq!(always.draw_status(), TransactionStatus::Success);
            assert_eq!(never.draw_status(), TransactionStatus::Failed);
        }
    }

    #[test]
    fn test_risk_score_range() {
        let policy = SimulatedOutcomes::default();
        for _ in 0..100 {
            let score = policy.draw_risk_score();
            assert!((0.0..0.5).contains(&score), "score out of range: {score}");
        }
    }

    #[test]
    fn test_fixed_outcomes() {
        assert_eq!(
            FixedOutcomes::success().draw_status(),
            TransactionStatus::Success
        );
        assert_eq!(
            FixedOutcomes::failure().draw_status(),
            TransactionStatus::Failed
        );
    }
}
