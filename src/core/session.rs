use crate::core::parser::parse_payload;
use crate::core::pool::unplayed_pool;
use crate::core::strategy::recommend;
use crate::domain::model::{PlayedSets, Recommendation, RecommendationRequest, Strategy};
use crate::utils::error::LottoError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound for a user-entered set count.
pub const MAX_SET_COUNT: usize = 1000;

#[derive(Debug)]
pub enum ScanOutcome {
    /// Not a ticket URL, nothing changed.
    Skipped,
    /// Malformed ticket, nothing changed.
    Rejected(LottoError),
    Accepted(Recommendation),
}

/// In-memory state between scans: the last ticket, the chosen strategy and
/// set count, and the random source used for every generation.
pub struct Session<R: Rng = StdRng> {
    played: PlayedSets,
    strategy: Strategy,
    set_count: usize,
    rng: R,
}

impl Session<StdRng> {
    /// 有 seed 時結果可重現，否則從系統亂數初始化
    pub fn with_seed(seed: Option<u64>, strategy: Strategy, set_count: usize) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::new(rng, strategy, set_count)
    }
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R, strategy: Strategy, set_count: usize) -> Self {
        Self {
            played: PlayedSets::default(),
            strategy,
            set_count,
            rng,
        }
    }

    pub fn played(&self) -> &PlayedSets {
        &self.played
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_count(&self) -> usize {
        self.set_count
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        tracing::info!("🎲 Strategy set to {}", strategy);
        self.strategy = strategy;
    }

    /// Applies a typed set count the way the input field does: anything that
    /// does not start with a number becomes 0. Counts above
    /// [`MAX_SET_COUNT`] are refused and the previous value is kept.
    pub fn set_count_input(&mut self, input: &str) -> usize {
        let count = coerce_set_count(input);
        if count > MAX_SET_COUNT {
            tracing::warn!(
                "Set count {} is above the limit of {}, keeping {}",
                count,
                MAX_SET_COUNT,
                self.set_count
            );
            return self.set_count;
        }
        tracing::info!("🔢 Set count set to {}", count);
        self.set_count = count;
        count
    }

    /// Parses a scan and, when it holds a ticket, replaces the played sets
    /// and generates recommendations for it.
    pub fn handle_scan(&mut self, payload: &str) -> ScanOutcome {
        match parse_payload(payload) {
            Ok(Some(played)) => {
                tracing::info!("🎫 Scanned ticket with {} played sets", played.len());
                self.played = played;
                ScanOutcome::Accepted(self.generate())
            }
            Ok(None) => ScanOutcome::Skipped,
            Err(e) => {
                tracing::warn!("❌ Invalid URL or parameters: {} ({})", payload, e);
                tracing::warn!("💡 {}", e.recovery_suggestion());
                ScanOutcome::Rejected(e)
            }
        }
    }

    /// Recommends sets for the last scanned ticket with the current settings.
    pub fn generate(&mut self) -> Recommendation {
        let request = RecommendationRequest {
            played: self.played.clone(),
            set_count: self.set_count,
            strategy: self.strategy,
        };
        build_recommendation(request, &mut self.rng)
    }
}

/// Pool plus recommended sets for one request; each set is sorted for display.
pub fn build_recommendation<R: Rng + ?Sized>(
    request: RecommendationRequest,
    rng: &mut R,
) -> Recommendation {
    let pool = unplayed_pool(&request.played);
    let mut sets = recommend(&pool, request.set_count, request.strategy, rng);
    for set in &mut sets {
        set.sort_unstable();
    }

    tracing::debug!("Pool has {} numbers, produced {} sets", pool.len(), sets.len());

    Recommendation {
        strategy: request.strategy,
        played: request.played,
        pool,
        sets,
    }
}

/// Reads a leading integer like a lenient number field: surrounding
/// whitespace and a sign are allowed, trailing garbage is ignored, and
/// anything without digits or below zero is 0.
pub fn coerce_set_count(input: &str) -> usize {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(usize::MAX)
}
