use crate::game::{Game, Player};

/// Score of a position from the point of view of one player.
///
/// `WIN` and `LOSS` are the infinite sentinels for decided games and dominate every finite value.
///
/// # Safety
///
/// - value shall never be f64::NAN, making the order total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation(f64);

impl Valuation {
    pub const WIN: Valuation = Valuation(f64::INFINITY);
    pub const LOSS: Valuation = Valuation(f64::NEG_INFINITY);
    pub const ZERO: Valuation = Valuation(0.0);

    pub fn new(value: f64) -> Self {
        assert!(!value.is_nan(), "Valuation can't be NaN");

        // adding 0.0 turns -0.0 into 0.0, keeping PartialEq and Ord consistent
        Valuation(value + 0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_win(&self) -> bool {
        *self == Valuation::WIN
    }

    pub fn is_loss(&self) -> bool {
        *self == Valuation::LOSS
    }
}

impl From<f64> for Valuation {
    fn from(value: f64) -> Self {
        Valuation::new(value)
    }
}

impl Eq for Valuation {}

impl PartialOrd for Valuation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Valuation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/*====================================================================================================================*/

pub type ValuationFn<G> = fn(&G, Player) -> Valuation;

/// Scores `game` from the point of view of `player`.
///
/// Must return `Valuation::LOSS` if `player` has lost and `Valuation::WIN` if `player` has won.
pub trait Evaluator<G: Game> {
    fn score(&self, game: &G, player: Player) -> Valuation;
}

impl<G, F> Evaluator<G> for F
where
    G: Game,
    F: Fn(&G, Player) -> Valuation,
{
    fn score(&self, game: &G, player: Player) -> Valuation {
        self(game, player)
    }
}

/*====================================================================================================================*/
