//! RNG oracle for deterministic random number generation.
//!
//! Combat never touches process-global random state. Every draw (critical
//! check, damage multiplier) goes through an [`RngOracle`] that the caller
//! owns and passes in explicitly.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed (or
//! script), they must produce the same sequence of values. This is what makes
//! battles replayable and testable.

/// Source of random draws used by combat resolution.
pub trait RngOracle {
    /// Generate the next random u32 value in the stream.
    fn next_u32(&mut self) -> u32;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Returns true with the given probability.
    ///
    /// Used for the critical-hit check.
    fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        (**self).range(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. The state advances on every draw, so one seeded instance
/// yields a whole battle's worth of values.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed.
    ///
    /// The seed is mixed once so that small consecutive seeds do not yield
    /// correlated first draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Scripted RNG that replays fixed critical flags and multiplier rolls.
///
/// Each script cycles once exhausted. An empty crit script never crits; an
/// empty roll script always returns the lower bound of the requested range.
/// Scripted rolls are clamped into the requested range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRng {
    crits: Vec<bool>,
    rolls: Vec<u32>,
    crit_cursor: usize,
    roll_cursor: usize,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcomes of successive critical checks.
    pub fn with_crits(mut self, crits: impl IntoIterator<Item = bool>) -> Self {
        self.crits = crits.into_iter().collect();
        self.crit_cursor = 0;
        self
    }

    /// Script the values of successive multiplier rolls.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.rolls = rolls.into_iter().collect();
        self.roll_cursor = 0;
        self
    }

    fn next_crit(&mut self) -> bool {
        if self.crits.is_empty() {
            return false;
        }
        let crit = self.crits[self.crit_cursor % self.crits.len()];
        self.crit_cursor += 1;
        crit
    }

    fn next_roll(&mut self) -> Option<u32> {
        if self.rolls.is_empty() {
            return None;
        }
        let roll = self.rolls[self.roll_cursor % self.rolls.len()];
        self.roll_cursor += 1;
        Some(roll)
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_roll().unwrap_or(0)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.next_crit()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        self.next_roll().map_or(min, |roll| roll.clamp(min, max.max(min)))
    }
}
