//! Seeded differential testing for `chained_table`.
//!
//! A generator draws operations from a seeded `StdRng`, applies each one to a
//! plain reference model and yields it together with the model's result. The
//! same operation is then applied to the real container; the first mismatch
//! is returned as an [`OperationFailure`] that can be replayed from its seed.

use core::fmt::{self, Debug, Display, Formatter};

use chained_table::{Error, Position};
use log::{info, warn};

pub mod sequence;
pub mod table;
mod traits;

pub use traits::*;

/// Below this many stored values the generators only insert.
pub const MIN_VALUES: usize = 4;

/// Operations shown before the failing one when a failure is reported.
const PLAYBACK_WINDOW: usize = 5;

/// What an operation returned, in a form both sides can be compared on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<V> {
    Unit,
    Inserted(bool),
    Value(V),
    Index(usize),
    Found(bool),
    Len(usize),
    Position(Position),
    Failed(Error),
}

impl<V> From<chained_table::Result<V>> for Outcome<V> {
    fn from(res: chained_table::Result<V>) -> Self {
        match res {
            Ok(v) => Outcome::Value(v),
            Err(err) => Outcome::Failed(err),
        }
    }
}

pub struct OperationFailure<G: OperationGenerator> {
    pub seed: u64,
    pub op_num: usize,
    pub operations: Vec<(G::Operation, <G::Operation as Operation>::Result)>,
    pub actual: <G::Operation as Operation>::Result,
    pub data: G::ReferenceImpl,
}

impl<G> OperationFailure<G>
where
    G: OperationGenerator,
    G::Operation: Debug,
{
    /// Logs the operations leading up to the failure.
    pub fn playback(&self) {
        let lower = self.op_num.saturating_sub(PLAYBACK_WINDOW);
        for (ind, (op, expected)) in self.operations.iter().enumerate().skip(lower) {
            warn!("--------- operation {ind} ----------");
            warn!("operation: {op:?}");
            warn!("expected: {expected:?}");
        }
        warn!("actual: {:?}", self.actual);
    }
}

impl<G> Display for OperationFailure<G>
where
    G: OperationGenerator,
    G::Operation: Debug,
    G::ReferenceImpl: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (op, expected) = &self.operations[self.op_num];
        write!(
            f,
            "seed {} diverged at operation {}: {:?} expected {:?}, got {:?} (reference: {:?})",
            self.seed, self.op_num, op, expected, self.actual, self.data
        )
    }
}

impl<G> Debug for OperationFailure<G>
where
    G: OperationGenerator,
    G::Operation: Debug,
    G::ReferenceImpl: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Runs `ops` operations from the generator seeded with `seed` against
/// `target`, stopping at the first result that differs from the reference.
pub fn test_operations<G>(
    seed: u64,
    ops: usize,
    target: &mut <G::Operation as Operation>::Target,
) -> Result<(), OperationFailure<G>>
where
    G: OperationGenerator,
{
    info!("running {ops} operations with seed {seed}");
    let mut gen = G::from_seed(seed);
    for op_num in 0..ops {
        let Some((op, expected)) = gen.next() else {
            break;
        };
        let actual = op.apply(target);
        if actual != expected {
            // replay from the seed to recover everything up to the failure
            let mut replay = G::from_seed(seed);
            let operations: Vec<_> = (&mut replay).take(op_num + 1).collect();
            return Err(OperationFailure {
                seed,
                op_num,
                operations,
                actual,
                data: replay.data(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
fn init_test_logger() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .try_init();
    });
}
