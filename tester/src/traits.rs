use core::fmt::Debug;

use rand::Rng;

/// deterministically applies an operation to a target returning the result
pub trait Operation {
    type Result: PartialEq + Debug;
    type Target;
    fn apply(&self, target: &mut Self::Target) -> Self::Result;
}

// deterministically generates a sequence of valid operations, each paired with
// the result the reference implementation produced for it.
pub trait OperationGenerator:
    Iterator<Item = (Self::Operation, <Self::Operation as Operation>::Result)> + Sized
{
    type Operation: Operation;
    type ReferenceImpl;
    fn from_seed(seed: u64) -> Self;
    fn data(self) -> Self::ReferenceImpl;
}

// extends operation generator so that it can be created from a random seed.
pub trait RandomOperationGen: OperationGenerator {
    /// Returns the seed alongside the generator so a failure can be replayed.
    fn random() -> (u64, Self) {
        let seed: u64 = rand::thread_rng().gen();
        (seed, Self::from_seed(seed))
    }
}

impl<T: OperationGenerator> RandomOperationGen for T {}
