//! Decision oracles
//!
//! An oracle looks at a [`DecisionRequest`] and picks the opponent's next
//! move. Oracles never fail: transport or protocol problems are logged and
//! answered with [`Decision::Stay`].

pub mod chase;
pub mod process;
pub mod wire;
pub mod worker;

pub use chase::ChaseOracle;
pub use process::{ArgMode, ProcessOracle};
pub use wire::{DecisionRequest, parse_reply, shell_quote};
pub use worker::AsyncOracle;

use crate::sim::Decision;

/// Chooses the opponent's movement for one polling interval
pub trait DecisionOracle {
    fn decide(&mut self, request: &DecisionRequest) -> Decision;
}

impl<F> DecisionOracle for F
where
    F: FnMut(&DecisionRequest) -> Decision,
{
    fn decide(&mut self, request: &DecisionRequest) -> Decision {
        self(request)
    }
}
