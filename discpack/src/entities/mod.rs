mod bin;
mod instance;
mod item;
mod problem;
mod solution;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use instance::BPInstance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use problem::BPPlacement;
#[doc(inline)]
pub use problem::BPProblem;
#[doc(inline)]
pub use solution::BPSolution;
