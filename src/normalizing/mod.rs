pub mod close;
pub mod comparisons;
pub mod dnf;
pub mod linearize;
pub mod nnf;
pub mod pnf;
pub mod simplify;
