//! Command implementations

mod run;
mod unlabeled;

pub use run::run;
pub use unlabeled::unlabeled;
