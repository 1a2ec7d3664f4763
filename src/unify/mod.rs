//! Unification: computing most general unifiers for first-order terms.

mod substitution;
mod unify;

pub use substitution::Substitution;
pub use unify::{occurs_check, unify, unify_many, unify_with, UnifyConfig, UnifyError, UnifyResult};
