//! Unification: Robinson's algorithm for computing most general unifiers.

use thiserror::Error;

use super::Substitution;
use crate::syntax::{Term, Var};

/// Resource limits for a single unification call.
///
/// Each pair popped from the worklist consumes one step; exhausting the
/// budget fails the call with [`UnifyError::ResourceExceeded`] instead of
/// risking pathological blowup on adversarially deep or wide terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifyConfig {
    pub max_steps: usize,
}

impl Default for UnifyConfig {
    fn default() -> Self {
        UnifyConfig { max_steps: 10_000 }
    }
}

/// Result of a unification attempt.
///
/// Failure is an ordinary outcome (the terms do not unify), never a crash.
/// An empty substitution is a valid success: the terms were already equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyResult {
    /// Unification succeeded with the given most general unifier.
    Success(Substitution),
    /// Unification failed.
    Failure(UnifyError),
}

impl UnifyResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UnifyResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, UnifyResult::Failure(_))
    }

    /// The mgu, if unification succeeded.
    pub fn substitution(&self) -> Option<&Substitution> {
        match self {
            UnifyResult::Success(subst) => Some(subst),
            UnifyResult::Failure(_) => None,
        }
    }

    /// The failure reason, if unification failed.
    pub fn failure(&self) -> Option<&UnifyError> {
        match self {
            UnifyResult::Success(_) => None,
            UnifyResult::Failure(err) => Some(err),
        }
    }
}

/// Reasons why unification can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    /// Occurs check failed: the variable would occur in its own binding.
    #[error("occurs check: {var} occurs in {term}")]
    OccursCheck { var: Var, term: Term },
    /// Two constants with different names.
    #[error("constant mismatch: {left} vs {right}")]
    ConstantMismatch { left: String, right: String },
    /// Two applications with different functor names or arities.
    #[error("functor mismatch: {left}/{left_arity} vs {right}/{right_arity}")]
    FunctorMismatch {
        left: String,
        left_arity: usize,
        right: String,
        right_arity: usize,
    },
    /// Term kinds that can never unify (e.g. constant vs application).
    #[error("kind mismatch: {left} vs {right}")]
    KindMismatch { left: Term, right: Term },
    /// The step budget was exhausted before the worklist emptied.
    #[error("resource limit exceeded after {limit} steps")]
    ResourceExceeded { limit: usize },
}

/// Would binding `var` to `term` create a cyclic (infinite) term?
///
/// `term` is first resolved under `subst`, then checked structurally for
/// `var` at any depth. Must hold false before any binding is installed.
pub fn occurs_check(var: &Var, term: &Term, subst: &Substitution) -> bool {
    subst.apply_to_term(term).occurs(var)
}

/// Compute the most general unifier of two terms.
///
/// Robinson's algorithm with occurs check, default resource limits.
pub fn unify(t1: &Term, t2: &Term) -> UnifyResult {
    unify_with(t1, t2, Substitution::empty(), &UnifyConfig::default())
}

/// Unify starting from an existing substitution, with explicit limits.
pub fn unify_with(t1: &Term, t2: &Term, subst: Substitution, config: &UnifyConfig) -> UnifyResult {
    solve(vec![(t1.clone(), t2.clone())], subst, config)
}

/// Simultaneous unification of multiple term pairs.
///
/// Finds a substitution σ such that σ(t1ᵢ) = σ(t2ᵢ) for all pairs.
pub fn unify_many(pairs: &[(Term, Term)]) -> UnifyResult {
    let worklist: Vec<(Term, Term)> = pairs.iter().rev().cloned().collect();
    solve(worklist, Substitution::empty(), &UnifyConfig::default())
}

/// Worklist loop shared by all entry points.
///
/// Pairs are pushed left-to-right and popped from the back, so argument
/// processing order is fixed and traces are deterministic. Every step
/// either discards a pair or replaces one with strictly smaller subterm
/// pairs; together with the occurs check this guarantees termination.
fn solve(mut pairs: Vec<(Term, Term)>, mut subst: Substitution, config: &UnifyConfig) -> UnifyResult {
    let mut steps = 0usize;

    while let Some((a, b)) = pairs.pop() {
        steps += 1;
        if steps > config.max_steps {
            return UnifyResult::Failure(UnifyError::ResourceExceeded {
                limit: config.max_steps,
            });
        }

        // Resolve both sides so comparisons see up-to-date bindings.
        let a = subst.apply_to_term(&a);
        let b = subst.apply_to_term(&b);

        if a == b {
            continue;
        }

        match (a, b) {
            (Term::Var(var), term) | (term, Term::Var(var)) => {
                if occurs_check(&var, &term, &subst) {
                    return UnifyResult::Failure(UnifyError::OccursCheck { var, term });
                }
                subst = Substitution::singleton(var, term).compose(&subst);
            }
            (Term::Const(left), Term::Const(right)) => {
                // Names differ, or the pair would have been discarded above.
                return UnifyResult::Failure(UnifyError::ConstantMismatch { left, right });
            }
            (Term::App(f, f_args), Term::App(g, g_args)) => {
                if f.name != g.name || f_args.len() != g_args.len() {
                    return UnifyResult::Failure(UnifyError::FunctorMismatch {
                        left: f.name,
                        left_arity: f_args.len(),
                        right: g.name,
                        right_arity: g_args.len(),
                    });
                }
                pairs.extend(f_args.into_iter().zip(g_args));
            }
            (left, right) => {
                return UnifyResult::Failure(UnifyError::KindMismatch { left, right });
            }
        }
    }

    UnifyResult::Success(subst)
}
