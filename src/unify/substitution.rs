//! Substitution: mapping variables to terms.

use indexmap::IndexMap;

use crate::syntax::{Term, Var};

/// A substitution mapping variables to terms.
///
/// A substitution σ = {x₁ → t₁, ..., xₙ → tₙ} maps variables to terms.
/// Bindings are kept in insertion order so diagnostic output is
/// deterministic.
///
/// Invariant: every binding installed during unification has passed the
/// occurs check against the substitution it joins, so no binding's value
/// resolves back to its own variable and [`apply_to_term`] terminates.
///
/// [`apply_to_term`]: Substitution::apply_to_term
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    bindings: IndexMap<Var, Term>,
}

impl Substitution {
    /// Create an empty substitution (identity).
    pub fn empty() -> Self {
        Substitution {
            bindings: IndexMap::new(),
        }
    }

    /// Create a substitution with a single binding.
    pub fn singleton(var: Var, term: Term) -> Self {
        let mut bindings = IndexMap::new();
        bindings.insert(var, term);
        Substitution { bindings }
    }

    /// Add a binding to this substitution.
    pub fn bind(&mut self, var: Var, term: Term) {
        self.bindings.insert(var, term);
    }

    /// Look up a variable in this substitution.
    pub fn lookup(&self, var: &Var) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Compose two substitutions: apply `other` first, then `self`.
    ///
    /// Every binding `(v, t)` of `other` becomes `(v, self(t))`; bindings of
    /// `self` are then carried over and override on overlapping keys. The
    /// override direction is a fixed contract: the unifier relies on the
    /// newest binding winning.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::empty();

        for (var, term) in &other.bindings {
            result.bind(var.clone(), self.apply_to_term(term));
        }

        for (var, term) in &self.bindings {
            result.bind(var.clone(), term.clone());
        }

        result
    }

    /// Apply this substitution to a term, resolving variables through
    /// binding chains: with {x → y, y → A}, `x` resolves to `A`, not `y`.
    /// Unbound variables and constants resolve to themselves.
    pub fn apply_to_term(&self, term: &Term) -> Term {
        match term {
            Term::Var(var) => match self.bindings.get(var) {
                Some(t) => self.apply_to_term(t),
                None => term.clone(),
            },
            Term::Const(_) => term.clone(),
            Term::App(fn_sym, args) => {
                let new_args: Vec<Term> = args.iter().map(|arg| self.apply_to_term(arg)).collect();
                Term::App(fn_sym.clone(), new_args)
            }
        }
    }

    /// Iterate over the bindings in insertion order.
    pub fn bindings(&self) -> impl Iterator<Item = (&Var, &Term)> {
        self.bindings.iter()
    }

    /// Bindings with every value fully resolved under this substitution,
    /// in insertion order. Chained bindings show their final value.
    pub fn resolved_bindings(&self) -> Vec<(Var, Term)> {
        self.bindings
            .iter()
            .map(|(var, term)| (var.clone(), self.apply_to_term(term)))
            .collect()
    }

    /// Get the domain of this substitution (variables that are mapped).
    pub fn domain(&self) -> Vec<&Var> {
        self.bindings.keys().collect()
    }

    /// Check if this substitution is empty (has no bindings).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
