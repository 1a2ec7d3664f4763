//! First-order terms: variables, constants, and function applications.

use std::collections::HashSet;
use std::fmt;

use crate::unify::Substitution;

/// A variable in a first-order term.
/// Variables are represented by lowercase-leading names (`x`, `y1`, `who`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Var {
    name: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Var { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A function symbol with its arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FnSym {
    pub name: String,
    pub arity: usize,
}

impl FnSym {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FnSym {
            name: name.into(),
            arity,
        }
    }
}

/// A first-order term.
///
/// In textual syntax:
/// - Variables: `x`, `y`, `who` (lowercase-leading)
/// - Constants: `Apple`, `Riya`, `John` (uppercase-leading)
/// - Applications: `f(x, Apple)`, `Knows(John, x)`
///
/// Terms are immutable once constructed; equality is structural. A nullary
/// application is representable and distinct from a constant of the same
/// name, but the parser never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A variable
    Var(Var),
    /// A constant symbol
    Const(String),
    /// Function or predicate application: f(t1, ..., tn)
    App(FnSym, Vec<Term>),
}

impl Term {
    /// Create a variable term.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(Var::new(name))
    }

    /// Create a constant term.
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Const(name.into())
    }

    /// Create a function application term.
    pub fn app(name: impl Into<String>, args: Vec<Term>) -> Self {
        let arity = args.len();
        Term::App(FnSym::new(name, arity), args)
    }

    /// Collect all variables occurring in this term.
    pub fn variables(&self) -> HashSet<Var> {
        match self {
            Term::Var(var) => {
                let mut set = HashSet::new();
                set.insert(var.clone());
                set
            }
            Term::Const(_) => HashSet::new(),
            Term::App(_, args) => {
                let mut set = HashSet::new();
                for arg in args {
                    set.extend(arg.variables());
                }
                set
            }
        }
    }

    /// Check if this term contains no variables (is ground).
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Const(_) => true,
            Term::App(_, args) => args.iter().all(|arg| arg.is_ground()),
        }
    }

    /// Apply a substitution to this term, resolving bound variables
    /// through to their final values.
    pub fn apply_subst(&self, subst: &Substitution) -> Term {
        subst.apply_to_term(self)
    }

    /// Get the root symbol of this term (functor or constant name).
    /// Returns None for variables.
    pub fn root_symbol(&self) -> Option<&str> {
        match self {
            Term::Var(_) => None,
            Term::Const(name) => Some(name),
            Term::App(fn_sym, _) => Some(&fn_sym.name),
        }
    }

    /// Check if a variable occurs in this term (for the occurs check).
    pub fn occurs(&self, var: &Var) -> bool {
        match self {
            Term::Var(v) => v == var,
            Term::Const(_) => false,
            Term::App(_, args) => args.iter().any(|arg| arg.occurs(var)),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(var) => write!(f, "{}", var),
            Term::Const(name) => write!(f, "{}", name),
            Term::App(fn_sym, args) => {
                write!(f, "{}(", fn_sym.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
