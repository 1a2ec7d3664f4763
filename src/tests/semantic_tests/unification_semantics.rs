use super::*;

// =============================================================================
// UNIFICATION SEMANTIC PROPERTIES
// =============================================================================
//
// These tests verify standard properties of first-order unification.
// The MGU (Most General Unifier) must satisfy standard algebraic properties,
// and failures must carry the right reason.

// -------------------------------------------------------------------------
// Property: MGU is idempotent (σ(σ(t)) = σ(t))
//
// An idempotent substitution σ satisfies: for all terms t, σ(σ(t)) = σ(t).
// Chained bindings must be fully resolved by a single application.
// -------------------------------------------------------------------------
#[test]
fn mgu_is_idempotent_simple() {
    // If σ = MGU(x, f(y)), then σ(σ(x)) = σ(x)
    let t1 = Term::var("x");
    let t2 = parsed("f(y)");
    if let UnifyResult::Success(sigma) = unify(&t1, &t2) {
        let once = sigma.apply_to_term(&t1);
        let twice = sigma.apply_to_term(&once);
        assert_eq!(
            once, twice,
            "MGU must be idempotent: applying twice should equal applying once"
        );
    } else {
        panic!("Should unify x with f(y)");
    }
}

#[test]
fn mgu_is_idempotent_chain() {
    // σ = MGU(f(x,y), f(y,z)) must close transitive bindings
    let t1 = parsed("f(x, y)");
    let t2 = parsed("f(y, z)");
    if let UnifyResult::Success(sigma) = unify(&t1, &t2) {
        let applied_t1 = sigma.apply_to_term(&t1);
        let double_applied = sigma.apply_to_term(&applied_t1);
        assert_eq!(
            applied_t1, double_applied,
            "Chained bindings must be fully resolved in one application"
        );
    } else {
        panic!("f(x,y) and f(y,z) should unify");
    }
}

// -------------------------------------------------------------------------
// Property: MGU yields syntactically equal terms
//
// A unifier of terms t1, t2 is a substitution σ such that σ(t1) = σ(t2),
// where equality is syntactic identity.
// -------------------------------------------------------------------------
#[test]
fn mgu_produces_syntactic_equality() {
    let t1 = parsed("f(x, A)");
    let t2 = parsed("f(B, y)");
    if let UnifyResult::Success(sigma) = unify(&t1, &t2) {
        assert_eq!(
            sigma.apply_to_term(&t1),
            sigma.apply_to_term(&t2),
            "MGU must make terms syntactically identical"
        );
    } else {
        panic!("These terms should unify");
    }
}

#[test]
fn mgu_deep_nesting_produces_equality() {
    let t1 = parsed("f(g(x), h(y, z))");
    let t2 = parsed("f(g(A), h(B, w))");
    if let UnifyResult::Success(sigma) = unify(&t1, &t2) {
        assert_eq!(
            sigma.apply_to_term(&t1),
            sigma.apply_to_term(&t2),
            "Deep nesting must still produce syntactic equality"
        );
    } else {
        panic!("These terms should unify");
    }
}

// -------------------------------------------------------------------------
// Property: MGU is most general (does not over-instantiate)
// -------------------------------------------------------------------------
#[test]
fn mgu_is_most_general() {
    // σ = MGU(x, f(y)) should map x to f(y), not to some ground f(...)
    let t1 = Term::var("x");
    let t2 = parsed("f(y)");
    if let UnifyResult::Success(sigma) = unify(&t1, &t2) {
        let bound = sigma.apply_to_term(&t1);
        assert!(
            !bound.is_ground(),
            "MGU should not over-instantiate: result should contain variables"
        );
    } else {
        panic!("Should unify");
    }
}

// -------------------------------------------------------------------------
// Property: Occurs check prevents infinite terms
//
// Unifying x with f(x) would require x = f(f(f(...))), which is not a
// finite term. The check must also fire through binding chains.
// -------------------------------------------------------------------------
#[test]
fn occurs_check_direct() {
    let result = unify(&Term::var("x"), &parsed("f(x)"));
    assert!(
        matches!(result.failure(), Some(UnifyError::OccursCheck { .. })),
        "x = f(x) must fail the occurs check, got {:?}",
        result
    );
}

#[test]
fn occurs_check_indirect() {
    let result = unify(&Term::var("x"), &parsed("f(g(x))"));
    assert!(
        matches!(result.failure(), Some(UnifyError::OccursCheck { .. })),
        "x = f(g(x)) must fail the occurs check"
    );
}

#[test]
fn occurs_check_through_unification() {
    // f(x, x) = f(y, g(y)) implies x = y and x = g(y) = g(x)
    let t1 = parsed("f(x, x)");
    let t2 = parsed("f(y, g(y))");
    let result = unify(&t1, &t2);
    assert!(
        matches!(result.failure(), Some(UnifyError::OccursCheck { .. })),
        "Occurs check must catch indirect cycles through unification"
    );
}

#[test]
fn occurs_check_different_variables_ok() {
    assert!(
        unify(&Term::var("x"), &parsed("f(y)")).is_success(),
        "x = f(y) should succeed - no cycle"
    );
}

#[test]
fn occurs_check_resolves_before_testing() {
    // With y -> x already installed, binding x to f(y) would be cyclic.
    let subst = Substitution::singleton(Var::new("y"), Term::var("x"));
    assert!(occurs_check(&Var::new("x"), &parsed("f(y)"), &subst));
    assert!(!occurs_check(
        &Var::new("x"),
        &parsed("f(y)"),
        &Substitution::empty()
    ));
}

// -------------------------------------------------------------------------
// Property: failure taxonomy
//
// Constant clash, functor clash, arity clash, and kind clash each carry
// their own reason; all are ordinary outcomes, never panics.
// -------------------------------------------------------------------------
#[test]
fn constant_mismatch_fails() {
    let result = unify(&parsed("A"), &parsed("B"));
    assert!(matches!(
        result.failure(),
        Some(UnifyError::ConstantMismatch { .. })
    ));
}

#[test]
fn functor_name_clash_fails() {
    let result = unify(&parsed("f(x)"), &parsed("g(x)"));
    assert!(matches!(
        result.failure(),
        Some(UnifyError::FunctorMismatch { .. })
    ));
}

#[test]
fn functor_arity_clash_fails() {
    // Same functor name, arity 1 vs 2.
    let result = unify(&parsed("f(a)"), &parsed("f(a, b)"));
    match result.failure() {
        Some(UnifyError::FunctorMismatch {
            left,
            left_arity,
            right,
            right_arity,
        }) => {
            assert_eq!(left, right);
            assert_eq!((*left_arity, *right_arity), (1, 2));
        }
        other => panic!("expected FunctorMismatch, got {:?}", other),
    }
}

#[test]
fn kind_mismatch_constant_vs_application() {
    let result = unify(&parsed("Apple"), &parsed("f(x)"));
    assert!(matches!(
        result.failure(),
        Some(UnifyError::KindMismatch { .. })
    ));
}

// -------------------------------------------------------------------------
// Property: ground terms unify iff structurally identical
// -------------------------------------------------------------------------
#[test]
fn ground_identical_empty_substitution() {
    let t = parsed("f(A, g(B))");
    match unify(&t, &t) {
        UnifyResult::Success(sigma) => {
            assert!(
                sigma.is_empty(),
                "Already-identical terms need no bindings"
            );
        }
        UnifyResult::Failure(e) => panic!("ground identical terms must unify, got {e}"),
    }
}

#[test]
fn ground_different_fails() {
    assert!(unify(&parsed("f(A, B)"), &parsed("f(A, C)")).is_failure());
}

#[test]
fn empty_substitution_is_success_not_failure() {
    let result = unify(&parsed("A"), &parsed("A"));
    assert!(result.is_success());
    assert!(!result.is_failure());
    assert_eq!(format_result(&result), "{} (empty substitution)");
}

// -------------------------------------------------------------------------
// Worked examples from the textual surface
// -------------------------------------------------------------------------
#[test]
fn example_eats_binds_both_sides() {
    // Eats(x, Apple) =?= Eats(Riya, y) => {x -> Riya, y -> Apple}
    let result = unify(&parsed("Eats(x, Apple)"), &parsed("Eats(Riya, y)"));
    let sigma = result.substitution().expect("should unify");
    let resolved = sigma.resolved_bindings();
    assert_eq!(resolved.len(), 2);
    assert!(resolved.contains(&(Var::new("x"), Term::constant("Riya"))));
    assert!(resolved.contains(&(Var::new("y"), Term::constant("Apple"))));
}

#[test]
fn example_conflicting_constants() {
    // f(x, x) =?= f(A, B): binding x -> B then requiring x -> A conflicts.
    let result = unify(&parsed("f(x, x)"), &parsed("f(A, B)"));
    assert!(matches!(
        result.failure(),
        Some(UnifyError::ConstantMismatch { .. })
    ));
}

#[test]
fn example_lowercase_pair_chains_variables() {
    // In f(a, b) the lowercase a and b are variables, so f(x,x) unifies
    // with it by chaining rather than clashing.
    let t1 = parsed("f(x, x)");
    let t2 = parsed("f(a, b)");
    let result = unify(&t1, &t2);
    let sigma = result.substitution().expect("variables chain, no clash");
    assert_eq!(sigma.apply_to_term(&t1), sigma.apply_to_term(&t2));
}

#[test]
fn example_shared_constant_cannot_be_two_terms() {
    // p(f(a), g(y)) =?= p(X, X): X would need to equal both f(a) and g(y).
    let result = unify(&parsed("p(f(a), g(y))"), &parsed("p(X, X)"));
    assert!(result.is_failure());
}

#[test]
fn example_shared_variable_forces_clash() {
    // Knows(John, x) =?= Knows(x, Elisabeth): x cannot be both John and
    // Elisabeth.
    let result = unify(&parsed("Knows(John, x)"), &parsed("Knows(x, Elisabeth)"));
    assert!(matches!(
        result.failure(),
        Some(UnifyError::ConstantMismatch { .. })
    ));
}

#[test]
fn example_nested_binding_resolves_through() {
    // Ancestor(x, Father(x)) =?= Ancestor(Father(John), y)
    let result = unify(
        &parsed("Ancestor(x, Father(x))"),
        &parsed("Ancestor(Father(John), y)"),
    );
    let sigma = result.substitution().expect("should unify");
    assert_eq!(
        sigma.apply_to_term(&Term::var("x")),
        parsed("Father(John)")
    );
    assert_eq!(
        sigma.apply_to_term(&Term::var("y")),
        parsed("Father(Father(John))")
    );
}

// -------------------------------------------------------------------------
// Property: seeded unification respects the starting substitution
// -------------------------------------------------------------------------
#[test]
fn seeded_substitution_constrains_result() {
    let seed = Substitution::singleton(Var::new("x"), Term::constant("A"));
    let config = UnifyConfig::default();
    let ok = unify_with(&Term::var("x"), &parsed("A"), seed.clone(), &config);
    assert!(ok.is_success());
    let clash = unify_with(&Term::var("x"), &parsed("B"), seed, &config);
    assert!(matches!(
        clash.failure(),
        Some(UnifyError::ConstantMismatch { .. })
    ));
}

// -------------------------------------------------------------------------
// Property: simultaneous unification is conjunctive
// -------------------------------------------------------------------------
#[test]
fn simultaneous_unification_must_satisfy_all() {
    let pairs = vec![
        (Term::var("x"), parsed("A")),
        (Term::var("y"), parsed("B")),
        (parsed("f(x, y)"), parsed("f(A, B)")),
    ];
    if let UnifyResult::Success(sigma) = unify_many(&pairs) {
        for (t1, t2) in &pairs {
            assert_eq!(
                sigma.apply_to_term(t1),
                sigma.apply_to_term(t2),
                "Simultaneous unifier must satisfy ALL pairs"
            );
        }
    } else {
        panic!("Should find simultaneous unifier for consistent pairs");
    }
}

#[test]
fn simultaneous_unification_detects_inconsistency() {
    let pairs = vec![
        (Term::var("x"), parsed("A")),
        (Term::var("x"), parsed("B")),
    ];
    assert!(
        unify_many(&pairs).is_failure(),
        "Inconsistent constraint set must fail"
    );
}

#[test]
fn simultaneous_unification_propagates_constraints() {
    // Transitivity: x = y, y = A implies x = A
    let pairs = vec![
        (Term::var("x"), Term::var("y")),
        (Term::var("y"), parsed("A")),
    ];
    if let UnifyResult::Success(sigma) = unify_many(&pairs) {
        assert_eq!(
            sigma.apply_to_term(&Term::var("x")),
            Term::constant("A"),
            "Transitivity: x = y ∧ y = A ⟹ x = A"
        );
    } else {
        panic!("Should succeed with consistent constraints");
    }
}

// -------------------------------------------------------------------------
// Property: the step guard converts blowup into a typed failure
// -------------------------------------------------------------------------
#[test]
fn resource_guard_reports_typed_failure() {
    let config = UnifyConfig { max_steps: 1 };
    let result = unify_with(
        &parsed("f(x, y)"),
        &parsed("f(A, B)"),
        Substitution::empty(),
        &config,
    );
    assert_eq!(
        result.failure(),
        Some(&UnifyError::ResourceExceeded { limit: 1 })
    );
}

#[test]
fn default_budget_handles_wide_terms() {
    let args_l: Vec<String> = (0..100).map(|i| format!("x{}", i)).collect();
    let args_r: Vec<String> = (0..100).map(|i| format!("C{}", i)).collect();
    let t1 = parsed(&format!("f({})", args_l.join(", ")));
    let t2 = parsed(&format!("f({})", args_r.join(", ")));
    let result = unify(&t1, &t2);
    let sigma = result.substitution().expect("wide term should unify");
    assert_eq!(sigma.len(), 100);
}
