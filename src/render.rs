//! Rendering of unification outcomes for diagnostics.

use crate::unify::UnifyResult;

/// Render a unification result as a single diagnostic string.
///
/// - failure → `FAIL (<reason>)`
/// - success with no bindings → `{} (empty substitution)`
/// - otherwise `{x -> Riya, y -> Apple}`: bindings in insertion order,
///   every value fully resolved, never an intermediate variable.
pub fn format_result(result: &UnifyResult) -> String {
    match result {
        UnifyResult::Failure(err) => format!("FAIL ({})", err),
        UnifyResult::Success(subst) if subst.is_empty() => "{} (empty substitution)".to_string(),
        UnifyResult::Success(subst) => {
            let items: Vec<String> = subst
                .resolved_bindings()
                .into_iter()
                .map(|(var, term)| format!("{} -> {}", var, term))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
    }
}

/// Render one batch output line: `<a> =?= <b> => <formatted result>`.
pub fn format_pair_line(a: &str, b: &str, rendered: &str) -> String {
    format!("{} =?= {} => {}", a, b, rendered)
}
