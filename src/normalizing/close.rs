use crate::syntax_tree::fol::{Formula, Quantifier};

/// Existentially close a formula over its free variables.
///
/// The variables are bound in sorted order, the largest symbol becoming the
/// outermost quantifier; closure is therefore deterministic.
pub fn close(formula: Formula) -> Formula {
    let free = formula.free_variables();
    free.into_iter().fold(formula, |formula, variable| {
        formula.quantify(Quantifier::Exists, variable)
    })
}

#[cfg(test)]
mod tests {
    use super::close;

    #[test]
    fn close_formulas() {
        for (src, target) in [
            ("T", "T"),
            ("1 < 2", "1<2"),
            ("x < y", "?y.?x.x<y"),
            ("?x.x < y", "?y.?x.x<y"),
            ("!x.x < y | y < z", "?z.?y.!x.x<y | y<z"),
            ("!x.?y.x < y", "!x.?y.x<y"),
        ] {
            let closed = close(src.parse().unwrap());
            assert_eq!(closed, target.parse().unwrap(), "closing `{src}`");
            assert!(
                closed.free_variables().is_empty(),
                "the closure of `{src}` has free variables"
            );
        }
    }
}
