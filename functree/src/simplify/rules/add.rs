//! Simplification rules for additions.

use crate::{
    node::{FunctionKind, Node},
    simplify::{rules::do_add, step::Step},
    step::StepCollector,
};

/// `a + b = c`, where `a`, `b` and `c` are constants.
///
/// Constants ignore their input, so the sum is a leaf.
pub fn add_constants(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_add(node, |left, right| {
        let (Node::Function { func: a, .. }, Node::Function { func: b, .. }) = (left, right) else {
            return None;
        };
        if *a.kind() != FunctionKind::Constant || *b.kind() != FunctionKind::Constant {
            return None;
        }

        let sum = a.coefficient().checked_add(b.coefficient())?;
        Some(Node::leaf(a.with_coefficient(sum)))
    })?;

    step_collector.push(Step::AddConstants);
    Some(opt)
}

/// Combines two monomials that are written the same way and have the same input.
///
/// `x^2 + x^2 = 2x^2`
/// `3(ln(x))^5 + 3(ln(x))^5 = 6(ln(x))^5`
///
/// The monomials are compared by their plain text, coefficient included, so `2x^2 + 3x^2` is left
/// as is.
pub fn combine_like_monomials(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_add(node, |left, right| {
        let (
            Node::Function { func: a, input: a_input },
            Node::Function { func: b, input: b_input },
        ) = (left, right) else {
            return None;
        };
        if !a.kind().is_monomial() || !b.kind().is_monomial() {
            return None;
        }

        // the value string covers coefficient, variant and exponent; the inputs are compared
        // separately since the value is written over `x`
        if a.to_string() != b.to_string() || a_input != b_input {
            return None;
        }

        let sum = a.coefficient().checked_add(b.coefficient())?;
        Some(Node::Function { func: a.with_coefficient(sum), input: a_input.clone() })
    })?;

    step_collector.push(Step::CombineLikeMonomials);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    add_constants(node, step_collector)
        .or_else(|| combine_like_monomials(node, step_collector))
}
