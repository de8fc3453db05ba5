use crate::error::PicoGradError;
use crate::value::Value;
use crate::value_data::ValueData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Stable identity of a node in the computation graph.
///
/// A raw pointer to the node's shared state gives a stable key even though
/// `Value` handles are cloned freely; the handles held by the traversal keep
/// the pointed-to allocations alive for its whole duration.
pub type NodeId = *const RwLock<ValueData>;

/// Builds a post-order topological sort of every node reachable from `root`
/// via operand edges.
///
/// Each node is recorded the first time it is *finished* (all operands
/// already recorded), with a visited set so that a node shared by several
/// consumers is emitted exactly once. Reversing the result yields root
/// first, leaves last: the processing order of the backward pass.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut ordered: Vec<Value> = Vec::new();
    visit(root, &mut visited, &mut ordered);
    ordered
}

fn visit(node: &Value, visited: &mut HashSet<NodeId>, ordered: &mut Vec<Value>) {
    if !visited.insert(node.id_ptr()) {
        return;
    }
    let grad_fn = node.read_data().grad_fn.clone();
    if let Some(grad_fn) = grad_fn {
        for operand in grad_fn.inputs() {
            visit(&operand, visited, ordered);
        }
    }
    ordered.push(node.clone());
}

/// Runs the full reverse sweep from `root`.
///
/// Seeds `root.grad = 1.0`, then walks the reversed post-order (root first,
/// leaves last) invoking each node's backward rule and *adding* every
/// contribution into the matching operand's accumulator. The ordering
/// guarantees that by the time a node's rule executes, its own gradient
/// already holds the sum over every downstream consumer; the diamond case
/// (one node feeding several consumers) accumulates, never overwrites.
pub(crate) fn run_backward(root: &Value) -> Result<(), PicoGradError> {
    let ordered = topological_sort(root);
    log::debug!("backward: {} nodes reachable from root", ordered.len());

    root.write_data().grad = 1.0;

    for node in ordered.iter().rev() {
        let (grad, grad_fn) = {
            let guard = node.read_data();
            (guard.grad, guard.grad_fn.clone())
        };
        let Some(grad_fn) = grad_fn else {
            continue; // leaf: nothing upstream
        };

        let contributions = grad_fn.backward(grad)?;
        let operands = grad_fn.inputs();
        if contributions.len() != operands.len() {
            return Err(PicoGradError::ArityMismatch {
                expected: operands.len(),
                actual: contributions.len(),
                operation: node.op().unwrap_or("?").to_string(),
            });
        }
        for (operand, contribution) in operands.iter().zip(contributions) {
            operand.write_data().grad += contribution;
        }
    }
    Ok(())
}
