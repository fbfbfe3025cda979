//! Graph traversal algorithms (BFS and single-branch DFS).

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{RatError, RatResult};

use super::AdjListsGraph;

/// Breadth-first visitation order from `start`.
///
/// Successors are explored in out-list order and each vertex is enqueued at
/// most once. An absent start vertex yields an empty order.
pub fn bfs<T>(graph: &AdjListsGraph<T>, start: &T) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let Some(start_idx) = graph.index_of(start) else {
        return Vec::new();
    };

    let mut visited = vec![false; graph.vertex_count()];
    let mut order: Vec<T> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start_idx] = true;
    queue.push_back(start_idx);

    while let Some(current) = queue.pop_front() {
        order.push(graph.vertices()[current].clone());
        for next in graph.out_list(current) {
            if let Some(next_idx) = graph.index_of(next) {
                if !visited[next_idx] {
                    visited[next_idx] = true;
                    queue.push_back(next_idx);
                }
            }
        }
    }

    order
}

/// Depth-first walk from `start`.
///
/// Looks at the top of the stack: if all of its successors are visited it is
/// popped, otherwise only the first unvisited successor (in out-list order)
/// is recorded and pushed. Unlike [`bfs`], an absent start vertex is an
/// error rather than an empty walk.
pub fn dfs<T>(graph: &AdjListsGraph<T>, start: &T) -> RatResult<Vec<T>>
where
    T: Eq + Hash + Clone + Debug,
{
    let start_idx = graph
        .index_of(start)
        .ok_or_else(|| RatError::VertexNotFound(format!("{:?}", start)))?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut walk: Vec<T> = vec![start.clone()];
    let mut stack: Vec<usize> = vec![start_idx];
    visited[start_idx] = true;

    while let Some(&top) = stack.last() {
        let next = graph
            .out_list(top)
            .iter()
            .filter_map(|v| graph.index_of(v))
            .find(|&idx| !visited[idx]);

        match next {
            Some(idx) => {
                visited[idx] = true;
                walk.push(graph.vertices()[idx].clone());
                stack.push(idx);
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(walk)
}
