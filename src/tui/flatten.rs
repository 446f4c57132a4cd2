//! Turns the flat task list for a project into a depth-annotated display list.

use std::collections::{HashMap, HashSet};

use crate::models::Task;

/// A task paired with its nesting depth, for rendering only. Rebuilt from the
/// authoritative task list on every load, never mutated in place.
#[derive(Debug, Clone)]
pub struct DisplayTask {
    pub task: Task,
    pub depth: usize,
}

/// Flatten tasks into stable pre-order: every parent before its children,
/// siblings in arrival order, depth counted from 0 at the roots.
///
/// A task whose parent id is not present in the input set is treated as a
/// root, which keeps partial or stale loads renderable. The output always
/// contains every input task exactly once; even a parent cycle (which the
/// store's acyclicity invariant rules out) cannot drop entries or loop,
/// because unreachable tasks are appended at depth 0 after the traversal.
pub fn flatten_tasks(tasks: Vec<Task>) -> Vec<DisplayTask> {
    if tasks.is_empty() {
        return Vec::new();
    }

    let ids: HashSet<i64> = tasks.iter().map(|t| t.id).collect();

    let mut roots: Vec<usize> = Vec::new();
    let mut children: HashMap<i64, Vec<usize>> = HashMap::new();
    for (i, task) in tasks.iter().enumerate() {
        match task.parent_task_id {
            Some(parent_id) if ids.contains(&parent_id) => {
                children.entry(parent_id).or_default().push(i);
            }
            _ => roots.push(i),
        }
    }

    let mut order: Vec<(usize, usize)> = Vec::with_capacity(tasks.len());
    let mut visited: HashSet<usize> = HashSet::with_capacity(tasks.len());
    for &root in &roots {
        push_subtree(root, 0, &tasks, &children, &mut order, &mut visited);
    }
    // Fail-safe for cyclic input: anything the traversal never reached is
    // emitted as a root so the output still covers every task.
    for i in 0..tasks.len() {
        if !visited.contains(&i) {
            order.push((i, 0));
            visited.insert(i);
        }
    }

    let mut by_index: Vec<Option<Task>> = tasks.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|(i, depth)| by_index[i].take().map(|task| DisplayTask { task, depth }))
        .collect()
}

fn push_subtree(
    index: usize,
    depth: usize,
    tasks: &[Task],
    children: &HashMap<i64, Vec<usize>>,
    order: &mut Vec<(usize, usize)>,
    visited: &mut HashSet<usize>,
) {
    if !visited.insert(index) {
        return;
    }
    order.push((index, depth));
    if let Some(kids) = children.get(&tasks[index].id) {
        for &child in kids {
            push_subtree(child, depth + 1, tasks, children, order, visited);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn task(id: i64, parent: Option<i64>) -> Task {
        let now = Utc::now();
        Task {
            id,
            project_id: 1,
            parent_task_id: parent,
            title: format!("task {id}"),
            priority: 0,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn ids_and_depths(entries: &[DisplayTask]) -> (Vec<i64>, Vec<usize>) {
        (
            entries.iter().map(|e| e.task.id).collect(),
            entries.iter().map(|e| e.depth).collect(),
        )
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(flatten_tasks(Vec::new()).is_empty());
    }

    #[test]
    fn child_follows_parent_with_incremented_depth() {
        let flat = flatten_tasks(vec![task(1, None), task(2, Some(1)), task(3, None)]);
        let (ids, depths) = ids_and_depths(&flat);
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(depths, vec![0, 1, 0]);
    }

    #[test]
    fn preorder_holds_for_deep_nesting() {
        let flat = flatten_tasks(vec![
            task(5, None),
            task(6, Some(5)),
            task(7, Some(6)),
            task(8, Some(7)),
            task(9, Some(5)),
        ]);
        let (ids, depths) = ids_and_depths(&flat);
        assert_eq!(ids, vec![5, 6, 7, 8, 9]);
        assert_eq!(depths, vec![0, 1, 2, 3, 1]);
    }

    #[test]
    fn every_parent_precedes_its_children() {
        let input = vec![
            task(10, Some(2)),
            task(2, None),
            task(7, Some(2)),
            task(3, Some(10)),
            task(4, None),
            task(5, Some(4)),
        ];
        let flat = flatten_tasks(input);
        let position: HashMap<i64, usize> = flat
            .iter()
            .enumerate()
            .map(|(i, e)| (e.task.id, i))
            .collect();
        for entry in &flat {
            if let Some(parent) = entry.task.parent_task_id {
                assert!(position[&entry.task.id] > position[&parent]);
                assert_eq!(entry.depth, flat[position[&parent]].depth + 1);
            }
        }
    }

    #[test]
    fn sibling_arrival_order_is_preserved() {
        let input = vec![
            task(1, None),
            task(4, Some(1)),
            task(2, Some(1)),
            task(9, Some(1)),
        ];
        let (ids, _) = ids_and_depths(&flatten_tasks(input));
        assert_eq!(ids, vec![1, 4, 2, 9]);
    }

    #[test]
    fn reflattening_is_stable() {
        let input = vec![
            task(3, None),
            task(1, Some(3)),
            task(2, None),
            task(4, Some(2)),
        ];
        let first = ids_and_depths(&flatten_tasks(input.clone()));
        let second = ids_and_depths(&flatten_tasks(input));
        assert_eq!(first, second);
    }

    #[test]
    fn dangling_parent_becomes_root() {
        let flat = flatten_tasks(vec![task(1, Some(99)), task(2, None), task(3, Some(1))]);
        let (ids, depths) = ids_and_depths(&flat);
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(depths, vec![0, 1, 0]);
    }

    #[test]
    fn output_length_always_matches_input_length() {
        let inputs = vec![
            vec![],
            vec![task(1, None)],
            vec![task(1, Some(404)), task(2, Some(405))],
            vec![task(1, None), task(2, Some(1)), task(3, Some(1))],
        ];
        for input in inputs {
            let len = input.len();
            assert_eq!(flatten_tasks(input).len(), len);
        }
    }

    #[test]
    fn parent_cycle_terminates_and_keeps_all_tasks() {
        // Violates the store invariant on purpose: 1 -> 2 -> 1.
        let flat = flatten_tasks(vec![task(1, Some(2)), task(2, Some(1)), task(3, None)]);
        assert_eq!(flat.len(), 3);
        let mut ids: Vec<i64> = flat.iter().map(|e| e.task.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
