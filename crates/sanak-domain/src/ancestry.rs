//! Ancestor search and the nearest-common-ancestor coordinate

use crate::graph::KinshipGraph;
use crate::PersonId;
use std::collections::{HashMap, VecDeque};

/// Position of a target relative to a POV through their nearest common ancestor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Generations from the POV up to the ancestor
    pub up: u32,

    /// Generations from the ancestor down to the target
    pub down: u32,

    /// The common ancestor (the person itself when `up == down == 0`)
    pub ancestor: PersonId,
}

impl Coordinate {
    /// Total path length through the ancestor
    pub fn distance(&self) -> u32 {
        self.up + self.down
    }
}

/// All ancestors of a person with their generational distance
///
/// Breadth-first upward walk starting at distance 0 for the person itself.
/// When several paths reach the same ancestor, the first-discovered (and
/// therefore shortest) distance is kept. The distance map doubles as the
/// visited set, so parent cycles terminate.
pub fn ancestors_of(id: &str, graph: &KinshipGraph) -> HashMap<PersonId, u32> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();

    distances.insert(PersonId::new(id), 0);
    queue.push_back((PersonId::new(id), 0));

    while let Some((current, distance)) = queue.pop_front() {
        for parent in graph.parents_of(current.as_str()) {
            if distances.contains_key(parent) {
                continue;
            }
            distances.insert(parent.clone(), distance + 1);
            queue.push_back((parent.clone(), distance + 1));
        }
    }

    distances
}

/// Find the common ancestor closest to both people
///
/// Candidates are ranked by `up + down`; ties go to the smaller `up`, then
/// to the lexicographically smallest ancestor id. Returns `None` when the
/// two ancestor sets are disjoint.
pub fn nearest_common_ancestor(pov: &str, target: &str, graph: &KinshipGraph) -> Option<Coordinate> {
    if pov == target {
        return Some(Coordinate {
            up: 0,
            down: 0,
            ancestor: PersonId::new(pov),
        });
    }

    let from_pov = ancestors_of(pov, graph);
    let from_target = ancestors_of(target, graph);

    from_pov
        .iter()
        .filter_map(|(ancestor, &up)| {
            from_target.get(ancestor).map(|&down| Coordinate {
                up,
                down,
                ancestor: ancestor.clone(),
            })
        })
        .min_by(|a, b| {
            a.distance()
                .cmp(&b.distance())
                .then(a.up.cmp(&b.up))
                .then_with(|| a.ancestor.cmp(&b.ancestor))
        })
}
