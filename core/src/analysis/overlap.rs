//! Board-level overlap statistics: which cells carry how many of the
//! traceable word routes.

use std::collections::BTreeMap;

use hashbrown::HashMap;

use crate::*;

/// How many routes visit each cell. Cells on no route are absent.
pub fn cell_usage(routes: &[(String, Path)]) -> HashMap<Coord2, u32> {
    let mut usage = HashMap::new();
    for (_, path) in routes {
        for &coords in path {
            *usage.entry(coords).or_insert(0) += 1;
        }
    }
    usage
}

/// Buckets the usage counts: visit count -> how many cells have it.
pub fn usage_distribution(usage: &HashMap<Coord2, u32>) -> BTreeMap<u32, u32> {
    let mut distribution = BTreeMap::new();
    for &count in usage.values() {
        *distribution.entry(count).or_insert(0) += 1;
    }
    distribution
}
