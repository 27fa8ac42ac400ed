use crate::math::geometry::distance_matrix;
use crate::model::Hotspot;
use std::collections::BTreeSet;

/// Interference graph for one placement snapshot.
///
/// `pairs` holds index pairs `(i, j)` with `i < j` in lexicographic order;
/// `involved` is every index that appears in at least one pair. Indices
/// point into the placement the report was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterferenceReport {
    pub pairs: Vec<(usize, usize)>,
    pub involved: BTreeSet<usize>,
}

impl InterferenceReport {
    /// Number of hotspots involved in at least one interfering pair.
    pub fn node_count(&self) -> usize {
        self.involved.len()
    }

    pub fn is_clear(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Seam between the optimizer and the graph construction, so an
/// incremental builder can replace the full pairwise scan without
/// touching the optimization loop.
pub trait InterferenceModel {
    fn find_interference(&self, hotspots: &[Hotspot]) -> InterferenceReport;
}

/// Default graph builder: full O(n^2) distance matrix, then one pass over
/// all `i < j` pairs. Pure and deterministic for a given placement.
pub struct PairwiseInterference {
    interference_distance: f64,
}

impl PairwiseInterference {
    pub fn new(interference_distance: f64) -> Self {
        Self {
            interference_distance,
        }
    }
}

impl InterferenceModel for PairwiseInterference {
    fn find_interference(&self, hotspots: &[Hotspot]) -> InterferenceReport {
        let coords: Vec<(f64, f64)> = hotspots.iter().map(|h| (h.x, h.y)).collect();
        let distances = distance_matrix(&coords);

        let mut report = InterferenceReport::default();
        for i in 0..hotspots.len() {
            for j in (i + 1)..hotspots.len() {
                // Strictly inside the radius; the boundary does not count.
                if distances[[i, j]] < self.interference_distance
                    && hotspots[i].channel == hotspots[j].channel
                {
                    report.pairs.push((i, j));
                    report.involved.insert(i);
                    report.involved.insert(j);
                }
            }
        }
        report
    }
}
