//! Aggregation for the altitude histogram and the LEO share statistic.

use super::model::{DebrisClass, DebrisDataset};

/// Histogram domain in km.
pub const BIN_LO_KM: f64 = 200.0;
pub const BIN_HI_KM: f64 = 40_000.0;
/// Number of bin edges (one more than the number of bars).
pub const BIN_EDGES: usize = 60;
/// Altitudes below this count toward the LEO share.
pub const LEO_CEILING_KM: f64 = 2000.0;

/// `n` logarithmically spaced edges from `lo` to `hi`, both inclusive.
pub fn log_bin_edges(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2 && lo > 0.0 && hi > lo);
    let log_lo = lo.log10();
    let step = (hi.log10() - log_lo) / (n - 1) as f64;
    (0..n)
        .map(|i| 10f64.powf(log_lo + i as f64 * step))
        .collect()
}

/// Locate the bin holding `value`: bins are half-open `[e_i, e_i+1)` with
/// the last bin closed on the right.  Values outside the edge range are
/// not binned at all.
fn bin_index(edges: &[f64], value: f64) -> Option<usize> {
    if edges.len() < 2 {
        return None;
    }
    let (&lo, &hi) = (edges.first()?, edges.last()?);
    if !(lo..=hi).contains(&value) {
        return None;
    }
    if value == hi {
        return Some(edges.len() - 2);
    }
    Some(edges.partition_point(|&e| e <= value) - 1)
}

// ---------------------------------------------------------------------------
// AltitudeHistogram – stacked per-class counts over shared log bins
// ---------------------------------------------------------------------------

/// Per-class bar heights over shared logarithmic bins.
#[derive(Debug, Clone)]
pub struct AltitudeHistogram {
    /// Ascending bin edges; every `counts` row has `edges.len() - 1` entries.
    pub edges: Vec<f64>,
    /// One row per class, in stacking order.
    pub counts: Vec<(DebrisClass, Vec<u32>)>,
}

impl AltitudeHistogram {
    /// Count the dataset into the standard 200–40000 km log bins, one row
    /// per class in the fixed stacking order.
    pub fn from_dataset(dataset: &DebrisDataset) -> Self {
        let edges = log_bin_edges(BIN_LO_KM, BIN_HI_KM, BIN_EDGES);
        let counts = DebrisClass::STACKING_ORDER
            .iter()
            .map(|&class| {
                let mut bins = vec![0u32; edges.len() - 1];
                for obj in dataset.objects.iter().filter(|o| o.class == class) {
                    if let Some(i) = bin_index(&edges, obj.altitude_km) {
                        bins[i] += 1;
                    }
                }
                (class, bins)
            })
            .collect();
        AltitudeHistogram { edges, counts }
    }

    /// Height of the tallest stacked column.
    pub fn max_stacked(&self) -> u32 {
        (0..self.edges.len().saturating_sub(1))
            .map(|i| self.counts.iter().map(|(_, bins)| bins[i]).sum())
            .max()
            .unwrap_or(0)
    }
}

/// Share of the dataset below the LEO ceiling, in percent.
pub fn leo_share(dataset: &DebrisDataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }
    let below = dataset
        .objects
        .iter()
        .filter(|o| o.altitude_km < LEO_CEILING_KM)
        .count();
    below as f64 / dataset.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DebrisObject;

    fn dataset_of(objects: &[(f64, DebrisClass)]) -> DebrisDataset {
        DebrisDataset {
            objects: objects
                .iter()
                .map(|&(altitude_km, class)| DebrisObject { altitude_km, class })
                .collect(),
        }
    }

    #[test]
    fn edges_are_log_spaced() {
        let edges = log_bin_edges(BIN_LO_KM, BIN_HI_KM, BIN_EDGES);
        assert_eq!(edges.len(), 60);
        assert!((edges[0] - 200.0).abs() < 1e-9);
        assert!((edges[59] - 40_000.0).abs() < 1e-6);

        // strictly increasing with a constant ratio between neighbours
        let ratio = edges[1] / edges[0];
        for pair in edges.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] / pair[0] - ratio).abs() < 1e-9);
        }
    }

    #[test]
    fn bin_membership_is_half_open() {
        let edges = vec![1.0, 10.0, 100.0, 1000.0];
        assert_eq!(bin_index(&edges, 1.0), Some(0));
        assert_eq!(bin_index(&edges, 9.999), Some(0));
        assert_eq!(bin_index(&edges, 10.0), Some(1));
        // the last bin is closed on the right
        assert_eq!(bin_index(&edges, 1000.0), Some(2));
        assert_eq!(bin_index(&edges, 0.5), None);
        assert_eq!(bin_index(&edges, 1000.1), None);
    }

    #[test]
    fn bin_counts_sum_to_dataset_size() {
        let dataset = dataset_of(&[
            (400.0, DebrisClass::Spacecraft),
            (418.0, DebrisClass::Spacecraft),
            (629.0, DebrisClass::FragmentationDebris),
            (850.0, DebrisClass::RocketBodies),
            (20_200.0, DebrisClass::Spacecraft),
            (35_786.0, DebrisClass::MissionDebris),
        ]);

        let histogram = AltitudeHistogram::from_dataset(&dataset);
        let total: u32 = histogram
            .counts
            .iter()
            .map(|(_, bins)| bins.iter().sum::<u32>())
            .sum();
        assert_eq!(total as usize, dataset.len());
    }

    #[test]
    fn altitudes_outside_the_bin_range_are_not_counted() {
        // 100 km passes the validity filter but sits below the first edge
        let dataset = dataset_of(&[
            (100.0, DebrisClass::Spacecraft),
            (45_000.0, DebrisClass::Spacecraft),
            (400.0, DebrisClass::Spacecraft),
        ]);

        let histogram = AltitudeHistogram::from_dataset(&dataset);
        let total: u32 = histogram
            .counts
            .iter()
            .map(|(_, bins)| bins.iter().sum::<u32>())
            .sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn stacked_maximum_spans_all_classes() {
        // three classes landing in the same bin stack to 3
        let dataset = dataset_of(&[
            (400.0, DebrisClass::Spacecraft),
            (400.5, DebrisClass::RocketBodies),
            (401.0, DebrisClass::FragmentationDebris),
            (5000.0, DebrisClass::Spacecraft),
        ]);

        let histogram = AltitudeHistogram::from_dataset(&dataset);
        assert_eq!(histogram.max_stacked(), 3);
    }

    #[test]
    fn histogram_rows_follow_stacking_order() {
        let histogram = AltitudeHistogram::from_dataset(&DebrisDataset::default());
        let order: Vec<DebrisClass> = histogram.counts.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, DebrisClass::STACKING_ORDER);
    }

    #[test]
    fn leo_share_to_one_decimal() {
        let dataset = dataset_of(&[
            (400.0, DebrisClass::Spacecraft),
            (1999.9, DebrisClass::FragmentationDebris),
            (2000.0, DebrisClass::RocketBodies),
            (36_000.0, DebrisClass::MissionDebris),
        ]);
        // exactly 2000 km is not LEO
        assert_eq!(leo_share(&dataset), 50.0);
        assert_eq!(format!("{:.1}", leo_share(&dataset)), "50.0");
    }

    #[test]
    fn leo_share_of_empty_dataset_is_zero() {
        assert_eq!(leo_share(&DebrisDataset::default()), 0.0);
    }
}
