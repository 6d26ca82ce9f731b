//! Proximity clustering of GPS coordinates.
//!
//! Clustering is single-link and order-dependent: each point joins the first
//! cluster holding ANY member within the threshold on both axes, otherwise it
//! starts a new cluster. A chain of close pairs can therefore grow a cluster
//! wider than the threshold. Distances are per-axis absolute differences in
//! degrees, not geodesic.

use super::types::{Coordinates, PhotoMetadata};

/// Per-axis clustering threshold in decimal degrees (~11 km at the equator),
/// sized to group photos by city.
pub const CLUSTER_THRESHOLD_DEGREES: f64 = 0.1;

/// Both axis deltas are strictly below `threshold`.
pub fn is_nearby(a: Coordinates, b: Coordinates, threshold: f64) -> bool {
    (a.lat - b.lat).abs() < threshold && (a.long - b.long).abs() < threshold
}

/// Group points into clusters with a single left fold over the input.
pub fn cluster_coordinates<I>(points: I, threshold: f64) -> Vec<Vec<Coordinates>>
where
    I: IntoIterator<Item = Coordinates>,
{
    points
        .into_iter()
        .fold(Vec::new(), |mut clusters: Vec<Vec<Coordinates>>, point| {
            let matching = clusters.iter().position(|cluster| {
                cluster
                    .iter()
                    .any(|member| is_nearby(*member, point, threshold))
            });
            match matching {
                Some(index) => clusters[index].push(point),
                None => clusters.push(vec![point]),
            }
            clusters
        })
}

/// The cluster with the most members; the earliest one wins a tie.
pub fn largest_cluster(clusters: &[Vec<Coordinates>]) -> Option<&[Coordinates]> {
    clusters
        .iter()
        .fold(None, |largest: Option<&Vec<Coordinates>>, cluster| match largest {
            Some(current) if cluster.len() <= current.len() => Some(current),
            _ => Some(cluster),
        })
        .map(Vec::as_slice)
}

/// Unweighted arithmetic mean of the points, `None` for an empty slice.
pub fn center(points: &[Coordinates]) -> Option<Coordinates> {
    if points.is_empty() {
        return None;
    }
    let (lat, long) = points
        .iter()
        .fold((0.0, 0.0), |(lat, long), p| (lat + p.lat, long + p.long));
    let n = points.len() as f64;
    Some(Coordinates::new(lat / n, long / n))
}

/// Centre of the largest proximity cluster, or `None` when no item carries
/// coordinates.
pub fn largest_cluster_center(metadatas: &[PhotoMetadata]) -> Option<Coordinates> {
    let clusters = cluster_coordinates(
        metadatas.iter().filter_map(|m| m.coordinates),
        CLUSTER_THRESHOLD_DEGREES,
    );
    tracing::debug!(clusters = clusters.len(), "clustered coordinates");
    largest_cluster(&clusters).and_then(center)
}
