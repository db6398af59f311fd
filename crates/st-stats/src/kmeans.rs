//! K-means clustering.

use st_core::errors::{Error, Result};
use st_core::Real;
use st_distributions::UniformSource;

/// Iteration cap for the assign/update loop.
const MAX_SWEEPS: usize = 1_000;

/// Result of a k-means run: `k` centroids and one label per
/// observation.
#[derive(Debug, Clone)]
pub struct KMeans {
    centroids: Vec<Vec<Real>>,
    labels: Vec<usize>,
}

impl KMeans {
    /// Cluster `observations` (rows of equal dimension) into `k`
    /// groups.
    ///
    /// Uses the random-partition method: observations start in random
    /// clusters drawn from `src`, then assignment and centroid-update
    /// sweeps alternate until no assignment changes (or the sweep cap
    /// is reached).
    pub fn fit(
        observations: &[Vec<Real>],
        k: usize,
        src: &mut dyn UniformSource,
    ) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidParameter("k must be positive".into()));
        }
        if observations.len() < k {
            return Err(Error::Precondition(format!(
                "need at least {k} observations, got {}",
                observations.len()
            )));
        }
        let dim = observations[0].len();
        if observations.iter().any(|o| o.len() != dim) {
            return Err(Error::Precondition(
                "all observations must have the same dimension".into(),
            ));
        }

        // Random-partition initialization
        let mut labels: Vec<usize> = observations
            .iter()
            .map(|_| (src.next_uniform() * k as Real) as usize % k)
            .collect();
        let mut centroids = vec![vec![0.0; dim]; k];

        for _ in 0..MAX_SWEEPS {
            update_centroids(observations, &labels, &mut centroids);
            if !reassign(observations, &centroids, &mut labels) {
                break;
            }
        }

        Ok(Self { centroids, labels })
    }

    /// The cluster centroids.
    pub fn centroids(&self) -> &[Vec<Real>] {
        &self.centroids
    }

    /// The cluster label of each observation, in input order.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
}

/// Center each centroid on the mean of its current members.  Empty
/// clusters keep their previous position.
fn update_centroids(observations: &[Vec<Real>], labels: &[usize], centroids: &mut [Vec<Real>]) {
    let dim = centroids[0].len();
    for (index, centroid) in centroids.iter_mut().enumerate() {
        let mut sums = vec![0.0; dim];
        let mut members = 0usize;
        for (obs, &label) in observations.iter().zip(labels) {
            if label == index {
                for (s, x) in sums.iter_mut().zip(obs) {
                    *s += x;
                }
                members += 1;
            }
        }
        if members > 0 {
            for (c, s) in centroid.iter_mut().zip(&sums) {
                *c = s / members as Real;
            }
        }
    }
}

/// Assign each observation to its nearest centroid; `true` if anything
/// moved.
fn reassign(observations: &[Vec<Real>], centroids: &[Vec<Real>], labels: &mut [usize]) -> bool {
    let mut changed = false;
    for (obs, label) in observations.iter().zip(labels.iter_mut()) {
        let nearest = centroids
            .iter()
            .enumerate()
            .map(|(i, c)| (i, squared_distance(obs, c)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);
        if nearest != *label {
            *label = nearest;
            changed = true;
        }
    }
    changed
}

fn squared_distance(a: &[Real], b: &[Real]) -> Real {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
