use crate::{Entry, Predictor, Result};


/// The classifier produced by [`Knn`](super::Knn).
/// Holds the training entries and votes among
/// the `k` entries closest to the query.
#[derive(Debug, Clone)]
pub struct KnnClassifier<'a> {
    entries: &'a [Entry],
    k: usize,
}


impl<'a> KnnClassifier<'a> {
    pub(super) fn new(entries: &'a [Entry], k: usize) -> Self {
        Self { entries, k }
    }


    /// Returns the labels of the `k` nearest entries,
    /// nearest first.
    /// Entries at the same distance keep their training order.
    pub fn nearest(&self, entry: &Entry) -> Vec<&'a str> {
        let mut distances = self.entries.iter()
            .map(|other| (entry.hamming(other), other.label()))
            .collect::<Vec<_>>();

        // Stable, so ties keep the training order.
        distances.sort_by_key(|(d, _)| *d);
        distances.into_iter()
            .take(self.k)
            .map(|(_, label)| label)
            .collect()
    }
}


impl Predictor for KnnClassifier<'_> {
    /// Returns the most frequent label among the nearest entries.
    /// On a tie, the label that occurs first among them wins.
    fn predict(&self, entry: &Entry) -> Result<String> {
        let nearest = self.nearest(entry);

        let mut votes: Vec<(&str, usize)> = Vec::new();
        for label in nearest {
            match votes.iter_mut().find(|(l, _)| *l == label) {
                Some((_, n)) => { *n += 1; },
                None => { votes.push((label, 1)); },
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (label, n) in votes {
            if best.map_or(true, |(_, m)| n > m) {
                best = Some((label, n));
            }
        }

        Ok(best.map(|(label, _)| label.to_string()).unwrap_or_default())
    }
}
