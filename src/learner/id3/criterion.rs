//! Entropy and information gain over a categorical dataset.
use crate::Dataset;

use std::collections::HashMap;


/// Returns the entropy of a class distribution.
/// `counts[j]` is the number of entries of the `j`'th class
/// and `total` is the number of entries.
/// A class with zero fraction contributes nothing,
/// so a pure distribution has entropy `0`.
/// 
/// With two classes this is
/// `-p₊ log p₊ - p₋ log p₋`.
/// Trees are only defined for two classes;
/// for more classes this returns the plain Shannon sum
/// and the induced tree carries no guarantee.
#[inline]
pub(super) fn entropy(counts: &[usize], total: usize, base: f64) -> f64 {
    if total == 0 { return 0f64; }
    let total = total as f64;

    counts.iter()
        .filter(|&&n| n > 0)
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log(base)
        })
        .sum::<f64>()
}


/// Returns the entropy of the class labels of `data`.
pub(super) fn decision_entropy(data: &Dataset, base: f64) -> f64 {
    let counts = data.present_classes()
        .into_iter()
        .map(|label| data.class_count(label))
        .collect::<Vec<_>>();
    entropy(&counts, data.len(), base)
}


/// Returns the information gain of splitting `data` on `attribute`.
/// The sum runs over the values of `attribute` present in `data`.
/// The size of each partition is read from the cached value counts;
/// the class counts per value are gathered in one pass over `data`.
pub(super) fn information_gain(
    data: &Dataset,
    attribute: &str,
    decision_entropy: f64,
    base: f64,
) -> f64
{
    let classes = data.present_classes();
    let n_class = classes.len();

    let mut counter: HashMap<&str, Vec<usize>> = HashMap::new();
    for entry in data.entries() {
        let Some(value) = entry.value_of(attribute) else { continue; };
        let Some(j) = classes.iter().position(|&c| c == entry.label())
            else { continue; };

        counter.entry(value)
            .or_insert_with(|| vec![0; n_class])[j] += 1;
    }


    let total = data.len() as f64;
    let mut gain = decision_entropy;
    for value in data.distinct_values(attribute) {
        let n_value = data.value_count(attribute, value);
        let Some(counts) = counter.get(value.as_str()) else { continue; };

        let ratio = n_value as f64 / total;
        gain -= ratio * entropy(counts, n_value, base);
    }
    gain
}


/// Returns the attribute of maximal information gain and its gain.
/// Ties go to the attribute that comes first in `attributes`.
/// Returns `None` if `attributes` is empty.
pub(super) fn best_attribute<'a>(
    data: &Dataset,
    attributes: &'a [String],
    base: f64,
) -> Option<(&'a str, f64)>
{
    let h = decision_entropy(data, base);

    let mut best: Option<(&'a str, f64)> = None;
    for attribute in attributes {
        let gain = information_gain(data, attribute, h, base);
        if best.map_or(true, |(_, g)| gain > g) {
            best = Some((attribute.as_str(), gain));
        }
    }
    best
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entry;
    use std::sync::Arc;

    const TOLERANCE: f64 = 1e-9;

    fn dataset(names: &[&str], rows: &[&[&str]]) -> Dataset {
        let names: Arc<[String]> = names.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into();
        rows.iter()
            .filter_map(|row| Entry::from_row(names.clone(), row.iter().copied()))
            .collect()
    }

    #[test]
    fn test_entropy_even_split() {
        assert!((entropy(&[2, 2], 4, 2f64) - 1f64).abs() < TOLERANCE);
        assert!((entropy(&[5, 5], 10, 2f64) - 1f64).abs() < TOLERANCE);
    }

    #[test]
    fn test_entropy_pure() {
        assert_eq!(entropy(&[4, 0], 4, 2f64), 0f64);
        assert_eq!(entropy(&[0, 3], 3, 2f64), 0f64);
        assert_eq!(entropy(&[], 0, 2f64), 0f64);
    }

    #[test]
    fn test_entropy_base() {
        let bits = entropy(&[1, 3], 4, 2f64);
        let nats = entropy(&[1, 3], 4, std::f64::consts::E);
        assert!((bits - 0.811_278_124_459_132_8).abs() < TOLERANCE);
        assert!((nats - bits * 2f64.ln()).abs() < TOLERANCE);
    }

    #[test]
    fn test_gain_of_pure_split() {
        let data = dataset(
            &["weather"],
            &[
                &["sunny", "no"],
                &["sunny", "no"],
                &["rainy", "yes"],
                &["rainy", "yes"],
            ],
        );
        let h = decision_entropy(&data, 2f64);
        assert!((h - 1f64).abs() < TOLERANCE);

        let gain = information_gain(&data, "weather", h, 2f64);
        assert!((gain - h).abs() < TOLERANCE);
    }

    #[test]
    fn test_gain_of_useless_split() {
        let data = dataset(
            &["coin", "weather"],
            &[
                &["heads", "sunny", "no"],
                &["tails", "sunny", "yes"],
                &["heads", "rainy", "yes"],
                &["tails", "rainy", "no"],
            ],
        );
        let h = decision_entropy(&data, 2f64);
        assert!(information_gain(&data, "coin", h, 2f64).abs() < TOLERANCE);
        assert!(information_gain(&data, "weather", h, 2f64).abs() < TOLERANCE);
    }

    #[test]
    fn test_gain_matches_rescan() {
        // Play-tennis excerpt.
        let data = dataset(
            &["outlook", "humidity", "wind"],
            &[
                &["sunny",    "high",   "weak",   "no"],
                &["sunny",    "high",   "strong", "no"],
                &["overcast", "high",   "weak",   "yes"],
                &["rain",     "high",   "weak",   "yes"],
                &["rain",     "normal", "weak",   "yes"],
                &["rain",     "normal", "strong", "no"],
                &["overcast", "normal", "strong", "yes"],
                &["sunny",    "high",   "weak",   "no"],
                &["sunny",    "normal", "weak",   "yes"],
            ],
        );
        let h = decision_entropy(&data, 2f64);

        for attribute in ["outlook", "humidity", "wind"] {
            // Partition the entries from scratch.
            let mut expected = h;
            for value in data.distinct_values(attribute) {
                let sub = data.filter_by(attribute, value);
                let ratio = sub.len() as f64 / data.len() as f64;
                expected -= ratio * decision_entropy(&sub, 2f64);
            }
            let gain = information_gain(&data, attribute, h, 2f64);
            assert!((gain - expected).abs() < TOLERANCE, "{attribute}");
        }
    }

    #[test]
    fn test_best_attribute_tie_keeps_first() {
        let data = dataset(
            &["a", "b"],
            &[
                &["x", "p", "no"],
                &["y", "q", "yes"],
            ],
        );
        let attributes = vec!["a".to_string(), "b".to_string()];
        let (best, _) = best_attribute(&data, &attributes, 2f64).unwrap();
        assert_eq!(best, "a");

        let attributes = vec!["b".to_string(), "a".to_string()];
        let (best, _) = best_attribute(&data, &attributes, 2f64).unwrap();
        assert_eq!(best, "b");

        assert!(best_attribute(&data, &[], 2f64).is_none());
    }
}
