use num::traits::{One, ToPrimitive};

use crate::error::{Error, Result};
use crate::util::{die_map, Count, DieMap, Entry, Face, Ratio};

/// Exact discrete distribution over outcomes of type `K`.
///
/// Each outcome carries an integer count; its probability is
/// `count / denom`. Outcomes are kept sorted and unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die<K>
where
    K: Copy,
{
    outcomes: Vec<(K, Count)>,
    denom: Count,
}

impl<K> Die<K>
where
    K: Copy,
{
    pub fn single(value: K) -> Self {
        Self::new(Count::one(), vec![(value, Count::one())])
    }

    pub fn map<F, U>(self, op: F) -> Die<U>
    where
        F: Fn(K) -> U,
        U: Ord + Copy,
    {
        let mut outcomes = die_map::<U>();
        for (k, c) in self.outcomes {
            match outcomes.entry(op(k)) {
                Entry::Vacant(e) => {
                    e.insert(c);
                }
                Entry::Occupied(mut e) => {
                    *e.get_mut() += c;
                }
            }
        }
        Die::<U>::from_map(self.denom, outcomes)
    }

    pub fn denom(&self) -> Count {
        self.denom
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (K, Count)> + '_ {
        self.outcomes.iter().copied()
    }

    pub fn ratios(&self) -> impl Iterator<Item = (K, Ratio)> + '_ {
        let denom = self.denom;
        self.outcomes
            .iter()
            .map(move |&(k, c)| (k, Ratio::new(c, denom)))
    }

    pub fn probabilities(&self) -> Result<Vec<(K, f64)>> {
        self.ratios()
            .map(|(k, r)| r.to_f64().map(|p| (k, p)).ok_or(Error::Overflow))
            .collect()
    }

    fn from_map(denom: Count, value: DieMap<K>) -> Self
    where
        K: Ord,
    {
        Self::new(denom, value.into_iter().collect())
    }

    fn new(denom: Count, outcomes: Vec<(K, Count)>) -> Self {
        Self { outcomes, denom }
    }
}

impl<K> Die<K>
where
    K: Copy + Ord,
{
    pub fn probability(&self, value: K) -> Ratio {
        self.outcomes
            .binary_search_by(|(k, _)| k.cmp(&value))
            .map(|i| Ratio::new(self.outcomes[i].1, self.denom))
            .unwrap_or_else(|_| Ratio::from_integer(0))
    }
}

impl Die<Face> {
    /// Fair die with faces `1..=size`; empty when `size` is zero.
    pub fn uniform(size: Face) -> Self {
        let c = Count::one();
        Self::new(
            Count::from(size),
            (1..=size).map(|x| (x, c)).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_has_one_count_per_face() {
        let d = Die::uniform(6);
        assert_eq!(d.denom(), 6);
        assert_eq!(d.len(), 6);
        assert!(d.outcomes().all(|(_, c)| c == 1));
        assert_eq!(d.probability(3), Ratio::new(1, 6));
    }

    #[test]
    fn uniform_zero_is_empty() {
        assert!(Die::uniform(0).is_empty());
    }

    #[test]
    fn map_merges_colliding_outcomes() {
        let d = Die::uniform(6).map(|x| x.min(4));
        assert_eq!(d.len(), 4);
        assert_eq!(d.probability(4), Ratio::new(1, 2));
        assert_eq!(d.probability(1), Ratio::new(1, 6));
        assert_eq!(d.probability(9), Ratio::new(0, 1));
    }

    #[test]
    fn ratios_sum_to_one() {
        let d = Die::uniform(7).map(|x| x % 3);
        let total = d.ratios().fold(Ratio::new(0, 1), |acc, (_, r)| acc + r);
        assert_eq!(total, Ratio::new(1, 1));
    }

    #[test]
    fn probabilities_convert_to_f64() {
        let p = Die::single(5usize).probabilities().unwrap();
        assert_eq!(p, vec![(5, 1.0)]);
    }
}
