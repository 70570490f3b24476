use crate::sample::Sample;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Samples of one revolution, kept in the order they were received.
///
/// Angles and distances live in two parallel vectors that are only ever
/// pushed to and cleared together, so both always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sweep {
    angles: Vec<i64>,
    distances: Vec<i64>,
}

impl Sweep {
    pub fn new() -> Sweep {
        Sweep::default()
    }

    /// Empties the buffer before a new acquisition run.
    pub fn reset(&mut self) {
        self.angles.clear();
        self.distances.clear();
    }

    pub fn append(&mut self, sample: Sample) {
        self.angles.push(sample.angle);
        self.distances.push(sample.distance);
    }

    /// Read-only view of the parallel angle and distance sequences.
    pub fn snapshot(&self) -> (&[i64], &[i64]) {
        (&self.angles, &self.distances)
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.angles
            .iter()
            .zip(self.distances.iter())
            .map(|(a, d)| Sample::new(*a, *d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_sequences_aligned() {
        let mut sweep = Sweep::new();
        for (a, d) in [(0, 100), (90, 150), (90, 150), (400, -3)] {
            sweep.append(Sample::new(a, d));
            let (angles, distances) = sweep.snapshot();
            assert_eq!(angles.len(), distances.len());
        }
        assert_eq!(sweep.len(), 4);

        let (angles, distances) = sweep.snapshot();
        assert_eq!(angles, &[0, 90, 90, 400]);
        assert_eq!(distances, &[100, 150, 150, -3]);
    }

    #[test]
    fn test_reset() {
        let mut sweep = Sweep::new();
        sweep.append(Sample::new(10, 20));
        sweep.append(Sample::new(20, 30));
        sweep.reset();

        let (angles, distances) = sweep.snapshot();
        assert!(angles.is_empty());
        assert!(distances.is_empty());
        assert!(sweep.is_empty());
        assert_eq!(sweep.samples().count(), 0);
    }

    #[test]
    fn test_samples_in_insertion_order() {
        let mut sweep = Sweep::new();
        sweep.append(Sample::new(180, 120));
        sweep.append(Sample::new(0, 100));
        let samples: Vec<_> = sweep.samples().collect();
        assert_eq!(samples, vec![Sample::new(180, 120), Sample::new(0, 100)]);
    }

    #[test]
    fn test_values_beyond_32_bits() {
        let mut sweep = Sweep::new();
        sweep.append(Sample::new(10, 3_000_000_000));
        assert_eq!(sweep.snapshot().1, &[3_000_000_000]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_sweep() {
        let mut sweep = Sweep::new();
        sweep.append(Sample::new(0, 100));
        let json = serde_json::to_string(&sweep).unwrap();
        assert_eq!(json, r#"{"angles":[0],"distances":[100]}"#);
    }
}
