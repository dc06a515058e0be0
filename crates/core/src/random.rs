/// Source of uniform values in `[0, 1)` for the decorative jitter (typing
/// speed, loading particles). The browser host wraps `Math.random`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Replays a fixed list of values, cycling when exhausted. An empty list
/// always yields `0.5`.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_values() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(SequenceRandom::default().next_unit(), 0.5);
    }
}
