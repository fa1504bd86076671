use serde::Serialize;

/// One recorded row of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub t: f64,
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
}

/// Time series produced by a run, kept as four equal-length columns so a
/// renderer can slice them directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    time: Vec<f64>,
    x1: Vec<f64>,
    x2: Vec<f64>,
    x3: Vec<f64>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            time: Vec::with_capacity(capacity),
            x1: Vec::with_capacity(capacity),
            x2: Vec::with_capacity(capacity),
            x3: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        debug_assert!(
            self.time.last().map_or(true, |&last| sample.t > last),
            "trajectory time must increase"
        );
        self.time.push(sample.t);
        self.x1.push(sample.x1);
        self.x2.push(sample.x2);
        self.x3.push(sample.x3);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn x1(&self) -> &[f64] {
        &self.x1
    }

    pub fn x2(&self) -> &[f64] {
        &self.x2
    }

    pub fn x3(&self) -> &[f64] {
        &self.x3
    }

    pub fn sample(&self, i: usize) -> Option<Sample> {
        Some(Sample {
            t: *self.time.get(i)?,
            x1: self.x1[i],
            x2: self.x2[i],
            x3: self.x3[i],
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).map(move |i| Sample {
            t: self.time[i],
            x1: self.x1[i],
            x2: self.x2[i],
            x3: self.x3[i],
        })
    }

    /// Smallest and largest displacement over all three masses.
    pub fn displacement_bounds(&self) -> Option<(f64, f64)> {
        self.x1
            .iter()
            .chain(self.x2.iter())
            .chain(self.x3.iter())
            .fold(None, |bounds, &x| match bounds {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(t: f64, x1: f64, x2: f64, x3: f64) -> Sample {
        Sample { t, x1, x2, x3 }
    }

    #[test]
    fn columns_stay_aligned() {
        let mut trajectory = Trajectory::new();
        trajectory.push(sample(0.0, 1.0, 2.0, 3.0));
        trajectory.push(sample(0.1, 4.0, 5.0, 6.0));

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.time(), &[0.0, 0.1]);
        assert_eq!(trajectory.x2(), &[2.0, 5.0]);
        assert_eq!(trajectory.x3(), &[3.0, 6.0]);
        assert_eq!(trajectory.sample(1), Some(sample(0.1, 4.0, 5.0, 6.0)));
        assert_eq!(trajectory.sample(2), None);
        assert_eq!(trajectory.samples().count(), 2);
    }

    #[test]
    fn displacement_bounds_span_all_masses() {
        let mut trajectory = Trajectory::new();
        assert_eq!(trajectory.displacement_bounds(), None);

        trajectory.push(sample(0.0, 0.03, -0.01, 0.0));
        trajectory.push(sample(0.1, -0.02, 0.01, 0.04));
        assert_eq!(trajectory.displacement_bounds(), Some((-0.02, 0.04)));
    }
}
