//! Correlation between daily activities.
//!
//! # What This Component Does
//!
//! Retains a bounded rolling history of eight-variable activity samples
//! (the raw numeric inputs, smoking as a 0/1 indicator, and the resulting
//! total carbon) and computes the pairwise Pearson correlation matrix over
//! that history, as a host would feed to a heatmap.
//!
//! # Degenerate histories
//!
//! Correlation from a single observation is inherently undefined: every
//! variable has zero variance, so the whole matrix is NaN. The same applies
//! per variable whenever one of a pair is constant across the history. This
//! is a documented limitation, not an error; the entries stay NaN and the
//! host decides how to render them. Accumulating more samples via
//! [`SampleHistory::push`] is what makes the matrix meaningful.

use footprint_core::{ActivityInputs, FloatValue, Footprint};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of variables in a sample.
pub const SAMPLE_WIDTH: usize = 8;

/// Variable labels, in sample column order.
pub const ACTIVITY_VARIABLES: [&str; SAMPLE_WIDTH] = [
    "Electricity",
    "Distance",
    "Water",
    "Waste",
    "Meat",
    "Plastic",
    "Smoking",
    "Total Carbon",
];

/// One observation of the eight correlated variables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivitySample {
    pub electricity_kwh: FloatValue,
    pub distance_km: FloatValue,
    pub water_liters: FloatValue,
    pub waste_kg: FloatValue,
    pub meat_meals: FloatValue,
    pub plastic_items: FloatValue,
    /// 1.0 for a smoker, 0.0 otherwise
    pub smoking: FloatValue,
    pub total_carbon: FloatValue,
}

impl ActivitySample {
    /// Build a sample from the inputs that produced a footprint.
    pub fn from_observation(inputs: &ActivityInputs, footprint: &Footprint) -> Self {
        Self {
            electricity_kwh: inputs.electricity_kwh,
            distance_km: inputs.distance_km,
            water_liters: inputs.water_liters,
            waste_kg: inputs.waste_kg,
            meat_meals: inputs.meat_meals as FloatValue,
            plastic_items: inputs.plastic_items as FloatValue,
            smoking: inputs.smoking_indicator(),
            total_carbon: footprint.total_carbon,
        }
    }

    /// The sample as a row, in [`ACTIVITY_VARIABLES`] column order.
    pub fn to_row(&self) -> [FloatValue; SAMPLE_WIDTH] {
        [
            self.electricity_kwh,
            self.distance_km,
            self.water_liters,
            self.waste_kg,
            self.meat_meals,
            self.plastic_items,
            self.smoking,
            self.total_carbon,
        ]
    }
}

/// Bounded rolling buffer of activity samples across invocations.
///
/// Pushing beyond capacity evicts the oldest sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleHistory {
    capacity: usize,
    samples: VecDeque<ActivitySample>,
}

impl SampleHistory {
    /// An empty history retaining at most `capacity` samples.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "History capacity must be at least 1");
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Record one sample, evicting the oldest if the buffer is full.
    pub fn push(&mut self, sample: ActivitySample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
            log::debug!("Sample history full, evicted oldest of {}", self.capacity);
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivitySample> {
        self.samples.iter()
    }

    /// Pairwise Pearson correlation over the retained samples.
    ///
    /// Returns an 8×8 symmetric matrix in [`ACTIVITY_VARIABLES`] order.
    /// Entries involving a zero-variance variable are NaN, which includes
    /// the entire matrix for histories of fewer than two samples (see the
    /// module docs on degenerate histories).
    pub fn correlation_matrix(&self) -> Array2<FloatValue> {
        let n = self.samples.len();
        let mut matrix = Array2::from_elem((SAMPLE_WIDTH, SAMPLE_WIDTH), FloatValue::NAN);

        if n < 2 {
            return matrix;
        }

        let rows: Vec<[FloatValue; SAMPLE_WIDTH]> =
            self.samples.iter().map(|s| s.to_row()).collect();

        let mut means = [0.0; SAMPLE_WIDTH];
        for row in &rows {
            for (mean, value) in means.iter_mut().zip(row) {
                *mean += *value;
            }
        }
        for mean in &mut means {
            *mean /= n as FloatValue;
        }

        for i in 0..SAMPLE_WIDTH {
            for j in i..SAMPLE_WIDTH {
                let mut cov = 0.0;
                let mut var_i = 0.0;
                let mut var_j = 0.0;
                for row in &rows {
                    let di = row[i] - means[i];
                    let dj = row[j] - means[j];
                    cov += di * dj;
                    var_i += di * di;
                    var_j += dj * dj;
                }

                // Zero variance leaves the coefficient undefined
                let r = if var_i > 0.0 && var_j > 0.0 {
                    if i == j {
                        1.0
                    } else {
                        cov / (var_i * var_j).sqrt()
                    }
                } else {
                    FloatValue::NAN
                };
                matrix[[i, j]] = r;
                matrix[[j, i]] = r;
            }
        }

        matrix
    }
}
