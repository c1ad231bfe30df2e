#[cfg(test)]
#[path = "../../tests/unit/instance/distances_test.rs"]
mod distances_test;

use super::Location;
use crate::utils::{GenericError, GenericResult};
use std::fmt;

/// A square matrix of integer distances between locations, stored row by row.
/// Rows and columns are 0-based location indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<i64>,
}

impl DistanceMatrix {
    /// Creates a matrix from flatten values.
    pub fn new(values: Vec<i64>) -> GenericResult<Self> {
        let size = (values.len() as f64).sqrt().round() as usize;

        if size * size != values.len() {
            return Err(GenericError::from(format!("non-square flatten matrix: {} items", values.len())));
        }

        Ok(Self { size, values })
    }

    /// Creates a matrix of rounded up euclidean distances between given locations.
    pub fn from_locations(locations: &[Location]) -> Self {
        let size = locations.len();
        let mut values = vec![0; size * size];

        for (from_idx, from) in locations.iter().enumerate() {
            for (to_idx, to) in locations.iter().enumerate().skip(from_idx + 1) {
                let distance = euclidean_ceil(from, to);
                values[from_idx * size + to_idx] = distance;
                values[to_idx * size + from_idx] = distance;
            }
        }

        Self { size, values }
    }

    /// Returns distance between two locations.
    pub fn get(&self, from: usize, to: usize) -> Option<i64> {
        if from < self.size && to < self.size { self.values.get(from * self.size + to).copied() } else { None }
    }

    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns matrix rows.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        self.values.chunks(self.size.max(1))
    }

    /// Compares this matrix (given) with the expected one and reports the first difference.
    pub fn compare(&self, expected: &DistanceMatrix) -> DistanceCheck {
        if self.size != expected.size {
            return DistanceCheck::SizeMismatch { given: self.size, expected: expected.size };
        }

        self.values
            .iter()
            .zip(expected.values.iter())
            .position(|(given, expected)| given != expected)
            .map_or(DistanceCheck::Valid, |idx| DistanceCheck::Mismatch {
                from: (idx / self.size) as i64 + 1,
                to: (idx % self.size) as i64 + 1,
                given: self.values[idx],
                expected: expected.values[idx],
            })
    }
}

/// A result of comparing given distances with calculated ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DistanceCheck {
    /// No distances in the instance.
    NotGiven,
    /// Given distances are equal to calculated.
    Valid,
    /// Given matrix has a different amount of locations.
    SizeMismatch {
        /// Size of given matrix.
        given: usize,
        /// Amount of locations.
        expected: usize,
    },
    /// The first different cell, locations are specified by their ids.
    Mismatch {
        /// From location id.
        from: i64,
        /// To location id.
        to: i64,
        /// Given distance.
        given: i64,
        /// Calculated distance.
        expected: i64,
    },
}

impl DistanceCheck {
    /// Returns true if there is nothing wrong with given distances.
    pub fn is_valid(&self) -> bool {
        matches!(self, DistanceCheck::NotGiven | DistanceCheck::Valid)
    }
}

impl fmt::Display for DistanceCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceCheck::NotGiven => write!(f, "Distances are not given."),
            DistanceCheck::Valid => write!(f, "The given distances are correct"),
            DistanceCheck::SizeMismatch { given, expected } => {
                write!(f, "Incorrect Distances. Matrix has size {given} while there are {expected} locations")
            }
            DistanceCheck::Mismatch { from, to, given, expected } => write!(
                f,
                "Incorrect Distances. First difference is at location {from},{to}: {given} should be {expected}"
            ),
        }
    }
}

fn euclidean_ceil(from: &Location, to: &Location) -> i64 {
    let x = from.x as f64 - to.x as f64;
    let y = from.y as f64 - to.y as f64;

    (x * x + y * y).sqrt().ceil() as i64
}
