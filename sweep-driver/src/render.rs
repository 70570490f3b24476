use crate::error::SweepError;
use crate::numeric::{degree_to_radian, to_cartesian};

/// A sweep ready for plotting, in both polar and Cartesian form.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub angles_radian: Vec<f64>,
    pub distances: Vec<f64>,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// `(angle in radian, distance)` pairs in sequence order.
    pub fn polar_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.angles_radian
            .iter()
            .copied()
            .zip(self.distances.iter().copied())
    }

    pub fn cartesian_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Largest absolute distance, the radius both charts must cover.
    pub fn extent(&self) -> f64 {
        self.distances.iter().fold(0., |acc: f64, d| acc.max(d.abs()))
    }
}

/// Shows a projected sweep to the user.
pub trait DisplaySurface {
    fn present(&mut self, projection: &Projection) -> Result<(), SweepError>;
}

/// Converts degrees to radian and projects every sample onto the plane.
/// Returns `None` when there is nothing to project.
pub fn project(angles: &[i64], distances: &[i64]) -> Option<Projection> {
    if angles.is_empty() || distances.is_empty() {
        return None;
    }

    let angles_radian: Vec<f64> = angles.iter().map(|a| degree_to_radian(*a as f64)).collect();
    let distances: Vec<f64> = distances.iter().map(|d| *d as f64).collect();
    let (xs, ys): (Vec<f64>, Vec<f64>) = angles_radian
        .iter()
        .zip(distances.iter())
        .map(|(w, d)| to_cartesian(*w, *d))
        .unzip();

    Some(Projection {
        angles_radian,
        distances,
        xs,
        ys,
    })
}

/// Projects the sweep and hands it to `surface`. Empty input is logged and
/// leaves the surface untouched.
pub fn render<D: DisplaySurface>(
    angles: &[i64],
    distances: &[i64],
    surface: &mut D,
) -> Result<(), SweepError> {
    match project(angles, distances) {
        Some(projection) => {
            log::info!("Plotting {} points.", projection.len());
            surface.present(&projection)
        }
        None => {
            log::info!("No data to plot.");
            Ok(())
        }
    }
}
