//! Tabular view of a trajectory
//!
//! One row per kept timestep: the time, then X/Y/Z position for every body.

use std::io::{self, Write};

use crate::simulation::trajectory::{Quantity, Trajectory};

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl TrajectoryTable {
    /// Build the table from `traj`, keeping every `stride`-th timestep.
    /// Columns are named after `labels`; bodies without a label fall back to
    /// `body-<index>`.
    pub fn from_trajectory(traj: &Trajectory, labels: &[String], stride: usize) -> Self {
        let n = traj.num_bodies();
        let stride = stride.max(1);

        let mut header = Vec::with_capacity(1 + 3 * n);
        header.push(String::from("time"));
        for b in 0..n {
            let name = labels.get(b).cloned().unwrap_or_else(|| format!("body-{b}"));
            for axis in ["X", "Y", "Z"] {
                header.push(format!("{name} {axis} position"));
            }
        }

        let columns: Vec<&[f64]> = (0..n)
            .flat_map(|b| (0..3).map(move |axis| (b, axis)))
            .map(|(b, axis)| traj.coordinate(Quantity::Position, b, axis))
            .collect();

        let rows = traj
            .time()
            .iter()
            .enumerate()
            .step_by(stride)
            .map(|(step, t)| {
                let mut row = Vec::with_capacity(header.len());
                row.push(*t);
                row.extend(columns.iter().map(|c| c[step]));
                row
            })
            .collect();

        Self { header, rows }
    }

    /// Write header and rows as comma-separated text
    pub fn write_csv<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "{}", self.header.join(","))?;
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(w, "{}", line.join(","))?;
        }
        w.flush()
    }
}
