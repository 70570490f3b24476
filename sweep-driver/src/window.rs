use crate::chart::{draw_cartesian, draw_polar};
use crate::error::SweepError;
use crate::render::{DisplaySurface, Projection};
use piston_window::{EventLoop, PistonWindow, WindowSettings};
use plotters::drawing::IntoDrawingArea;
use plotters::prelude::WHITE;
use plotters_piston::{draw_piston_window, PistonBackend};

const FPS: u64 = 30;

/// Interactive window showing the polar and Cartesian plots side by side.
/// `present` blocks until the window is closed.
pub struct PistonDisplay {
    pub title: String,
    pub size: [u32; 2],
}

impl Default for PistonDisplay {
    fn default() -> Self {
        PistonDisplay {
            title: "2D Lidar Plot".to_string(),
            size: [1600, 800],
        }
    }
}

impl DisplaySurface for PistonDisplay {
    fn present(&mut self, projection: &Projection) -> Result<(), SweepError> {
        let mut window: PistonWindow = WindowSettings::new(self.title.as_str(), self.size)
            .build()
            .map_err(|e| SweepError::DisplayError(e.to_string()))?;
        window.set_max_fps(FPS);

        let draw = |b: PistonBackend| {
            let root = b.into_drawing_area();
            root.fill(&WHITE)?;
            let panels = root.split_evenly((1, 2));
            draw_polar(&panels[0], projection)?;
            draw_cartesian(&panels[1], projection)?;
            Ok(())
        };

        while draw_piston_window(&mut window, draw).is_some() {}
        Ok(())
    }
}
