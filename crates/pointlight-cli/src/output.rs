//! Frame output as JSON lines or CSV

use std::io::Write;

use serde::Serialize;

use pointlight_core::{Landmark, LANDMARK_COUNT};
use pointlight_motion::{project, Camera, Frame};

use crate::{CliResult, Format};

#[derive(Serialize)]
struct FrameRecord {
    index: u64,
    time: f64,
    phase: f64,
    action: &'static str,
    points: Vec<PointRecord>,
}

#[derive(Serialize)]
struct PointRecord {
    landmark: &'static str,
    x: f64,
    y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    z: Option<f64>,
}

/// Writes frames in one format, projected through `camera` when set
pub struct FrameWriter<W: Write> {
    out: W,
    format: Format,
    camera: Option<Camera>,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W, format: Format, camera: Option<Camera>) -> Self {
        FrameWriter {
            out,
            format,
            camera,
        }
    }

    /// CSV header row (nothing for JSON)
    pub fn begin(&mut self) -> CliResult<()> {
        if self.format == Format::Csv {
            if self.camera.is_some() {
                writeln!(self.out, "frame,time,phase,action,landmark,x,y")?;
            } else {
                writeln!(self.out, "frame,time,phase,action,landmark,x,y,z")?;
            }
        }
        Ok(())
    }

    pub fn write(&mut self, frame: &Frame) -> CliResult<()> {
        let points = self.points(frame);
        match self.format {
            Format::Json => {
                let record = FrameRecord {
                    index: frame.index,
                    time: frame.time,
                    phase: frame.phase,
                    action: frame.action.name(),
                    points,
                };
                serde_json::to_writer(&mut self.out, &record)?;
                writeln!(self.out)?;
            }
            Format::Csv => {
                for point in points {
                    write!(
                        self.out,
                        "{},{},{},{},{},{},{}",
                        frame.index,
                        frame.time,
                        frame.phase,
                        frame.action,
                        point.landmark,
                        point.x,
                        point.y
                    )?;
                    match point.z {
                        Some(z) => writeln!(self.out, ",{}", z)?,
                        None => writeln!(self.out)?,
                    }
                }
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> CliResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn points(&self, frame: &Frame) -> Vec<PointRecord> {
        let mut points = Vec::with_capacity(LANDMARK_COUNT);
        match &self.camera {
            Some(camera) => {
                let screen = project(&frame.pose, camera);
                for landmark in Landmark::ALL {
                    let p = screen[landmark.index()];
                    points.push(PointRecord {
                        landmark: landmark.name(),
                        x: p.x,
                        y: p.y,
                        z: None,
                    });
                }
            }
            None => {
                for (landmark, p) in frame.pose.iter() {
                    points.push(PointRecord {
                        landmark: landmark.name(),
                        x: p.x,
                        y: p.y,
                        z: Some(p.z),
                    });
                }
            }
        }
        points
    }
}
