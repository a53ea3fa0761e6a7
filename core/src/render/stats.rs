//! Rendering statistics.

use std::fmt::{self, Display, Formatter};
use std::ops::AddAssign;
use std::time::{Duration, Instant};

/// Accumulated rendering work counts and timing.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Time spent rendering.
    pub time: Duration,
    /// Number of render calls issued.
    pub calls: u32,
    /// Triangles submitted, and triangles that survived clipping and
    /// culling into rasterization.
    pub tris: Throughput,
    /// Pixel writes attempted, and writes that passed the depth test.
    pub pixels: Throughput,

    start: Option<Instant>,
}

/// Items submitted (`i`) and items output (`o`).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    pub i: usize,
    pub o: usize,
}

impl Stats {
    /// Returns a new zeroed `Stats` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a `Stats` instance that records the time of its
    /// creation. Call [`finish`][Self::finish] to store the elapsed
    /// time into `self.time`.
    pub fn start() -> Self {
        Self { start: Some(Instant::now()), ..Self::default() }
    }

    /// Stops the timer and records the elapsed time. No-op if the
    /// timer was not running.
    pub fn finish(self) -> Self {
        Self {
            time: self.start.map_or(self.time, |st| st.elapsed()),
            start: None,
            ..self
        }
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.time += other.time;
        self.calls += other.calls;
        self.tris += other.tris;
        self.pixels += other.pixels;
    }
}

impl AddAssign for Throughput {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.o += rhs.o;
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calls {} | tris {} | pixels {} | {}",
            self.calls,
            self.tris,
            self.pixels,
            human_time(self.time),
        )
    }
}

impl Display for Throughput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", human_num(self.i), human_num(self.o))
    }
}

fn human_num(n: usize) -> String {
    if n < 10_000 {
        format!("{n}")
    } else if n < 1_000_000 {
        format!("{:.1}k", n as f32 / 1_000.0)
    } else {
        format!("{:.1}M", n as f32 / 1_000_000.0)
    }
}

fn human_time(d: Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1e-3 {
        format!("{:.1}us", secs * 1e6)
    } else if secs < 1.0 {
        format!("{:.1}ms", secs * 1e3)
    } else {
        format!("{secs:.2}s")
    }
}
