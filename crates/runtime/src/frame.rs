use foundation::time::Time;

/// Deterministic frame metadata.
///
/// One `Frame` per rendered display frame. The delta time is fixed rather
/// than measured so a session can be recorded and replayed bit-for-bit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Fixed delta time (seconds).
    pub dt_s: f64,
    /// Engine time at the start of the frame (seconds).
    pub time: Time,
}

impl Frame {
    /// Nominal display rate assumed by the render loop.
    pub const DEFAULT_DT_S: f64 = 1.0 / 60.0;

    pub fn new(index: u64, dt_s: f64) -> Self {
        Self {
            index,
            dt_s,
            time: Time(index as f64 * dt_s),
        }
    }

    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_DT_S)
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_s)
    }
}
