use foundation::handles::Handle;
use foundation::math::Vec3;

/// Generational anchor id.
///
/// The generation is the world's rebuild count, so ids from a discarded
/// anchor set never resolve against the set that replaced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AnchorId(pub Handle);

impl AnchorId {
    pub fn index(&self) -> u32 {
        self.0.index()
    }

    pub fn generation(&self) -> u32 {
        self.0.generation()
    }
}

/// One placed point of interest in the observer's local frame.
///
/// Derived deterministically from a POI record plus the session's reference
/// heading. The `visible` flag is toggled per frame by culling; toggling
/// never destroys or recreates the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub label: String,
    /// Bearing relative to the reference heading, `[0, 360)`.
    pub relative_bearing_deg: f64,
    /// Render radius after band normalization (scene units, not meters).
    pub radius: f64,
    pub position: Vec3,
    pub action_url: Option<String>,
    pub visible: bool,
}
