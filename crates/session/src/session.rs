//! The owned AR session object.
//!
//! One `ArSession` is constructed when AR tracking starts and dropped when
//! it ends; all mutable state (heading latch, anchor list, retry budget)
//! lives in it. Three producers feed the session, all on the host's single
//! UI thread: sensor callbacks (`on_orientation`), out-of-band completions
//! (`on_poi_fetch`, `on_fix_result`), and the per-frame step
//! (`advance_frame`). Single-writer discipline makes locking unnecessary.

use foundation::math::Geodetic;
use foundation::time::Time;
use poi::{Poi, PoiError, PoiSet};
use runtime::event_bus::{Event, EventBus};
use runtime::frame::Frame;
use runtime::retry::RetryPolicy;
use scene::anchor::Anchor;
use scene::picking::{Activation, PickOptions, PinholeCamera, activation, pick_screen};
use scene::place::PlacementBand;
use scene::visibility::{FovGate, cull_anchors};
use scene::world::AnchorWorld;
use tracking::heading::{HeadingState, HeadingTracker};
use tracking::orientation::OrientationSample;
use tracking::tilt::{TiltGuard, TiltStatus};

use crate::error::SessionError;
use crate::location::{
    AcquisitionOutcome, FixError, FixRequest, Geofence, GeofenceAction, GeofenceResolution,
    LocationAcquisition,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub band: PlacementBand,
    pub fov: FovGate,
    pub tilt: TiltGuard,
    pub retry: RetryPolicy,
    pub fix_request: FixRequest,
    pub geofence: Option<Geofence>,
    pub pick: PickOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            band: PlacementBand::default(),
            fov: FovGate::default(),
            tilt: TiltGuard::default(),
            retry: RetryPolicy::default(),
            fix_request: FixRequest::default(),
            geofence: None,
            pick: PickOptions::default(),
        }
    }
}

/// Per-frame snapshot handed to the rendering host.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    pub frame_index: u64,
    pub heading: HeadingState,
    pub tilt: TiltStatus,
    pub visible_anchors: usize,
}

/// Location progress as seen by the host after a fix result.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LocationStatus {
    Ready(Geodetic),
    RetryAt(Time),
}

#[derive(Debug)]
pub struct ArSession {
    config: SessionConfig,
    heading: HeadingTracker,
    tilt_status: TiltStatus,
    world: AnchorWorld,
    pois: PoiSet,
    pending_rebuild: bool,
    location: LocationAcquisition,
    origin: Option<Geodetic>,
    frame: Frame,
    bus: EventBus,
}

impl ArSession {
    pub fn new(config: SessionConfig) -> Self {
        let location =
            LocationAcquisition::new(config.fix_request, config.geofence, config.retry);
        Self {
            config,
            heading: HeadingTracker::new(),
            tilt_status: TiltStatus::Neutral,
            world: AnchorWorld::new(),
            pois: PoiSet::default(),
            pending_rebuild: false,
            location,
            origin: None,
            frame: Frame::first(),
            bus: EventBus::new(),
        }
    }

    /// Sensor-rate path: consume one orientation sample.
    pub fn on_orientation(&mut self, sample: OrientationSample) -> HeadingState {
        let had_reference = self.heading.reference_deg().is_some();
        let state = self.heading.observe_sample(sample);
        if !had_reference
            && let Some(reference) = state.reference_deg
        {
            self.bus.emit(
                self.frame,
                "heading",
                format!("reference latched at {reference:.1}"),
            );
        }
        self.tilt_status = self.config.tilt.classify(sample.pitch_deg);
        state
    }

    /// Out-of-band POI fetch completion.
    ///
    /// A parsed set atomically replaces the previous one; anchors are rebuilt
    /// on the next frame step (placement needs the latched reference
    /// heading, which may not exist yet). A failed fetch is logged and leaves
    /// the scene as it was; heading and tilt tracking are unaffected.
    pub fn on_poi_fetch(&mut self, result: Result<PoiSet, PoiError>) {
        match result {
            Ok(set) => {
                self.bus
                    .emit(self.frame, "poi", format!("set replaced ({} records)", set.len()));
                self.pois = set;
                self.pending_rebuild = true;
            }
            Err(e) => {
                log::warn!("POI fetch failed: {e}");
                self.bus.emit(self.frame, "fetch", format!("failed: {e}"));
            }
        }
    }

    /// Replace the POI set from raw geodetic records.
    ///
    /// Requires an accepted origin; bearings and distances are derived from
    /// it. Ingest path for feeds that publish coordinates. Records that fail
    /// POI validation (non-finite coordinates and the like) are reported as
    /// [`SessionError::InvalidPois`] and the scene is left untouched.
    pub fn replace_pois_from_geodetic<I, S>(&mut self, items: I) -> Result<(), SessionError>
    where
        I: IntoIterator<Item = (S, Geodetic)>,
        S: Into<String>,
    {
        let Some(origin) = self.origin else {
            return Err(SessionError::sensor_unavailable("geolocation"));
        };
        let records: Vec<Poi> = items
            .into_iter()
            .map(|(label, position)| Poi::from_geodetic(origin, position, label))
            .collect();
        let set = PoiSet::from_records(records)
            .map_err(|e| SessionError::InvalidPois {
                detail: e.to_string(),
            })?;
        self.on_poi_fetch(Ok(set));
        Ok(())
    }

    /// Per-frame step: rebuild if needed, cull, advance the timebase.
    pub fn advance_frame(&mut self) -> FrameReport {
        if self.pending_rebuild
            && let Some(reference) = self.heading.reference_deg()
        {
            self.world.rebuild(&self.pois, reference, self.config.band);
            self.pending_rebuild = false;
            self.bus.emit(
                self.frame,
                "anchors",
                format!("rebuilt {} anchors", self.world.len()),
            );
        }

        let visible = cull_anchors(&mut self.world, self.heading.heading_deg(), self.config.fov);

        let report = FrameReport {
            frame_index: self.frame.index,
            heading: self.heading.state(),
            tilt: self.tilt_status,
            visible_anchors: visible,
        };
        self.frame = self.frame.next();
        report
    }

    /// Pointer/tap path: ray-pick the anchor set and resolve its action.
    pub fn on_pointer(
        &mut self,
        x_px: f64,
        y_px: f64,
        width_px: f64,
        height_px: f64,
        camera: &PinholeCamera,
    ) -> Option<Activation> {
        let hit = pick_screen(
            &self.world,
            x_px,
            y_px,
            width_px,
            height_px,
            camera,
            self.config.pick,
        )?;
        let action = activation(&self.world, &hit)?;
        let Activation::OpenUrl(url) = &action;
        self.bus
            .emit(self.frame, "pick", format!("anchor {} -> {url}", hit.index));
        Some(action)
    }

    /// The request to hand to the platform geolocation API.
    pub fn fix_request(&self) -> FixRequest {
        self.location.request()
    }

    /// Consume one geolocation result.
    ///
    /// Retryable failures come back as `Ok(LocationStatus::RetryAt(_))`; the
    /// exhausted-budget and geofence cases are session errors the host must
    /// surface.
    pub fn on_fix_result(
        &mut self,
        result: Result<Geodetic, FixError>,
    ) -> Result<LocationStatus, SessionError> {
        let now = self.frame.time;
        match self.location.on_fix_result(result, now) {
            AcquisitionOutcome::Ready(position) => {
                self.origin = Some(position);
                self.bus.emit(self.frame, "gps", "fix accepted");
                Ok(LocationStatus::Ready(position))
            }
            AcquisitionOutcome::RetryAt(at) => {
                self.bus.emit(
                    self.frame,
                    "gps",
                    format!("no fix, retrying at t={:.1}s", at.seconds()),
                );
                Ok(LocationStatus::RetryAt(at))
            }
            AcquisitionOutcome::GaveUp { attempts } => {
                log::warn!("giving up on GPS after {attempts} attempts");
                self.bus.emit(self.frame, "gps", "gave up");
                Err(SessionError::GpsUnavailable { attempts })
            }
            AcquisitionOutcome::Rejected(rejection) => {
                self.bus.emit(
                    self.frame,
                    "gps",
                    format!("geofence rejected at {:.0} m", rejection.distance_m),
                );
                Err(rejection.into())
            }
        }
    }

    /// Dismiss a geofence rejection.
    ///
    /// Returns the request to re-run when the user chose retry; `None` means
    /// the session proceeds anchored at the fixed origin.
    pub fn resolve_geofence(&mut self, action: GeofenceAction) -> Option<FixRequest> {
        match self.location.resolve_rejection(action) {
            GeofenceResolution::Rerun(request) => Some(request),
            GeofenceResolution::ProceedAt(origin) => {
                self.origin = Some(origin);
                self.bus.emit(self.frame, "gps", "geofence bypassed");
                None
            }
        }
    }

    pub fn origin(&self) -> Option<Geodetic> {
        self.origin
    }

    pub fn heading(&self) -> HeadingState {
        self.heading.state()
    }

    pub fn tilt(&self) -> TiltStatus {
        self.tilt_status
    }

    pub fn anchors(&self) -> &[Anchor] {
        self.world.anchors()
    }

    pub fn events(&self) -> &[Event] {
        self.bus.events()
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.bus.drain()
    }

    /// Deterministic teardown.
    ///
    /// Clears the anchor set and returns the remaining trace. Unsubscribing
    /// the actual sensor listeners is the host's responsibility; after this
    /// call a stray callback finds an empty, inert session.
    pub fn end(&mut self) -> Vec<Event> {
        self.world.clear();
        self.pois = PoiSet::default();
        self.pending_rebuild = false;
        self.bus.drain()
    }
}
