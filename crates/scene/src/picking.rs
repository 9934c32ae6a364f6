//! Ray picking for anchor activation.
//!
//! A tap becomes a normalized-device-coordinate point, then a camera ray,
//! then the nearest anchor hit. Anchors are billboards, so the hit proxy is
//! a sphere around the anchor position (rotation-invariant, unlike a box).
//!
//! Picking deliberately tests ALL anchors, including ones culled out of the
//! field of view. That matches the observed behavior of the system this
//! engine replaces; whether off-screen anchors should stay tappable is an
//! open product question, so it is preserved and tested rather than fixed.

use foundation::math::precision::stable_total_cmp_f64;
use foundation::math::{Vec2, Vec3};

use crate::anchor::AnchorId;
use crate::world::AnchorWorld;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

/// Screen pixel coordinates to normalized device coordinates.
///
/// NDC x and y are in `[-1, 1]`; y grows upward (screen y grows downward).
pub fn ndc_from_screen(x_px: f64, y_px: f64, width_px: f64, height_px: f64) -> Vec2 {
    Vec2::new(
        (x_px / width_px) * 2.0 - 1.0,
        -(y_px / height_px) * 2.0 + 1.0,
    )
}

/// Minimal pinhole camera for tap rays.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PinholeCamera {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub fov_y_deg: f64,
    pub aspect: f64,
}

impl PinholeCamera {
    /// Observer-at-origin camera, matching the anchor frame.
    pub fn at_origin(forward: Vec3, fov_y_deg: f64, aspect: f64) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 0.0),
            forward,
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y_deg,
            aspect,
        }
    }

    /// Ray through an NDC point; `None` if the camera basis is degenerate.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Option<Ray> {
        let forward = self.forward.normalized()?;
        let right = forward.cross(self.up).normalized()?;
        let cam_up = right.cross(forward);

        let tan_half = (self.fov_y_deg.to_radians() / 2.0).tan();
        let dir = (forward + right * (ndc.x * tan_half * self.aspect) + cam_up * (ndc.y * tan_half))
            .normalized()?;

        Some(Ray::new(self.position, dir))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    pub max_distance: f64,
    /// Hit-proxy sphere radius; half the label billboard width.
    pub hit_radius: f64,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            max_distance: 1.0e30,
            hit_radius: 75.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub id: AnchorId,
    pub index: usize,
    pub distance: f64,
    pub point: Vec3,
}

/// Host-side action requested by a tapped anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Open the URL in a new context.
    OpenUrl(String),
}

/// Deterministic ray picking over the whole anchor set.
///
/// Ordering contract:
/// - The closest hit along the (normalized) ray wins.
/// - Equal distances break ties toward the lower anchor index.
pub fn pick_ray(world: &AnchorWorld, ray: Ray, opts: PickOptions) -> Option<PickHit> {
    let dir = ray.dir.normalized()?;

    let mut best: Option<(f64, usize)> = None;
    for (index, anchor) in world.anchors().iter().enumerate() {
        let Some(t) = ray_sphere_hit_t(ray.origin, dir, anchor.position, opts.hit_radius) else {
            continue;
        };
        if t > opts.max_distance {
            continue;
        }

        best = match best {
            None => Some((t, index)),
            Some((bt, bi)) => {
                let ord = stable_total_cmp_f64(t, bt).then_with(|| index.cmp(&bi));
                if ord.is_lt() { Some((t, index)) } else { Some((bt, bi)) }
            }
        };
    }

    let (t, index) = best?;
    Some(PickHit {
        id: world.id_at(index)?,
        index,
        distance: t,
        point: ray.origin + dir * t,
    })
}

/// Screen picking: pixel coordinates + camera to the nearest hit.
pub fn pick_screen(
    world: &AnchorWorld,
    x_px: f64,
    y_px: f64,
    width_px: f64,
    height_px: f64,
    camera: &PinholeCamera,
    opts: PickOptions,
) -> Option<PickHit> {
    let ndc = ndc_from_screen(x_px, y_px, width_px, height_px);
    let ray = camera.ray_through_ndc(ndc)?;
    pick_ray(world, ray, opts)
}

/// Resolve a hit into the action it requests, if any.
pub fn activation(world: &AnchorWorld, hit: &PickHit) -> Option<Activation> {
    let anchor = world.anchor(hit.id)?;
    anchor.action_url.clone().map(Activation::OpenUrl)
}

/// Entry distance of a ray against a sphere, `None` on miss.
fn ray_sphere_hit_t(origin: Vec3, dir: Vec3, center: Vec3, radius: f64) -> Option<f64> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let t = -b - sqrt_disc;
    if t >= 0.0 {
        return Some(t);
    }
    // Ray starts inside the sphere.
    let t = -b + sqrt_disc;
    if t >= 0.0 { Some(t) } else { None }
}
