//! Mouse picking
//!
//! Casts a ray from the camera through the cursor and finds the nearest room
//! plane it crosses. Hits on the back wall are then checked against the icon
//! tiles, which sit just in front of it.

use macroquad::math::{vec3, Mat4, Vec2, Vec3};

use focusmap::room::HitTarget;
use focusmap::{IconId, PlaneId, WallGeometry, WorldPos};

/// Tolerance for plane bounds checks
const EPSILON: f32 = 1e-4;

/// Half the side of an icon tile, in world units
pub const ICON_HALF_SIZE: f32 = 0.18;

/// A ray in world space
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Ray from the camera through a point in normalized device coordinates
    pub fn from_ndc(view_proj: Mat4, ndc: Vec2) -> Self {
        let inv = view_proj.inverse();
        let near = inv.project_point3(vec3(ndc.x, ndc.y, -1.0));
        let far = inv.project_point3(vec3(ndc.x, ndc.y, 1.0));
        Self {
            origin: near,
            dir: (far - near).normalize_or_zero(),
        }
    }
}

/// World-space extent of the room
///
/// The back wall is centered on the origin facing +Z; side walls and the
/// floor extend `depth` units toward the camera.
#[derive(Debug, Clone, Copy)]
pub struct RoomShape {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl RoomShape {
    pub fn new(wall: &WallGeometry, depth: f32) -> Self {
        Self {
            width: wall.width,
            height: wall.height,
            depth,
        }
    }

    /// Intersect a ray with one plane, returning distance and hit point
    fn intersect(&self, plane: PlaneId, ray: &Ray) -> Option<(f32, Vec3)> {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);

        // (axis index, plane offset along that axis)
        let (axis, offset) = match plane {
            PlaneId::Back => (2, 0.0),
            PlaneId::Left => (0, -hw),
            PlaneId::Right => (0, hw),
            PlaneId::Bottom => (1, -hh),
        };

        let d = ray.dir[axis];
        if d.abs() < EPSILON {
            return None;
        }
        let t = (offset - ray.origin[axis]) / d;
        if t <= 0.0 {
            return None;
        }

        let p = ray.origin + ray.dir * t;
        let in_x = p.x >= -hw - EPSILON && p.x <= hw + EPSILON;
        let in_y = p.y >= -hh - EPSILON && p.y <= hh + EPSILON;
        let in_z = p.z >= -EPSILON && p.z <= self.depth + EPSILON;
        let inside = match plane {
            PlaneId::Back => in_x && in_y,
            PlaneId::Left | PlaneId::Right => in_y && in_z,
            PlaneId::Bottom => in_x && in_z,
        };

        inside.then_some((t, p))
    }

    /// Nearest plane (among `planes`) the ray crosses
    pub fn hit_plane(&self, planes: impl IntoIterator<Item = PlaneId>, ray: &Ray) -> Option<(PlaneId, Vec3)> {
        planes
            .into_iter()
            .filter_map(|plane| self.intersect(plane, ray).map(|(t, p)| (t, plane, p)))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, plane, p)| (plane, p))
    }
}

/// Work out what a click struck
///
/// `icons` are the rendered icon nodes (id and world position). Icons live
/// on the back wall, so they only catch rays that reach it.
pub fn pick<'a>(
    shape: &RoomShape,
    planes: impl IntoIterator<Item = PlaneId>,
    icons: impl IntoIterator<Item = (IconId, &'a WorldPos)>,
    ray: &Ray,
) -> Option<HitTarget> {
    let (plane, point) = shape.hit_plane(planes, ray)?;
    if plane != PlaneId::Back {
        return Some(HitTarget::Wall(plane));
    }

    let icon = icons.into_iter().find(|(_, pos)| {
        (point.x - pos.x).abs() <= ICON_HALF_SIZE && (point.y - pos.y).abs() <= ICON_HALF_SIZE
    });

    Some(match icon {
        Some((id, _)) => HitTarget::Icon(id),
        None => HitTarget::Wall(PlaneId::Back),
    })
}
