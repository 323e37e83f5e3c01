//! Spheres, the only surface type.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use glint_core::{SceneError, SceneResult};
use glint_math::{Interval, Point3};

/// A sphere primitive.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<dyn Material>,
    /// Normals point inward, bounding a cavity rather than a solid
    hollow: bool,
}

impl Sphere {
    /// Create a new solid sphere.
    ///
    /// The radius must be finite and strictly positive; the normal is
    /// computed by dividing by it.
    pub fn new(center: Point3, radius: f64, material: Arc<dyn Material>) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
            hollow: false,
        })
    }

    /// Turn the sphere inside out, e.g. for the air bubble in a glass shell.
    pub fn hollow(mut self) -> Self {
        self.hollow = true;
        self
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the near root; fall back to the far one when the ray starts inside
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let mut outward_normal = (ray.at(root) - self.center) / self.radius;
        if self.hollow {
            outward_normal = -outward_normal;
        }

        Some(HitRecord::new(ray, root, outward_normal, self.material.as_ref()))
    }
}
