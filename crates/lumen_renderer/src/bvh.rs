//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! Built once from an owned set of primitives and read-only afterwards.
//! Each split sorts its primitives by bounding-box minimum along a randomly
//! chosen axis and halves them by count, so there are
//! `ceil(log2(n))` levels of branches regardless of how the boxes are
//! distributed.

use crate::{HitRecord, Hittable, HittableList};
use lumen_math::{Aabb, Interval, Ray};
use rand::{Rng, RngCore};
use thiserror::Error;

/// Fatal errors while building a BVH. No partial tree is ever returned.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("cannot build a BVH over zero primitives")]
    EmptyInput,

    #[error("primitive {index} has no bounding box for time range [{time0}, {time1}]")]
    MissingBoundingBox { index: usize, time0: f32, time1: f32 },
}

/// BVH node - either a branch with two children or a single primitive.
pub enum BvhNode {
    /// Internal node caching the union of its children's boxes.
    Branch {
        left: Box<BvhNode>,
        right: Box<BvhNode>,
        bbox: Aabb,
    },
    /// Exactly one primitive.
    Leaf { object: Box<dyn Hittable>, bbox: Aabb },
}

impl BvhNode {
    /// Build a BVH over `objects`, using their bounding boxes over `time`.
    ///
    /// `rng` drives the per-node split-axis choice.
    pub fn new(
        objects: Vec<Box<dyn Hittable>>,
        time: Interval,
        rng: &mut dyn RngCore,
    ) -> Result<Self, BuildError> {
        if objects.is_empty() {
            return Err(BuildError::EmptyInput);
        }

        let count = objects.len();
        let items = objects
            .into_iter()
            .enumerate()
            .map(|(index, object)| match object.bounding_box(time) {
                Some(bbox) => Ok((object, bbox)),
                None => Err(BuildError::MissingBoundingBox {
                    index,
                    time0: time.min,
                    time1: time.max,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let root = Self::build(items, rng);
        log::info!(
            "Built BVH over {} primitives: {} nodes, depth {}, bounds {}",
            count,
            root.node_count(),
            root.depth(),
            root.bbox()
        );
        Ok(root)
    }

    /// Build a BVH from the members of a list.
    pub fn from_list(
        list: HittableList,
        time: Interval,
        rng: &mut dyn RngCore,
    ) -> Result<Self, BuildError> {
        Self::new(list.into_objects(), time, rng)
    }

    /// Recursive construction over a non-empty set of boxed primitives.
    fn build(mut items: Vec<(Box<dyn Hittable>, Aabb)>, rng: &mut dyn RngCore) -> Self {
        if items.len() == 1 {
            let (object, bbox) = items.remove(0);
            return BvhNode::Leaf { object, bbox };
        }

        let axis = rng.gen_range(0..3);
        // Stable sort; ties keep their input order
        items.sort_by(|(_, a), (_, b)| a.min()[axis].total_cmp(&b.min()[axis]));

        let mid = items.len() / 2;
        let right_items = items.split_off(mid);

        let left = Self::build(items, rng);
        let right = Self::build(right_items, rng);
        let bbox = Aabb::surrounding(&left.bbox(), &right.bbox());

        BvhNode::Branch {
            left: Box::new(left),
            right: Box::new(right),
            bbox,
        }
    }

    /// Cached bounding box of this subtree.
    pub fn bbox(&self) -> Aabb {
        match self {
            BvhNode::Branch { bbox, .. } | BvhNode::Leaf { bbox, .. } => *bbox,
        }
    }

    /// Number of nodes (branches and leaves) in this subtree.
    pub fn node_count(&self) -> usize {
        match self {
            BvhNode::Leaf { .. } => 1,
            BvhNode::Branch { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Longest root-to-leaf path, counting the leaf. A single leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            BvhNode::Leaf { .. } => 1,
            BvhNode::Branch { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl Hittable for BvhNode {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            BvhNode::Leaf { object, .. } => object.hit(ray, ray_t),

            BvhNode::Branch { left, right, bbox } => {
                if !bbox.hit(ray, ray_t) {
                    return None;
                }

                let hit_left = left.hit(ray, ray_t);

                // Only check right up to closest hit
                let right_t = hit_left.map_or(ray_t, |rec| ray_t.with_max(rec.t));
                let hit_right = right.hit(ray, right_t);

                hit_right.or(hit_left)
            }
        }
    }

    fn bounding_box(&self, _time: Interval) -> Option<Aabb> {
        Some(self.bbox())
    }
}
