//! # Atlas Resolver
//!
//! The [`Atlas`] trait is the boundary actors use to interpret anatomical
//! axis names and hemisphere membership. [`SymmetricAtlas`] implements it for
//! a volume whose hemispheres mirror each other across the midline of the
//! left-right axis.

use glam::DVec3;

use crate::error::{SpaceError, SpaceResult};
use crate::space::{AnatomicalAxis, AnatomicalSpace, Hemisphere};

/// Coordinate-space metadata and hemisphere queries of an atlas.
///
/// Coordinates are in microns.
pub trait Atlas {
    /// The anatomical convention of the atlas's array axes.
    fn space(&self) -> &AnatomicalSpace;

    /// Hemisphere containing `point`.
    ///
    /// Fails with [`SpaceError::OutOfBounds`] outside the atlas volume.
    fn hemisphere_from_coords(&self, point: DVec3) -> SpaceResult<Hemisphere>;

    /// Reflection of `point` across the hemisphere boundary.
    fn mirror_point_across_hemispheres(&self, point: DVec3) -> DVec3;
}

/// An atlas volume with mirror-symmetric hemispheres.
///
/// Voxels along the left-right axis with index `>= shape / 2 + 1` belong to
/// the left hemisphere, the rest to the right.
///
/// The volume spans `0..shape * resolution` microns on every axis, so any
/// negative coordinate is [`SpaceError::OutOfBounds`]. Label placement
/// negates depth before its lookup, which puts meshes with positive depth
/// outside the volume; the label then keeps its uncorrected position.
///
/// # Example
///
/// ```rust
/// use neuro_space::{Atlas, AnatomicalSpace, Hemisphere, SymmetricAtlas};
/// use glam::DVec3;
///
/// let atlas = SymmetricAtlas::new(AnatomicalSpace::default(), [10, 10, 10], [25.0; 3]).unwrap();
/// assert_eq!(atlas.hemisphere_from_coords(DVec3::splat(10.0)).unwrap(), Hemisphere::Right);
/// assert_eq!(atlas.hemisphere_from_coords(DVec3::new(10.0, 10.0, 240.0)).unwrap(), Hemisphere::Left);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricAtlas {
    space: AnatomicalSpace,
    shape: [usize; 3],
    resolution: [f64; 3],
}

impl SymmetricAtlas {
    /// Creates an atlas from its space, voxel shape and voxel size in microns.
    pub fn new(space: AnatomicalSpace, shape: [usize; 3], resolution: [f64; 3]) -> SpaceResult<Self> {
        if shape.contains(&0) {
            return Err(SpaceError::invalid_atlas(format!(
                "shape must be non-zero: {:?}",
                shape
            )));
        }
        if resolution.iter().any(|r| !(*r > 0.0)) {
            return Err(SpaceError::invalid_atlas(format!(
                "resolution must be positive: {:?}",
                resolution
            )));
        }
        Ok(Self {
            space,
            shape,
            resolution,
        })
    }

    /// Voxel counts per axis.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Voxel size per axis, in microns.
    pub fn resolution(&self) -> [f64; 3] {
        self.resolution
    }

    /// Extent of the volume per axis, in microns.
    pub fn shape_um(&self) -> DVec3 {
        DVec3::new(
            self.shape[0] as f64 * self.resolution[0],
            self.shape[1] as f64 * self.resolution[1],
            self.shape[2] as f64 * self.resolution[2],
        )
    }

    fn voxel(&self, point: DVec3) -> Option<[usize; 3]> {
        let mut index = [0usize; 3];
        for (i, slot) in index.iter_mut().enumerate() {
            let v = (point[i] / self.resolution[i]).floor();
            if !(v >= 0.0 && v < self.shape[i] as f64) {
                return None;
            }
            *slot = v as usize;
        }
        Some(index)
    }
}

impl Atlas for SymmetricAtlas {
    fn space(&self) -> &AnatomicalSpace {
        &self.space
    }

    fn hemisphere_from_coords(&self, point: DVec3) -> SpaceResult<Hemisphere> {
        let voxel = self.voxel(point).ok_or(SpaceError::OutOfBounds {
            point: point.to_array(),
        })?;

        let lr = self.space.axis_index(AnatomicalAxis::Frontal);
        if voxel[lr] >= self.shape[lr] / 2 + 1 {
            Ok(Hemisphere::Left)
        } else {
            Ok(Hemisphere::Right)
        }
    }

    fn mirror_point_across_hemispheres(&self, point: DVec3) -> DVec3 {
        let lr = self.space.axis_index(AnatomicalAxis::Frontal);
        let mut mirrored = point;
        mirrored[lr] = self.shape_um()[lr] - point[lr];
        mirrored
    }
}
