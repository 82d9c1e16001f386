//! # Anatomical Space
//!
//! A space is described by three letters, one per array axis, each naming
//! the anatomical direction at that axis's origin:
//!
//! | Pair | Axis name  | Letters |
//! |------|------------|---------|
//! | ap   | `sagittal` | a, p    |
//! | si   | `vertical` | s, i    |
//! | lr   | `frontal`  | l, r    |
//!
//! For `"asr"` the first axis runs antero-posterior, the second
//! supero-inferior and the third right to left.

use std::fmt;
use std::str::FromStr;

use crate::error::{SpaceError, SpaceResult};

/// Anatomical name of a spatial axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnatomicalAxis {
    /// Antero-posterior axis
    Sagittal,
    /// Supero-inferior axis
    Vertical,
    /// Left-right axis
    Frontal,
}

impl AnatomicalAxis {
    /// The two direction letters that lie along this axis.
    pub fn letters(self) -> [char; 2] {
        match self {
            Self::Sagittal => ['a', 'p'],
            Self::Vertical => ['s', 'i'],
            Self::Frontal => ['l', 'r'],
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        [Self::Sagittal, Self::Vertical, Self::Frontal]
            .into_iter()
            .find(|axis| axis.letters().contains(&letter))
    }
}

impl FromStr for AnatomicalAxis {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sagittal" => Ok(Self::Sagittal),
            "vertical" => Ok(Self::Vertical),
            "frontal" => Ok(Self::Frontal),
            _ => Err(SpaceError::UnknownAxisName { name: s.to_string() }),
        }
    }
}

impl fmt::Display for AnatomicalAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sagittal => "sagittal",
            Self::Vertical => "vertical",
            Self::Frontal => "frontal",
        })
    }
}

/// Brain hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    Left,
    Right,
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// An anatomical coordinate convention.
///
/// # Example
///
/// ```rust
/// use neuro_space::{AnatomicalAxis, AnatomicalSpace};
///
/// let space: AnatomicalSpace = "asr".parse().unwrap();
/// assert_eq!(space.axis_index(AnatomicalAxis::Sagittal), 0);
/// assert_eq!(space.axis_index(AnatomicalAxis::Frontal), 2);
/// assert_eq!(space, AnatomicalSpace::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnatomicalSpace {
    origin: [char; 3],
    axes: [AnatomicalAxis; 3],
}

impl AnatomicalSpace {
    /// Origin at the anterior, superior, right corner.
    pub const ASR: Self = Self {
        origin: ['a', 's', 'r'],
        axes: [
            AnatomicalAxis::Sagittal,
            AnatomicalAxis::Vertical,
            AnatomicalAxis::Frontal,
        ],
    };

    /// Parses a three-letter space code such as `"asr"` or `"ras"`.
    pub fn new(origin: &str) -> SpaceResult<Self> {
        let letters: Vec<char> = origin.trim().to_ascii_lowercase().chars().collect();
        let [a, b, c] = letters[..] else {
            return Err(SpaceError::invalid_space(origin, "expected three letters"));
        };

        let mut axes = [AnatomicalAxis::Sagittal; 3];
        for (slot, letter) in axes.iter_mut().zip([a, b, c]) {
            *slot = AnatomicalAxis::from_letter(letter).ok_or_else(|| {
                SpaceError::invalid_space(origin, format!("unknown direction '{}'", letter))
            })?;
        }

        if axes[0] == axes[1] || axes[1] == axes[2] || axes[0] == axes[2] {
            return Err(SpaceError::invalid_space(
                origin,
                "each axis pair must appear once",
            ));
        }

        Ok(Self {
            origin: [a, b, c],
            axes,
        })
    }

    /// Array index of the given anatomical axis.
    pub fn axis_index(&self, axis: AnatomicalAxis) -> usize {
        // Every axis appears exactly once by construction
        self.axes.iter().position(|a| *a == axis).unwrap_or(0)
    }

    /// Anatomical axes in array order.
    pub fn axes_order(&self) -> [AnatomicalAxis; 3] {
        self.axes
    }

    /// Direction letters at the origin of each array axis.
    pub fn origin(&self) -> [char; 3] {
        self.origin
    }
}

impl Default for AnatomicalSpace {
    fn default() -> Self {
        Self::ASR
    }
}

impl FromStr for AnatomicalSpace {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for AnatomicalSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.origin.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asr_axes() {
        let space = AnatomicalSpace::default();
        assert_eq!(space.axis_index(AnatomicalAxis::Sagittal), 0);
        assert_eq!(space.axis_index(AnatomicalAxis::Vertical), 1);
        assert_eq!(space.axis_index(AnatomicalAxis::Frontal), 2);
        assert_eq!(space.to_string(), "asr");
    }

    #[test]
    fn test_permuted_space() {
        let space: AnatomicalSpace = "RAS".parse().unwrap();
        assert_eq!(space.axis_index(AnatomicalAxis::Frontal), 0);
        assert_eq!(space.axis_index(AnatomicalAxis::Sagittal), 1);
        assert_eq!(space.axis_index(AnatomicalAxis::Vertical), 2);
        assert_eq!(space.origin(), ['r', 'a', 's']);
    }

    #[test]
    fn test_invalid_spaces() {
        assert!(AnatomicalSpace::new("as").is_err());
        assert!(AnatomicalSpace::new("asrx").is_err());
        assert!(AnatomicalSpace::new("apr").is_err());
        assert!(AnatomicalSpace::new("xyz").is_err());
    }

    #[test]
    fn test_axis_names() {
        assert_eq!("Sagittal".parse::<AnatomicalAxis>().unwrap(), AnatomicalAxis::Sagittal);
        assert_eq!("frontal".parse::<AnatomicalAxis>().unwrap(), AnatomicalAxis::Frontal);
        assert!(matches!(
            "coronal".parse::<AnatomicalAxis>(),
            Err(SpaceError::UnknownAxisName { .. })
        ));
    }

    #[test]
    fn test_hemisphere_display() {
        assert_eq!(Hemisphere::Left.to_string(), "left");
        assert_eq!(Hemisphere::Right.to_string(), "right");
    }
}
