use glam::{vec2, Vec2, Vec3};
#[cfg(target_arch = "spirv")]
use spirv_std::num_traits::Float;

/// One of the six axis-aligned faces of a point light's shadow atlas.
///
/// Discriminants double as the face's slot within the 6x1 atlas strip.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "spirv"), derive(Debug))]
pub enum CubeFace {
    PositiveX = 0,
    NegativeX = 1,
    PositiveY = 2,
    NegativeY = 3,
    PositiveZ = 4,
    NegativeZ = 5,
}

impl CubeFace {
    /// Returns the face given direction points at, i.e. the face whose axis
    /// dominates the direction.
    ///
    /// Ties resolve in favor of Z, then Y, so that directions lying exactly
    /// on a face boundary always land on the same face instead of leaving
    /// the choice to floating-point noise.
    ///
    /// `dir` doesn't have to be normalized, but it must be non-zero.
    pub fn of(dir: Vec3) -> Self {
        let abs = dir.abs();

        if abs.z >= abs.x && abs.z >= abs.y {
            if dir.z < 0.0 {
                Self::NegativeZ
            } else {
                Self::PositiveZ
            }
        } else if abs.y >= abs.x {
            if dir.y < 0.0 {
                Self::NegativeY
            } else {
                Self::PositiveY
            }
        } else if dir.x < 0.0 {
            Self::NegativeX
        } else {
            Self::PositiveX
        }
    }

    /// Returns this face's slot within the atlas strip.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Projects direction onto this face's image plane, returning a local uv
    /// in `<0.0, 1.0>`, before seam padding.
    ///
    /// The swizzles keep every face's image oriented the way the shadow pass
    /// rendered it (-Y up for the side faces, ±Z up for the cap faces).
    ///
    /// Callers must pass the same direction they selected the face with,
    /// i.e. `self == CubeFace::of(dir)`.
    pub fn project(self, dir: Vec3) -> Vec2 {
        let plane = match self {
            Self::PositiveX => vec2(-dir.z, -dir.y),
            Self::NegativeX => vec2(dir.z, -dir.y),
            Self::PositiveY => vec2(dir.x, dir.z),
            Self::NegativeY => vec2(dir.x, -dir.z),
            Self::PositiveZ => vec2(dir.x, -dir.y),
            Self::NegativeZ => vec2(-dir.x, -dir.y),
        };

        plane * (0.5 / self.major(dir)) + 0.5
    }

    /// Returns the magnitude of direction's dominant component.
    fn major(self, dir: Vec3) -> f32 {
        match self {
            Self::PositiveX | Self::NegativeX => dir.x.abs(),
            Self::PositiveY | Self::NegativeY => dir.y.abs(),
            Self::PositiveZ | Self::NegativeZ => dir.z.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;

    #[test]
    fn of_axis_aligned() {
        assert_eq!(CubeFace::PositiveX, CubeFace::of(vec3(1.0, 0.0, 0.0)));
        assert_eq!(CubeFace::NegativeX, CubeFace::of(vec3(-1.0, 0.0, 0.0)));
        assert_eq!(CubeFace::PositiveY, CubeFace::of(vec3(0.0, 1.0, 0.0)));
        assert_eq!(CubeFace::NegativeY, CubeFace::of(vec3(0.0, -1.0, 0.0)));
        assert_eq!(CubeFace::PositiveZ, CubeFace::of(vec3(0.0, 0.0, 1.0)));
        assert_eq!(CubeFace::NegativeZ, CubeFace::of(vec3(0.0, 0.0, -1.0)));
    }

    #[test]
    fn of_ties() {
        // Z beats both other axes, Y beats X
        assert_eq!(CubeFace::PositiveZ, CubeFace::of(vec3(1.0, 1.0, 1.0)));
        assert_eq!(CubeFace::NegativeZ, CubeFace::of(vec3(1.0, 1.0, -1.0)));
        assert_eq!(CubeFace::PositiveY, CubeFace::of(vec3(1.0, 1.0, 0.5)));
        assert_eq!(CubeFace::NegativeY, CubeFace::of(vec3(1.0, -1.0, 0.5)));
        assert_eq!(CubeFace::PositiveX, CubeFace::of(vec3(1.0, 0.5, 0.5)));
    }

    #[test]
    fn index() {
        assert_eq!(0, CubeFace::PositiveX.index());
        assert_eq!(1, CubeFace::NegativeX.index());
        assert_eq!(2, CubeFace::PositiveY.index());
        assert_eq!(3, CubeFace::NegativeY.index());
        assert_eq!(4, CubeFace::PositiveZ.index());
        assert_eq!(5, CubeFace::NegativeZ.index());
    }

    #[test]
    fn project_centers() {
        let dirs = [
            vec3(1.0, 0.0, 0.0),
            vec3(-1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            vec3(0.0, -1.0, 0.0),
            vec3(0.0, 0.0, 1.0),
            vec3(0.0, 0.0, -1.0),
        ];

        for dir in dirs {
            let uv = CubeFace::of(dir).project(dir);

            assert_relative_eq!(uv.x, 0.5);
            assert_relative_eq!(uv.y, 0.5);
        }
    }

    #[test]
    fn project_signs() {
        // +X: u = -z, v = -y
        let uv = CubeFace::PositiveX.project(vec3(1.0, 0.5, 0.5));
        assert_relative_eq!(uv.x, 0.25);
        assert_relative_eq!(uv.y, 0.25);

        // -X: u = z, v = -y
        let uv = CubeFace::NegativeX.project(vec3(-1.0, 0.5, 0.5));
        assert_relative_eq!(uv.x, 0.75);
        assert_relative_eq!(uv.y, 0.25);

        // +Y: u = x, v = z
        let uv = CubeFace::PositiveY.project(vec3(0.5, 1.0, 0.5));
        assert_relative_eq!(uv.x, 0.75);
        assert_relative_eq!(uv.y, 0.75);

        // -Y: u = x, v = -z
        let uv = CubeFace::NegativeY.project(vec3(0.5, -1.0, 0.5));
        assert_relative_eq!(uv.x, 0.75);
        assert_relative_eq!(uv.y, 0.25);

        // +Z: u = x, v = -y
        let uv = CubeFace::PositiveZ.project(vec3(0.5, 0.5, 1.0));
        assert_relative_eq!(uv.x, 0.75);
        assert_relative_eq!(uv.y, 0.25);

        // -Z: u = -x, v = -y
        let uv = CubeFace::NegativeZ.project(vec3(0.5, 0.5, -1.0));
        assert_relative_eq!(uv.x, 0.25);
        assert_relative_eq!(uv.y, 0.25);
    }

    #[test]
    fn project_ignores_length() {
        let uv1 = CubeFace::PositiveZ.project(vec3(0.25, -0.5, 1.0));
        let uv2 = CubeFace::PositiveZ.project(vec3(25.0, -50.0, 100.0));

        assert_relative_eq!(uv1.x, uv2.x);
        assert_relative_eq!(uv1.y, uv2.y);
    }
}
