use crate::errors::RotationError;
use std::fmt;
use std::str::FromStr;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// The twelve Euler axis orders.
///
/// The first six use three distinct axes (Tait-Bryan), the last six repeat the
/// first axis in third position (proper Euler). Every match on this enum in the
/// crate is exhaustive, so adding a variant forces each formula table to be
/// extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EulerSequence {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
    Xyx,
    Xzx,
    Yxy,
    Yzy,
    Zxz,
    Zyz,
}

impl EulerSequence {
    pub const ALL: [EulerSequence; 12] = [
        EulerSequence::Xyz,
        EulerSequence::Xzy,
        EulerSequence::Yxz,
        EulerSequence::Yzx,
        EulerSequence::Zxy,
        EulerSequence::Zyx,
        EulerSequence::Xyx,
        EulerSequence::Xzx,
        EulerSequence::Yxy,
        EulerSequence::Yzy,
        EulerSequence::Zxz,
        EulerSequence::Zyz,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            EulerSequence::Xyz => "xyz",
            EulerSequence::Xzy => "xzy",
            EulerSequence::Yxz => "yxz",
            EulerSequence::Yzx => "yzx",
            EulerSequence::Zxy => "zxy",
            EulerSequence::Zyx => "zyx",
            EulerSequence::Xyx => "xyx",
            EulerSequence::Xzx => "xzx",
            EulerSequence::Yxy => "yxy",
            EulerSequence::Yzy => "yzy",
            EulerSequence::Zxz => "zxz",
            EulerSequence::Zyz => "zyz",
        }
    }

    /// Axes of the first, second and third elementary rotation.
    pub const fn axes(self) -> [Axis; 3] {
        use Axis::{X, Y, Z};
        match self {
            EulerSequence::Xyz => [X, Y, Z],
            EulerSequence::Xzy => [X, Z, Y],
            EulerSequence::Yxz => [Y, X, Z],
            EulerSequence::Yzx => [Y, Z, X],
            EulerSequence::Zxy => [Z, X, Y],
            EulerSequence::Zyx => [Z, Y, X],
            EulerSequence::Xyx => [X, Y, X],
            EulerSequence::Xzx => [X, Z, X],
            EulerSequence::Yxy => [Y, X, Y],
            EulerSequence::Yzy => [Y, Z, Y],
            EulerSequence::Zxz => [Z, X, Z],
            EulerSequence::Zyz => [Z, Y, Z],
        }
    }

    /// True when the first and third axes coincide.
    pub const fn is_proper(self) -> bool {
        matches!(
            self,
            EulerSequence::Xyx
                | EulerSequence::Xzx
                | EulerSequence::Yxy
                | EulerSequence::Yzy
                | EulerSequence::Zxz
                | EulerSequence::Zyz
        )
    }

    pub const fn is_tait_bryan(self) -> bool {
        !self.is_proper()
    }
}

impl fmt::Display for EulerSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EulerSequence {
    type Err = RotationError;

    /// Parses the three axis letters, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        EulerSequence::ALL
            .into_iter()
            .find(|seq| seq.name() == wanted)
            .ok_or_else(|| RotationError::unknown_sequence(s))
    }
}

/// Type-level tag binding an [`EulerAngles`](super::EulerAngles) value to one
/// axis order.
pub trait Sequence: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    const KIND: EulerSequence;
}

macro_rules! sequence_markers {
    ($($marker:ident => $kind:ident, $letters:literal;)*) => {
        $(
            #[doc = concat!("Marker for the `", $letters, "` axis order.")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $marker;

            impl Sequence for $marker {
                const KIND: EulerSequence = EulerSequence::$kind;
            }
        )*
    };
}

sequence_markers! {
    Xyz => Xyz, "xyz";
    Xzy => Xzy, "xzy";
    Yxz => Yxz, "yxz";
    Yzx => Yzx, "yzx";
    Zxy => Zxy, "zxy";
    Zyx => Zyx, "zyx";
    Xyx => Xyx, "xyx";
    Xzx => Xzx, "xzx";
    Yxy => Yxy, "yxy";
    Yzy => Yzy, "yzy";
    Zxz => Zxz, "zxz";
    Zyz => Zyz, "zyz";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_axes() {
        for seq in EulerSequence::ALL {
            let letters: String = seq
                .axes()
                .iter()
                .map(|axis| match axis {
                    Axis::X => 'x',
                    Axis::Y => 'y',
                    Axis::Z => 'z',
                })
                .collect();
            assert_eq!(letters, seq.name());
        }
    }

    #[test]
    fn test_proper_iff_first_equals_third() {
        for seq in EulerSequence::ALL {
            let [a, b, c] = seq.axes();
            assert_ne!(a, b, "{}", seq);
            assert_ne!(b, c, "{}", seq);
            assert_eq!(seq.is_proper(), a == c, "{}", seq);
            assert_eq!(seq.is_tait_bryan(), !seq.is_proper());
        }
        assert_eq!(EulerSequence::ALL.iter().filter(|s| s.is_proper()).count(), 6);
    }

    #[test]
    fn test_parse_round_trip() {
        for seq in EulerSequence::ALL {
            assert_eq!(seq.to_string().parse::<EulerSequence>(), Ok(seq));
        }
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(" ZXZ ".parse::<EulerSequence>(), Ok(EulerSequence::Zxz));
        assert_eq!("yZx".parse::<EulerSequence>(), Ok(EulerSequence::Yzx));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "xxz".parse::<EulerSequence>(),
            Err(RotationError::unknown_sequence("xxz"))
        );
        assert!("".parse::<EulerSequence>().is_err());
        assert!("xyzx".parse::<EulerSequence>().is_err());
    }

    #[test]
    fn test_markers_carry_their_kind() {
        assert_eq!(Xyz::KIND, EulerSequence::Xyz);
        assert_eq!(Zyx::KIND, EulerSequence::Zyx);
        assert_eq!(Zxz::KIND, EulerSequence::Zxz);
        assert_eq!(Yxy::KIND, EulerSequence::Yxy);
    }
}
