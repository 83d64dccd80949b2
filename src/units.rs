use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A distance expressed in PostScript points (1/72 of an inch). All page
/// geometry in the crate is carried in [Pt]; [Mm] and [In] exist only as
/// entry points and convert on the way in.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum,
    Display, From, Into,
)]
pub struct Pt(pub f32);

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// A distance expressed in millimetres
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Mm(pub f32);

impl From<Mm> for Pt {
    fn from(v: Mm) -> Pt {
        Pt(v.0 * 72.0 / 25.4)
    }
}

/// A distance expressed in inches
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(v: In) -> Pt {
        Pt(v.0 * 72.0)
    }
}
