//! Special-ability tags
//!
//! Tags are either a constant label (`CASE`, `OMNI`, ...) or a label followed
//! by one to three damage values (`IF2`, `LRM1/1/2`). A missing value prints
//! as `-`, so `SRM(None, 1)` renders `SRM-/1`. Values are not range-checked.

use std::fmt;

/// Printed in place of a missing parameter
pub const MISSING_PARAM: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    /// Anti-missile system
    Ams,
    /// Cellular ammunition storage
    Case,
    /// Light TAG
    Ltag,
    /// OmniMech
    Omni,
    /// Overheat long
    Ovl,
    /// Indirect fire
    If(Option<u32>),
    /// Long-range missiles, short/medium/long
    Lrm(Option<u32>, Option<u32>, Option<u32>),
    /// Rear-facing weapons, short/medium/long
    Rear(Option<u32>, Option<u32>, Option<u32>),
    /// Short-range missiles, short/medium
    Srm(Option<u32>, Option<u32>),
}

pub const AMS: Special = Special::Ams;
pub const CASE: Special = Special::Case;
pub const LTAG: Special = Special::Ltag;
pub const OMNI: Special = Special::Omni;
pub const OVL: Special = Special::Ovl;

#[allow(non_snake_case)]
pub fn IF(n: impl Into<Option<u32>>) -> Special {
    Special::If(n.into())
}

#[allow(non_snake_case)]
pub fn LRM(
    s: impl Into<Option<u32>>,
    m: impl Into<Option<u32>>,
    l: impl Into<Option<u32>>,
) -> Special {
    Special::Lrm(s.into(), m.into(), l.into())
}

#[allow(non_snake_case)]
pub fn REAR(
    s: impl Into<Option<u32>>,
    m: impl Into<Option<u32>>,
    l: impl Into<Option<u32>>,
) -> Special {
    Special::Rear(s.into(), m.into(), l.into())
}

#[allow(non_snake_case)]
pub fn SRM(s: impl Into<Option<u32>>, m: impl Into<Option<u32>>) -> Special {
    Special::Srm(s.into(), m.into())
}

impl Special {
    pub fn label(&self) -> &'static str {
        match self {
            Special::Ams => "AMS",
            Special::Case => "CASE",
            Special::Ltag => "LTAG",
            Special::Omni => "OMNI",
            Special::Ovl => "OVL",
            Special::If(_) => "IF",
            Special::Lrm(..) => "LRM",
            Special::Rear(..) => "REAR",
            Special::Srm(..) => "SRM",
        }
    }

    /// Parameters in print order; empty for constant tags
    pub fn params(&self) -> Vec<Option<u32>> {
        match *self {
            Special::Ams | Special::Case | Special::Ltag | Special::Omni | Special::Ovl => {
                Vec::new()
            }
            Special::If(n) => vec![n],
            Special::Lrm(s, m, l) | Special::Rear(s, m, l) => vec![s, m, l],
            Special::Srm(s, m) => vec![s, m],
        }
    }
}

fn format_param(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => MISSING_PARAM.to_string(),
    }
}

impl fmt::Display for Special {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .params()
            .into_iter()
            .map(format_param)
            .collect::<Vec<_>>()
            .join("/");
        write!(f, "{}{}", self.label(), params)
    }
}
