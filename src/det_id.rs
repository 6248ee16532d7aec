//! # Detector identifier decoding
//!
//! Utilities to decode the **packed detector id** carried by every drift tube
//! and by every raw measurement of a reconstructed track.
//!
//! ## Overview
//! -----------------
//! This module provides:
//! - The opaque identifier newtype [`DetId`].
//! - The decoded field view [`ParsedDetId`] with the station, view, plane,
//!   layer and tube fields, and the derived [`module key`](ParsedDetId::module_key).
//! - A small error type [`DetIdError`] describing decoding failures.
//!
//! ## Field layout
//! -----------------
//! Detector ids are decimal-packed, most significant field first:
//!
//! ```text
//! id = station * 10_000_000
//!    + view    *  1_000_000
//!    + plane   *    100_000
//!    + layer   *     10_000
//!    + tube
//! ```
//!
//! - `station`: spectrometer station number, `>= 1`.
//! - `view`: stereo view of the module, `0 => X`, `1 => U`, `2 => V`.
//! - `plane`, `layer`: sub-positions inside the module, single digits.
//! - `tube`: tube number inside the layer, `1..=9999`.
//!
//! The **module key** of an id is the string `T<station><view>`, e.g. tube
//! `10010007` lives in module `"T1X"`. Module keys index the
//! [`ModuleMap`](crate::detector::ModuleMap).
//!
//! ## Error Handling
//! -----------------
//! Decoding failures are reported as [`DetIdError`] with the offending id and
//! field value, and are wrapped into
//! [`DriftviewError::InvalidDetId`](crate::driftview_errors::DriftviewError::InvalidDetId)
//! by the display path.

use thiserror::Error;

use crate::constants::ModuleKey;

/// Decoding failure of a packed detector id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetIdError {
    /// The view digit is outside the known `0..=2` range.
    #[error("detector id {id}: view digit {view} is not one of 0 (X), 1 (U), 2 (V)")]
    InvalidView { id: u32, view: u8 },

    /// The station field is zero.
    #[error("detector id {id}: station field is zero")]
    ZeroStation { id: u32 },

    /// The tube field is zero.
    #[error("detector id {id}: tube field is zero")]
    ZeroTube { id: u32 },
}

/// Opaque identifier of a single drift tube.
///
/// Carried verbatim by the geometry and by raw track measurements; decode it
/// with [`DetId::parse`] to recover the physical position fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DetId(pub u32);

impl std::fmt::Display for DetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DetId {
    fn from(raw: u32) -> Self {
        DetId(raw)
    }
}

/// Stereo view of a drift-tube module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TubeView {
    /// Vertical tubes measuring x
    X,
    /// Tubes rotated by the positive stereo angle
    U,
    /// Tubes rotated by the negative stereo angle
    V,
}

impl TubeView {
    /// Single-letter form used in module keys.
    pub fn letter(&self) -> char {
        match self {
            TubeView::X => 'X',
            TubeView::U => 'U',
            TubeView::V => 'V',
        }
    }

    fn from_digit(id: u32, digit: u8) -> Result<Self, DetIdError> {
        match digit {
            0 => Ok(TubeView::X),
            1 => Ok(TubeView::U),
            2 => Ok(TubeView::V),
            view => Err(DetIdError::InvalidView { id, view }),
        }
    }
}

/// Decoded field view of a [`DetId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDetId {
    pub station: u8,
    pub view: TubeView,
    pub plane: u8,
    pub layer: u8,
    pub tube: u16,
}

impl ParsedDetId {
    /// Key of the module this id belongs to, e.g. `"T2V"`.
    pub fn module_key(&self) -> ModuleKey {
        format!("T{}{}", self.station, self.view.letter())
    }
}

impl DetId {
    /// Decode the packed fields of this detector id.
    ///
    /// Arguments
    /// -----------------
    /// *None*
    ///
    /// Return
    /// ----------
    /// * The decoded [`ParsedDetId`], or a [`DetIdError`] when the view digit
    ///   is unknown or the station/tube field is zero.
    ///
    /// See also
    /// ------------
    /// * [`ParsedDetId::module_key`] – Module key derivation.
    pub fn parse(&self) -> Result<ParsedDetId, DetIdError> {
        let raw = self.0;
        let station = (raw / 10_000_000) as u8;
        let view = ((raw / 1_000_000) % 10) as u8;
        let plane = ((raw / 100_000) % 10) as u8;
        let layer = ((raw / 10_000) % 10) as u8;
        let tube = (raw % 10_000) as u16;

        if station == 0 {
            return Err(DetIdError::ZeroStation { id: raw });
        }
        if tube == 0 {
            return Err(DetIdError::ZeroTube { id: raw });
        }

        Ok(ParsedDetId {
            station,
            view: TubeView::from_digit(raw, view)?,
            plane,
            layer,
            tube,
        })
    }

    /// Module key of this id, shorthand for `parse()?.module_key()`.
    pub fn module_key(&self) -> Result<ModuleKey, DetIdError> {
        Ok(self.parse()?.module_key())
    }
}

/// Pack detector id fields into a [`DetId`].
///
/// Inverse of [`DetId::parse`]; mainly useful to build geometries and test
/// fixtures. No validation is performed here, the packed id is validated on
/// decode.
pub fn make_det_id(station: u8, view: TubeView, plane: u8, layer: u8, tube: u16) -> DetId {
    let view_digit = match view {
        TubeView::X => 0u32,
        TubeView::U => 1u32,
        TubeView::V => 2u32,
    };
    DetId(
        station as u32 * 10_000_000
            + view_digit * 1_000_000
            + plane as u32 * 100_000
            + layer as u32 * 10_000
            + tube as u32,
    )
}
