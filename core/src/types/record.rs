use crate::types::{RegionOfInterest, SideOfHead};
use chrono::NaiveDateTime;
use std::fmt;

/// Metadata extracted from a single slide document
///
/// Only constructed when the identifier, depth and digitization timestamp
/// were all recovered; `side_of_head` and `notes` may legitimately be
/// absent. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SlideMetadata {
    /// Specimen identifier, uppercased
    pub id: String,

    /// Free-text notes entered during scanning
    pub notes: Option<String>,

    /// Side of the head the slide was cut from
    pub side_of_head: Option<SideOfHead>,

    /// Slide depth in micrometers
    pub depth_um: i32,

    /// When the slide was digitized
    pub digitized_at: NaiveDateTime,

    /// Region of interest, attached by a later annotation stage
    pub roi: Option<RegionOfInterest>,
}

impl SlideMetadata {
    /// Creates a record from the required and optional extracted fields
    pub fn new(
        id: String,
        notes: Option<String>,
        side_of_head: Option<SideOfHead>,
        depth_um: i32,
        digitized_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            notes,
            side_of_head,
            depth_um,
            digitized_at,
            roi: None,
        }
    }

    /// Returns a copy of this record with a region of interest attached
    pub fn with_roi(mut self, roi: RegionOfInterest) -> Self {
        self.roi = Some(roi);
        self
    }
}

impl fmt::Display for SlideMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} um, digitized {}",
            self.id, self.depth_um, self.digitized_at
        )?;
        if let Some(side) = self.side_of_head {
            write!(f, ", {} side", side)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;
    use chrono::NaiveDate;

    fn record() -> SlideMetadata {
        SlideMetadata::new(
            "PP21".to_string(),
            None,
            Some(SideOfHead::Right),
            321,
            NaiveDate::from_ymd_opt(2017, 3, 14)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_roi_absent_by_default() {
        assert!(record().roi.is_none());
    }

    #[test]
    fn test_with_roi() {
        let r = record().with_roi(RegionOfInterest::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
        ));
        assert_eq!(r.roi.unwrap().area(), 50.0);
    }

    #[test]
    fn test_display() {
        let s = record().to_string();
        assert!(s.contains("PP21"));
        assert!(s.contains("321 um"));
        assert!(s.contains("right side"));
    }
}
