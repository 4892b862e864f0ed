use std::fmt;

use serde::Deserialize;

use super::derive;

// ---------------------------------------------------------------------------
// DebrisClass – the four catalog categories
// ---------------------------------------------------------------------------

/// Coarse debris category assigned from the catalog's `OBJECT_TYPE` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebrisClass {
    Spacecraft,
    RocketBodies,
    MissionDebris,
    FragmentationDebris,
}

impl DebrisClass {
    /// Fixed stacking order for the histogram: Spacecraft is drawn
    /// first (bottom of the stack).
    pub const STACKING_ORDER: [DebrisClass; 4] = [
        DebrisClass::Spacecraft,
        DebrisClass::RocketBodies,
        DebrisClass::MissionDebris,
        DebrisClass::FragmentationDebris,
    ];

    /// Classify an `OBJECT_TYPE` value.  Matching is case-insensitive and
    /// total: anything unrecognized (including a missing value) is counted
    /// as mission debris.
    pub fn from_object_type(object_type: Option<&str>) -> Self {
        match object_type {
            Some(s) if s.eq_ignore_ascii_case("PAYLOAD") => DebrisClass::Spacecraft,
            Some(s) if s.eq_ignore_ascii_case("ROCKET BODY") => DebrisClass::RocketBodies,
            Some(s) if s.eq_ignore_ascii_case("DEBRIS") => DebrisClass::FragmentationDebris,
            _ => DebrisClass::MissionDebris,
        }
    }

    /// Human-readable label used in the report and the plot legend.
    pub fn label(self) -> &'static str {
        match self {
            DebrisClass::Spacecraft => "Spacecraft",
            DebrisClass::RocketBodies => "Rocket Bodies",
            DebrisClass::MissionDebris => "Mission Debris",
            DebrisClass::FragmentationDebris => "Fragmentation Debris",
        }
    }
}

impl fmt::Display for DebrisClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// CatalogRecord – one raw CSV row
// ---------------------------------------------------------------------------

/// One raw row of the satellite catalog.  Columns are matched by header
/// name in any order; extra columns are ignored.  Distances are in km:
/// the semimajor axis is measured from the Earth's center, apoapsis and
/// periapsis are altitudes above the surface.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "OBJECT_TYPE")]
    pub object_type: Option<String>,
    #[serde(rename = "SEMIMAJOR_AXIS")]
    pub semimajor_axis: Option<f64>,
    #[serde(rename = "APOAPSIS")]
    pub apoapsis: Option<f64>,
    #[serde(rename = "PERIAPSIS")]
    pub periapsis: Option<f64>,
}

// ---------------------------------------------------------------------------
// DebrisObject / DebrisDataset – derived rows after filtering
// ---------------------------------------------------------------------------

/// A catalog row that survived derivation: a usable altitude plus its class.
#[derive(Debug, Clone, Copy)]
pub struct DebrisObject {
    pub altitude_km: f64,
    pub class: DebrisClass,
}

/// The filtered dataset.  Survivors keep their input order, though the
/// histogram output does not depend on it.
#[derive(Debug, Clone, Default)]
pub struct DebrisDataset {
    pub objects: Vec<DebrisObject>,
}

impl DebrisDataset {
    /// Derive altitude and class per record, dropping rows without a
    /// usable altitude.
    pub fn from_records(records: impl IntoIterator<Item = CatalogRecord>) -> Self {
        let objects = records
            .into_iter()
            .filter_map(|rec| {
                let altitude_km =
                    derive::altitude_km(rec.semimajor_axis, rec.apoapsis, rec.periapsis)?;
                if !derive::plausible_altitude(altitude_km) {
                    return None;
                }
                Some(DebrisObject {
                    altitude_km,
                    class: DebrisClass::from_object_type(rec.object_type.as_deref()),
                })
            })
            .collect();
        DebrisDataset { objects }
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Counts per class, in order of first encounter in the dataset.
    pub fn class_breakdown(&self) -> Vec<(DebrisClass, usize)> {
        let mut breakdown: Vec<(DebrisClass, usize)> = Vec::new();
        for obj in &self.objects {
            match breakdown.iter_mut().find(|(c, _)| *c == obj.class) {
                Some((_, n)) => *n += 1,
                None => breakdown.push((obj.class, 1)),
            }
        }
        breakdown
    }
}
