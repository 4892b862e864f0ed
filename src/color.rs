use plotters::style::RGBColor;

use crate::data::model::DebrisClass;

// ---------------------------------------------------------------------------
// Fixed category palette
// ---------------------------------------------------------------------------

/// Display color for each debris class, shared by the bars and the legend.
/// The mapping is fixed so the same class always gets the same color,
/// regardless of which classes a given catalog contains.
pub fn class_color(class: DebrisClass) -> RGBColor {
    match class {
        DebrisClass::Spacecraft => RGBColor(0x2E, 0x86, 0xAB),
        DebrisClass::RocketBodies => RGBColor(0xA2, 0x3B, 0x72),
        DebrisClass::MissionDebris => RGBColor(0xF1, 0x8F, 0x01),
        DebrisClass::FragmentationDebris => RGBColor(0xC7, 0x3E, 0x1D),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_has_a_distinct_color() {
        let colors: Vec<RGBColor> = DebrisClass::STACKING_ORDER
            .iter()
            .map(|&c| class_color(c))
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
