//! Elemental compatibility between two charts.
//!
//! Compares the sun, moon and rising elements of two independently
//! resolved charts. Works the same on full and sun-sign-only charts.

use crate::chart::BirthChartResult;
use crate::western::{Element, ZodiacSign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Harmony {
    /// Same element
    Harmonious,
    /// Fire with air, earth with water
    Complementary,
    Challenging,
}

impl Harmony {
    pub fn between(a: Element, b: Element) -> Self {
        if a == b {
            Harmony::Harmonious
        } else if a.complements(b) {
            Harmony::Complementary
        } else {
            Harmony::Challenging
        }
    }

    pub fn points(self) -> u8 {
        match self {
            Harmony::Harmonious => 2,
            Harmony::Complementary => 1,
            Harmony::Challenging => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementComparison {
    pub placement: String,
    pub first: ZodiacSign,
    pub second: ZodiacSign,
    pub harmony: Harmony,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementalComparison {
    pub pairs: Vec<PlacementComparison>,
    pub score: u8,
    pub max_score: u8,
    pub first_dominant: Element,
    pub second_dominant: Element,
}

const ELEMENT_ORDER: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

fn core_signs(chart: &BirthChartResult) -> [(&'static str, ZodiacSign); 3] {
    [
        ("sun", chart.sun),
        ("moon", chart.moon),
        ("rising", chart.rising),
    ]
}

/// Most frequent element across sun, moon and rising. Ties go to the element
/// listed first in fire, earth, air, water order.
pub fn dominant_element(chart: &BirthChartResult) -> Element {
    let signs = core_signs(chart);
    let count = |element: Element| signs.iter().filter(|(_, s)| s.element() == element).count();
    ELEMENT_ORDER
        .iter()
        .copied()
        .fold((Element::Fire, 0), |best, element| {
            let n = count(element);
            if n > best.1 {
                (element, n)
            } else {
                best
            }
        })
        .0
}

pub fn compare(first: &BirthChartResult, second: &BirthChartResult) -> ElementalComparison {
    let pairs: Vec<PlacementComparison> = core_signs(first)
        .iter()
        .zip(core_signs(second).iter())
        .map(|((placement, a), (_, b))| PlacementComparison {
            placement: placement.to_string(),
            first: *a,
            second: *b,
            harmony: Harmony::between(a.element(), b.element()),
        })
        .collect();

    let score = pairs.iter().map(|p| p.harmony.points()).sum();
    let max_score = pairs.len() as u8 * Harmony::Harmonious.points();

    ElementalComparison {
        pairs,
        score,
        max_score,
        first_dominant: dominant_element(first),
        second_dominant: dominant_element(second),
    }
}
