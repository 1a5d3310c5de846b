//! Per-section quality grade extraction.

use crate::record::SectionGrades;
use crate::structural;

/// The fixed section headers graded on a store page, paired with the record
/// field each one fills.
const SECTIONS: [&str; 5] = [
    "Shipping",
    "Returns",
    "Competitive pricing",
    "Payment options",
    "Website quality",
];

/// Looks up the grade for every fixed section, first in the anchored segment
/// and then in the whole document for any section still empty.
#[must_use]
pub fn section_grades(segment_html: &str, full_html: &str) -> SectionGrades {
    let mut grades = SECTIONS.map(|header| {
        let grade = structural::grade_for(segment_html, header);
        if grade.is_empty() {
            structural::grade_for(full_html, header)
        } else {
            grade
        }
    });

    SectionGrades {
        shipping: std::mem::take(&mut grades[0]),
        returns: std::mem::take(&mut grades[1]),
        pricing: std::mem::take(&mut grades[2]),
        payments: std::mem::take(&mut grades[3]),
        website: std::mem::take(&mut grades[4]),
    }
}
