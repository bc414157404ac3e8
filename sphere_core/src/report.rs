//! # Console Text
//!
//! Every line the calculator prints, in one place. Numeric lines take the
//! number of decimals from [`SessionSettings`](crate::settings::SessionSettings).

use crate::calculations::{Averages, SegmentInput, SegmentResult};
use crate::settings::SessionSettings;

pub const RADIUS_PROMPT: &str = "What is the radius of the sphere (R)?";
pub const TOP_HEIGHT_PROMPT: &str = "What is the height of the top area of the spherical segment (ha)?";
pub const BOTTOM_HEIGHT_PROMPT: &str = "What is the height of the bottom area of the spherical segment (hb)?";
pub const INVALID_INPUT: &str = "Invalid Input.";
pub const AVERAGES_HEADER: &str = "Total average results:";

/// `How many spherical segments you want to evaluate [2-10]?` for the default bounds.
pub fn count_prompt(settings: &SessionSettings) -> String {
    format!(
        "How many spherical segments you want to evaluate [{}-{}]?",
        settings.min_segments, settings.max_segments
    )
}

pub fn segment_header(index: u32) -> String {
    format!("Obtaining data for spherical segment number {}", index)
}

/// Echo of the three measurements as typed, before validation.
pub fn entered_data(input: &SegmentInput, decimals: usize) -> String {
    format!(
        "Entered data: R = {:.*} ha = {:.*} hb = {:.*}.",
        decimals, input.radius, decimals, input.top_height, decimals, input.bottom_height
    )
}

pub fn segment_totals(result: &SegmentResult, decimals: usize) -> String {
    format!(
        "Total Surface Area = {:.*} Volume = {:.*}.",
        decimals, result.total_area, decimals, result.volume
    )
}

pub fn average_totals(averages: &Averages, decimals: usize) -> String {
    format!(
        "Average Surface Area = {:.*} Average Volume = {:.*}.",
        decimals, averages.area, decimals, averages.volume
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;

    #[test]
    fn test_count_prompt() {
        assert_eq!(
            count_prompt(&SessionSettings::default()),
            "How many spherical segments you want to evaluate [2-10]?"
        );
    }

    #[test]
    fn test_entered_data_rounds_to_two_places() {
        let input = SegmentInput::new(5.0, 4.126, 3.0);
        assert_eq!(entered_data(&input, 2), "Entered data: R = 5.00 ha = 4.13 hb = 3.00.");
    }

    #[test]
    fn test_segment_totals() {
        let result = calculate(&SegmentInput::new(5.0, 4.0, 3.0)).unwrap();
        assert_eq!(segment_totals(&result, 2), "Total Surface Area = 109.96 Volume = 39.79.");
    }

    #[test]
    fn test_average_totals() {
        let averages = Averages {
            area: 12.3456,
            volume: 0.004,
        };
        assert_eq!(
            average_totals(&averages, 2),
            "Average Surface Area = 12.35 Average Volume = 0.00."
        );
    }
}
