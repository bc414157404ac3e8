//! End-to-end sessions driven through in-memory input and output.

use std::f64::consts::PI;
use std::io::Cursor;

use sphere_core::{CalcError, Session, SessionSettings, SessionSummary};

fn run_script(script: &str) -> (Result<SessionSummary, CalcError>, String) {
    let mut output = Vec::new();
    let result = Session::new(Cursor::new(script), &mut output, SessionSettings::default())
        .and_then(|mut session| session.run());
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_two_segment_transcript() {
    let (result, text) = run_script("2\n5\n4\n3\n5 4 3\n");
    result.unwrap();

    let segment = |i: u32| {
        format!(
            "Obtaining data for spherical segment number {}\n\
             What is the radius of the sphere (R)?\n\
             What is the height of the top area of the spherical segment (ha)?\n\
             What is the height of the bottom area of the spherical segment (hb)?\n\
             Entered data: R = 5.00 ha = 4.00 hb = 3.00.\n\
             Total Surface Area = 109.96 Volume = 39.79.\n",
            i
        )
    };
    let expected = format!(
        "How many spherical segments you want to evaluate [2-10]?\n{}{}\
         Total average results:\n\
         Average Surface Area = 109.96 Average Volume = 39.79.\n",
        segment(1),
        segment(2)
    );
    assert_eq!(text, expected);
}

#[test]
fn test_averages_are_unrounded_sums() {
    let (result, text) = run_script("2\n5 4 3\n2 1.5 0.25\n");
    let summary = result.unwrap();

    let first = summary.segments[0].result;
    let second = summary.segments[1].result;
    assert_eq!(summary.totals.area, first.total_area + second.total_area);
    assert_eq!(summary.totals.volume, first.volume + second.volume);
    assert_eq!(summary.averages.area, summary.totals.area / 2.0);

    let line = format!(
        "Average Surface Area = {:.2} Average Volume = {:.2}.",
        (first.total_area + second.total_area) / 2.0,
        (first.volume + second.volume) / 2.0
    );
    assert!(text.contains(&line));
}

#[test]
fn test_recovers_from_every_kind_of_bad_input() {
    // bad counts, then ha > R, hb > ha, a negative radius and a non-number
    let script = "0\n12\nmany\n2\n5 6 3\n5 3 4\n-1 1 1\n5 four\n5 4 3\n3 3 0.0001\n";
    let (result, text) = run_script(script);
    let summary = result.unwrap();

    assert_eq!(summary.segment_count, 2);
    assert_eq!(text.matches("How many spherical segments").count(), 4);
    assert_eq!(text.matches("Invalid Input.").count(), 4);
    assert_eq!(summary.segments[0].input.top_height, 4.0);

    // nearly a hemisphere of radius 3
    let hemisphere = 2.0 / 3.0 * PI * 27.0;
    assert!((summary.segments[1].result.volume - hemisphere).abs() / hemisphere < 1e-3);
}

#[test]
fn test_non_utf8_tokens_are_reprompted() {
    let mut output = Vec::new();
    let script: &[u8] = b"\xff\n2\n5 \xe9\n5 4 3\n5 4 3\n";
    let summary = Session::new(Cursor::new(script), &mut output, SessionSettings::default())
        .unwrap()
        .run()
        .unwrap();
    let text = String::from_utf8(output).unwrap();

    assert_eq!(summary.segment_count, 2);
    assert_eq!(text.matches("How many spherical segments").count(), 2);
    assert_eq!(text.matches("Invalid Input.").count(), 1);
    assert!(text.ends_with("Average Surface Area = 109.96 Average Volume = 39.79.\n"));
}

#[test]
fn test_input_ending_early_reports_exhaustion() {
    let (result, text) = run_script("3\n5 4 3\n");
    assert_eq!(result.unwrap_err(), CalcError::input_exhausted("radius"));
    assert!(text.contains("Total Surface Area = 109.96 Volume = 39.79."));
    assert!(!text.contains("Total average results:"));
}

#[test]
fn test_custom_bounds_change_prompt() {
    let settings = SessionSettings {
        min_segments: 1,
        max_segments: 3,
        decimals: 3,
    };
    let mut output = Vec::new();
    let summary = Session::new(Cursor::new("4\n1\n5 4 3\n"), &mut output, settings)
        .unwrap()
        .run()
        .unwrap();
    let text = String::from_utf8(output).unwrap();

    assert_eq!(summary.segment_count, 1);
    assert_eq!(text.matches("evaluate [1-3]?").count(), 2);
    assert!(text.contains("Total Surface Area = 109.956 Volume = 39.794."));
}
