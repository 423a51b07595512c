use mission_sunstate::sun::{
    DEFAULT_SUN_STATE, ELEVATION_DAY, ELEVATION_TWILIGHT, SunState, calculate_sun_elevation,
    classify, evaluate, get_sun_state, normalize_theatre, parse_mission_datetime,
    theatre_latitude,
};
use proptest::prelude::*;

/// Field tuples that always form a real calendar date and time
fn valid_fields_strategy() -> impl Strategy<Value = (i32, u32, u32, u32, u32, u32)> {
    (1..=9999i32, 1..=12u32, 1..=28u32, 0..24u32, 0..60u32, 0..60u32)
}

fn theatre_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Caucasus".to_string()),
        Just("Persian Gulf".to_string()),
        Just("Syria".to_string()),
        Just("Nevada".to_string()),
        Just("Normandy".to_string()),
        Just("Sinai".to_string()),
        Just("MarianaIslands".to_string()),
        Just("South_Atlantic".to_string()),
        Just("Kola".to_string()),
        Just("Afghanistan".to_string()),
        "[A-Za-z _-]{0,24}",
    ]
}

#[cfg(test)]
mod timestamp_tests {
    use super::*;

    proptest! {
        /// Any real date and time written in the mission layout parses back to the same fields
        #[test]
        fn test_valid_fields_parse(
            (year, month, day, hour, minute, second) in valid_fields_strategy()
        ) {
            let raw = format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}");
            let ts = parse_mission_datetime(&raw);
            prop_assert!(ts.is_some(), "Failed to parse {}", raw);

            let ts = ts.unwrap();
            prop_assert_eq!(
                (ts.year(), ts.month(), ts.day(), ts.hour(), ts.minute(), ts.second()),
                (year, month, day, hour, minute, second)
            );
        }

        /// Display output is accepted by the parser unchanged
        #[test]
        fn test_display_reparses(
            (year, month, day, hour, minute, _) in valid_fields_strategy()
        ) {
            let raw = format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}");
            let ts = parse_mission_datetime(&raw).unwrap();
            prop_assert_eq!(parse_mission_datetime(&ts.to_string()), Some(ts));
        }

        /// Out-of-range hours never parse
        #[test]
        fn test_invalid_hour_rejected(hour in 24..100u32, minute in 0..60u32) {
            let raw = format!("2025-06-01 {hour:02}:{minute:02}");
            prop_assert!(parse_mission_datetime(&raw).is_none());
        }

        /// Arbitrary text never panics the parser
        #[test]
        fn test_parser_total(raw in ".{0,40}") {
            let _ = parse_mission_datetime(&raw);
        }
    }
}

#[cfg(test)]
mod theatre_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_normalization_idempotent(name in "[A-Za-z _-]{0,32}") {
            let once = normalize_theatre(&name);
            prop_assert_eq!(normalize_theatre(&once), once.clone());
            prop_assert!(!once.contains(' ') && !once.contains('_') && !once.contains('-'));
        }

        /// Separators and case never change the resolved latitude
        #[test]
        fn test_latitude_ignores_separators(
            name in theatre_strategy(),
            sep in prop_oneof![Just(" "), Just("_"), Just("-")]
        ) {
            let mangled: String = name
                .chars()
                .flat_map(|c| [c.to_ascii_uppercase().to_string(), sep.to_string()])
                .collect();
            prop_assert_eq!(theatre_latitude(&mangled), theatre_latitude(&name));
        }
    }
}

#[cfg(test)]
mod elevation_tests {
    use super::*;

    proptest! {
        /// Elevation stays a real angle for any date, time and latitude
        #[test]
        fn test_elevation_in_range(
            (year, month, day, hour, minute, second) in valid_fields_strategy(),
            latitude in -90.0..=90.0f64
        ) {
            let raw = format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}");
            let ts = parse_mission_datetime(&raw).unwrap();
            let elevation = calculate_sun_elevation(&ts, latitude);

            prop_assert!(elevation.is_finite());
            prop_assert!((-90.0..=90.0).contains(&elevation),
                "Elevation {} out of range for {} at latitude {}", elevation, raw, latitude);
        }

        /// Same inputs, bit-identical output
        #[test]
        fn test_elevation_deterministic(
            (year, month, day, hour, minute, second) in valid_fields_strategy(),
            latitude in -90.0..=90.0f64
        ) {
            let raw = format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}");
            let ts = parse_mission_datetime(&raw).unwrap();
            let first = calculate_sun_elevation(&ts, latitude);
            let second = calculate_sun_elevation(&ts, latitude);
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }
    }
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    proptest! {
        /// The state always agrees with the elevation thresholds
        #[test]
        fn test_classify_matches_thresholds(
            elevation in -90.0..=90.0f64,
            hour in 0..24u32
        ) {
            let expected = if elevation > ELEVATION_DAY {
                SunState::Day
            } else if elevation > ELEVATION_TWILIGHT {
                if hour < 12 { SunState::Dawn } else { SunState::Dusk }
            } else {
                SunState::Night
            };
            prop_assert_eq!(classify(elevation, hour).state, expected);
        }

        /// The bundle fields always belong to the reported state
        #[test]
        fn test_bundle_consistent(elevation in -90.0..=90.0f64, hour in 0..24u32) {
            let result = classify(elevation, hour);
            prop_assert_eq!(result, result.state.result());
        }

        /// Any input yields a badge; unparsable clocks give the default
        #[test]
        fn test_get_sun_state_total(raw in ".{0,40}", theatre in theatre_strategy()) {
            let result = get_sun_state(Some(&raw), &theatre);
            if parse_mission_datetime(&raw).is_none() {
                prop_assert_eq!(result, DEFAULT_SUN_STATE);
            }
        }

        /// The diagnostic report and the badge never disagree
        #[test]
        fn test_evaluate_agrees_with_badge(
            (year, month, day, hour, minute, second) in valid_fields_strategy(),
            theatre in theatre_strategy()
        ) {
            let raw = format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}");
            let report = evaluate(Some(&raw), &theatre).unwrap();
            prop_assert_eq!(report.result, get_sun_state(Some(&raw), &theatre));
            prop_assert_eq!(report.latitude, theatre_latitude(&theatre));
        }
    }
}
