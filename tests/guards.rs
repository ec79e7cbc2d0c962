mod common;

use nanoserde::DeJson;
use salat_times::{AdjustingMethod, CalculationParameters, PrayerTimes};

use common::{date, hours_after, mid_latitude, midnight, plain_params, StubGeometry};

#[derive(Debug, DeJson)]
struct Scenario {
    name: String,
    sunrise: f64,
    sunset: f64,
    fajr_crossing: Option<f64>,
    isha_crossing: Option<f64>,
    rule: String,
    expected_fajr: f64,
    expected_isha: f64,
}

fn rule(name: &str) -> AdjustingMethod {
    match name {
        "MidNight" => AdjustingMethod::MidNight,
        "OneSeventh" => AdjustingMethod::OneSeventh,
        "AngleBased" => AdjustingMethod::AngleBased,
        other => panic!("unknown rule {other}"),
    }
}

#[test]
fn test_night_guard_scenarios() {
    let scenarios: Vec<Scenario> =
        DeJson::deserialize_json(include_str!("fixtures/night_guards.json")).unwrap();
    assert!(!scenarios.is_empty());

    let day = date(2024, 3, 10);
    for scenario in scenarios {
        let mut geometry = StubGeometry {
            sunrise: scenario.sunrise,
            sunset: scenario.sunset,
            ..StubGeometry::default()
        };
        if let Some(hours) = scenario.fajr_crossing {
            geometry = geometry.crossing(-18.0, false, hours);
        }
        if let Some(hours) = scenario.isha_crossing {
            geometry = geometry.crossing(-17.0, true, hours);
        }
        let params = CalculationParameters {
            high_latitude_rule: Some(rule(&scenario.rule)),
            ..plain_params()
        };

        let times = PrayerTimes::calculate(&geometry, mid_latitude(), day, &params, false).unwrap();

        for (actual, expected, prayer) in [
            (times.fajr(), scenario.expected_fajr, "fajr"),
            (times.isha(), scenario.expected_isha, "isha"),
        ] {
            let expected = hours_after(midnight(day), expected);
            let diff = (actual.unwrap() - expected).num_milliseconds().abs();
            assert!(diff <= 1000, "{}: {prayer} off by {diff}ms", scenario.name);
        }
    }
}
