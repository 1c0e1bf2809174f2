//! Coordinates embedded in map links.
//!
//! Map providers encode a position in different places of a link.
//! The rules below are tried in a fixed order and the first pair
//! that denotes a valid coordinate wins.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::entities::Coordinate;

const SHORT_LINK_HOSTS: &[&str] = &["maps.app.goo.gl", "goo.gl"];

lazy_static! {
    static ref AT_SEGMENT: Regex =
        Regex::new(r"@([-+]?\d+(?:\.\d+)?),([-+]?\d+(?:\.\d+)?)").unwrap();
    static ref QUERY_PARAM: Regex =
        Regex::new(r"(?:^|[?&#;])(?:q|query)=([-+]?\d+(?:\.\d+)?)\s*,\s*([-+]?\d+(?:\.\d+)?)")
            .unwrap();
    static ref LL_PARAM: Regex =
        Regex::new(r"(?:^|[?&#;])ll=([-+]?\d+(?:\.\d+)?)\s*,\s*([-+]?\d+(?:\.\d+)?)").unwrap();
    static ref BARE_PAIR: Regex =
        Regex::new(r"([-+]?\d+(?:\.\d+)?)\s*,\s*([-+]?\d+(?:\.\d+)?)").unwrap();
    static ref ENCODED_COMMA: Regex = Regex::new(r"(?i)%2C").unwrap();
    static ref ENCODED_SPACE: Regex = Regex::new(r"%20").unwrap();
    static ref ENCODED_AT: Regex = Regex::new(r"%40").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRule {
    /// `.../@<lat>,<lng>,15z`
    AtSegment,
    /// `?q=<lat>,<lng>` or `?query=<lat>,<lng>`
    QueryParam,
    /// `?ll=<lat>,<lng>`
    LegacyLl,
    /// Any other `<lat>,<lng>` pair
    BarePair,
}

impl ExtractionRule {
    /// All rules by descending priority.
    pub const ALL: [Self; 4] = [
        Self::AtSegment,
        Self::QueryParam,
        Self::LegacyLl,
        Self::BarePair,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            Self::AtSegment => &AT_SEGMENT,
            Self::QueryParam => &QUERY_PARAM,
            Self::LegacyLl => &LL_PARAM,
            Self::BarePair => &BARE_PAIR,
        }
    }

    fn first_valid_match(self, url: &str) -> Option<Coordinate> {
        let regex = self.regex();
        let mut start = 0;
        while let Some(caps) = regex.captures_at(url, start) {
            let (lat, lng) = (caps.get(1)?, caps.get(2)?);
            let accepted = self != Self::BarePair || is_delimited(url, lat.start(), lng.end());
            if accepted {
                if let Some(pos) = parse_lat_lng(lat.as_str(), lng.as_str()) {
                    return Some(pos);
                }
            }
            // Bare pairs may overlap: "200,10,20" contains "10,20".
            start = match self {
                Self::BarePair => lng.start(),
                _ => caps.get(0)?.end(),
            };
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapUrlKind {
    ShortLink,
    FullLink(ExtractionRule),
    Unrecognized,
}

pub fn classify(url: &str) -> MapUrlKind {
    if is_short_link(url) {
        return MapUrlKind::ShortLink;
    }
    match extract_lat_lng_with_rule(url) {
        Some((rule, _)) => MapUrlKind::FullLink(rule),
        None => MapUrlKind::Unrecognized,
    }
}

pub fn is_short_link(url: &str) -> bool {
    Url::parse(url.trim())
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| SHORT_LINK_HOSTS.contains(&host.as_str()))
}

/// Extract the coordinate of a map link.
///
/// Returns `None` if no rule matches a valid coordinate.
pub fn extract_lat_lng_from_url(url: &str) -> Option<Coordinate> {
    extract_lat_lng_with_rule(url).map(|(_, pos)| pos)
}

pub fn extract_lat_lng_with_rule(url: &str) -> Option<(ExtractionRule, Coordinate)> {
    let url = decode_separators(url);
    ExtractionRule::ALL
        .into_iter()
        .find_map(|rule| rule.first_valid_match(&url).map(|pos| (rule, pos)))
}

fn decode_separators(url: &str) -> String {
    let url = ENCODED_COMMA.replace_all(url, ",");
    let url = ENCODED_AT.replace_all(&url, "@");
    ENCODED_SPACE.replace_all(&url, " ").into_owned()
}

fn parse_lat_lng(lat: &str, lng: &str) -> Option<Coordinate> {
    let lat = lat.parse::<f64>().ok()?;
    let lng = lng.parse::<f64>().ok()?;
    Coordinate::try_from_lat_lng_deg(lat, lng)
}

// Rejects pairs that are part of a larger token, e.g. "v1.2,3" or "88.36,15z".
fn is_delimited(s: &str, start: usize, end: usize) -> bool {
    let is_token_char = |c: char| c.is_ascii_alphanumeric() || c == '.';
    let before = s[..start].chars().next_back();
    let after = s[end..].chars().next();
    !before.is_some_and(is_token_char) && !after.is_some_and(is_token_char)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn lat_lng(url: &str) -> Option<(f64, f64)> {
        extract_lat_lng_from_url(url).map(Coordinate::to_lat_lng_deg)
    }

    #[test]
    fn extract_from_at_segment() {
        assert_eq!(
            lat_lng("https://www.google.com/maps/place/Eden+Gardens/@22.5646,88.3433,17z/data=!3m1"),
            Some((22.5646, 88.3433))
        );
        assert_eq!(
            lat_lng("https://www.google.com/maps/@-33.8688197,151.2092955,12z"),
            Some((-33.8688197, 151.2092955))
        );
    }

    #[test]
    fn extract_from_query_param() {
        assert_eq!(
            lat_lng("https://maps.google.com/?q=22.5726,88.3639"),
            Some((22.5726, 88.3639))
        );
        assert_eq!(
            lat_lng("https://www.google.com/maps/search/?api=1&query=28.6139,77.2090"),
            Some((28.6139, 77.209))
        );
        assert_eq!(
            lat_lng("https://maps.google.com/maps?hl=en&q=22.5726,%2088.3639"),
            Some((22.5726, 88.3639))
        );
    }

    #[test]
    fn extract_from_legacy_ll_param() {
        assert_eq!(
            lat_lng("https://maps.google.com/maps?ll=19.0760,72.8777&z=14"),
            Some((19.076, 72.8777))
        );
    }

    #[test]
    fn extract_from_bare_pair() {
        assert_eq!(
            lat_lng("https://example.com/share/12.9716,77.5946"),
            Some((12.9716, 77.5946))
        );
        assert_eq!(lat_lng("geo:12.9716,77.5946"), Some((12.9716, 77.5946)));
    }

    #[test]
    fn decode_percent_encoded_commas() {
        assert_eq!(
            lat_lng("https://www.google.com/maps/search/?api=1&query=22.5726%2C88.3639"),
            Some((22.5726, 88.3639))
        );
        assert_eq!(
            lat_lng("https://maps.google.com/?ll=22.5726%2c88.3639"),
            Some((22.5726, 88.3639))
        );
    }

    #[test]
    fn decode_percent_encoded_at_segments() {
        let url = "https://consent.google.com/?continue=https://www.google.com/maps/place/Arena/%4022.5726%2C88.3639%2C15z";
        assert_eq!(
            extract_lat_lng_with_rule(url).map(|(rule, _)| rule),
            Some(ExtractionRule::AtSegment)
        );
        assert_eq!(lat_lng(url), Some((22.5726, 88.3639)));
    }

    #[test]
    fn highest_priority_rule_wins() {
        let url = "https://www.google.com/maps/place/@10.5,20.5,15z?q=30.5,40.5&ll=50.5,60.5";
        assert_eq!(
            extract_lat_lng_with_rule(url).map(|(r, p)| (r, p.to_lat_lng_deg())),
            Some((ExtractionRule::AtSegment, (10.5, 20.5)))
        );
        let url = "https://maps.google.com/?ll=50.5,60.5&q=30.5,40.5";
        assert_eq!(lat_lng(url), Some((30.5, 40.5)));
        let url = "https://maps.google.com/1.5,2.5?ll=50.5,60.5";
        assert_eq!(lat_lng(url), Some((50.5, 60.5)));
    }

    #[test]
    fn reject_out_of_range_and_try_next_rule() {
        assert_eq!(
            lat_lng("https://www.google.com/maps/@200.0,88.0,15z?q=22.5,88.3"),
            Some((22.5, 88.3))
        );
        assert_eq!(lat_lng("https://maps.google.com/?q=95.0,10.0"), None);
        assert_eq!(lat_lng("https://maps.google.com/?ll=10.0,190.0"), None);
        // The valid pair overlaps with the rejected one
        assert_eq!(lat_lng("https://example.com/200.0,10.0,20.0"), Some((10.0, 20.0)));
    }

    #[test]
    fn ignore_pairs_that_are_part_of_other_tokens() {
        assert_eq!(lat_lng("https://example.com/lib-v1.2,3/index.html"), None);
        assert_eq!(lat_lng("https://example.com/page,15z"), None);
        assert_eq!(lat_lng("https://example.com/a1.2.3,4"), None);
    }

    #[test]
    fn keep_full_precision() {
        let (lat, lng) = lat_lng("https://www.google.com/maps/@22.572646123456789,88.363895987654321,15z")
            .unwrap();
        assert_eq!(lat, "22.572646123456789".parse::<f64>().unwrap());
        assert_eq!(lng, "88.363895987654321".parse::<f64>().unwrap());
    }

    #[test]
    fn no_match_is_not_an_error() {
        assert_eq!(lat_lng(""), None);
        assert_eq!(lat_lng("not a url"), None);
        assert_eq!(lat_lng("https://maps.app.goo.gl/AbCdEfGh12345"), None);
        assert_eq!(lat_lng("https://www.google.com/maps/place/ChIJ1234?cid=987"), None);
        assert_eq!(lat_lng("@,,@@q=&ll=%2C%2c,"), None);
    }

    #[test]
    fn valid_coordinates_survive_every_url_shape() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let lat: f64 = rng.gen_range(-90.0..=90.0);
            let lng: f64 = rng.gen_range(-180.0..=180.0);
            let shapes = [
                format!("https://www.google.com/maps/place/Turf/@{lat},{lng},15z"),
                format!("https://maps.google.com/?q={lat},{lng}"),
                format!("https://www.google.com/maps/search/?api=1&query={lat},{lng}"),
                format!("https://maps.google.com/maps?ll={lat},{lng}&z=10"),
                format!("https://example.com/pin/{lat},{lng}"),
            ];
            for url in shapes {
                let (x, y) = lat_lng(&url).unwrap();
                assert!((x - lat).abs() <= 1e-9, "{url}");
                assert!((y - lng).abs() <= 1e-9, "{url}");
            }
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        let urls = [
            "https://www.google.com/maps/@22.5726,88.3639,15z",
            "https://maps.google.com/?q=95.0,10.0",
            "nothing here",
        ];
        for url in urls {
            assert_eq!(extract_lat_lng_from_url(url), extract_lat_lng_from_url(url));
        }
    }

    #[test]
    fn detect_short_links() {
        assert!(is_short_link("https://maps.app.goo.gl/AbCdEfGh12345"));
        assert!(is_short_link(" https://goo.gl/maps/xyz "));
        assert!(is_short_link("https://MAPS.APP.GOO.GL/AbC"));
        assert!(!is_short_link("https://www.google.com/maps/@22.5,88.3,15z"));
        assert!(!is_short_link("maps.app.goo.gl/AbC"));
        assert!(!is_short_link(""));
    }

    #[test]
    fn classify_map_urls() {
        assert_eq!(classify("https://maps.app.goo.gl/AbC"), MapUrlKind::ShortLink);
        assert_eq!(
            classify("https://maps.google.com/?ll=1.5,2.5"),
            MapUrlKind::FullLink(ExtractionRule::LegacyLl)
        );
        assert_eq!(classify("https://example.com/"), MapUrlKind::Unrecognized);
    }
}
