use super::prelude::*;
use crate::{
    gateways::short_link::{ResolutionFailed, ShortLinkGateway},
    util::map_url::{self, MapUrlKind},
};

/// A URL that might contain the coordinate of a GPS link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpsUrlCandidate {
    /// Final URL after following the redirects
    Resolved(String),
    /// The link as it has been provided
    Original(String),
}

impl GpsUrlCandidate {
    pub fn url(&self) -> &str {
        match self {
            Self::Resolved(url) | Self::Original(url) => url,
        }
    }
}

/// The URLs to search for a coordinate in the order they are tried.
///
/// A failed resolution is replaced by the original URL.
pub fn gps_url_candidates(
    gps_url: &str,
    resolution: std::result::Result<String, ResolutionFailed>,
) -> Vec<GpsUrlCandidate> {
    let resolved = match resolution {
        Ok(resolved) => resolved,
        Err(err) => {
            log::warn!("Failed to resolve GPS URL, using the original: {err}");
            gps_url.to_owned()
        }
    };
    vec![
        GpsUrlCandidate::Resolved(resolved),
        GpsUrlCandidate::Original(gps_url.to_owned()),
    ]
}

pub fn locate_in_candidates(candidates: &[GpsUrlCandidate]) -> Option<Coordinate> {
    candidates.iter().find_map(|candidate| {
        let pos = map_url::extract_lat_lng_from_url(candidate.url());
        if let Some(pos) = pos {
            log::debug!("Found coordinate {pos} in {candidate:?}");
        }
        pos
    })
}

/// Determine the coordinate of a (possibly shortened) map link.
pub async fn locate_by_gps_url<G>(gateway: &G, gps_url: &str) -> Result<Coordinate>
where
    G: ShortLinkGateway + ?Sized,
{
    if map_url::classify(gps_url) == MapUrlKind::ShortLink {
        log::debug!("Resolving short link {gps_url}");
    }
    let resolution = gateway.resolve_short_url(gps_url).await;
    let candidates = gps_url_candidates(gps_url, resolution);
    locate_in_candidates(&candidates).ok_or(Error::CoordinatesNotFound)
}
