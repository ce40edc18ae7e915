//! Conversion from Google Maps DTOs to domain types.

use crate::domain::{Coordinate, Hop, Leg, TransitSegment, TravelMode};
use crate::provider::PlaceCandidate;

use super::error::MapsError;
use super::types::{
    DirectionsResponse, DirectionsStep, GeocodeResponse, PlacesResponse, TextValue,
    TransitDetails,
};

/// Convert a directions response into the leg for `hop`.
///
/// Only the first leg of the first route is used. For transit requests each
/// `TRANSIT` step becomes one [`TransitSegment`], in step order.
pub fn convert_directions(
    response: DirectionsResponse,
    hop: &Hop,
    mode: TravelMode,
) -> Result<Leg, MapsError> {
    require_ok(&response.status, response.error_message)?;

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(MapsError::Empty("routes"))?;
    let leg = route
        .legs
        .into_iter()
        .next()
        .ok_or(MapsError::Empty("legs"))?;

    let fare_text = route
        .fare
        .and_then(|f| f.text)
        .or_else(|| leg.fare.and_then(|f| f.text));
    let polyline = route.overview_polyline.and_then(|p| p.points);
    let steps = leg.steps.iter().map(describe_step).collect();
    let segments = if mode == TravelMode::Transit {
        leg.steps.iter().filter_map(transit_segment).collect()
    } else {
        Vec::new()
    };

    Ok(Leg::new(
        mode,
        hop.clone(),
        quantity(leg.distance.as_ref()),
        quantity(leg.duration.as_ref()),
    )
    .with_polyline(polyline)
    .with_steps(steps)
    .with_fare_text(fare_text)
    .with_transit_segments(segments))
}

/// Convert a nearby-search response into raw place candidates.
///
/// `ZERO_RESULTS` is a successful empty answer.
pub fn convert_places(response: PlacesResponse) -> Result<Vec<PlaceCandidate>, MapsError> {
    if response.status != "ZERO_RESULTS" {
        require_ok(&response.status, response.error_message)?;
    }

    Ok(response
        .results
        .into_iter()
        .map(|place| {
            let location = place.geometry.and_then(|g| g.location);
            PlaceCandidate {
                name: place.name,
                place_id: place.place_id,
                vicinity: place.vicinity,
                lat: location.as_ref().and_then(|l| l.lat),
                lng: location.as_ref().and_then(|l| l.lng),
            }
        })
        .collect())
}

/// Extract the first result's location from a geocoding response.
pub fn convert_geocode(response: GeocodeResponse) -> Result<Coordinate, MapsError> {
    require_ok(&response.status, response.error_message)?;

    let location = response
        .results
        .into_iter()
        .next()
        .and_then(|r| r.geometry)
        .and_then(|g| g.location)
        .ok_or(MapsError::Empty("results"))?;

    Coordinate::from_parts(location.lat, location.lng).ok_or(MapsError::Empty("location"))
}

/// Remove `<...>` markup from an instruction string.
///
/// An unterminated `<` is kept as text.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = &rest[open..];
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

fn require_ok(status: &str, message: Option<String>) -> Result<(), MapsError> {
    if status.eq_ignore_ascii_case("OK") {
        Ok(())
    } else {
        Err(MapsError::ApiStatus {
            status: status.to_string(),
            message,
        })
    }
}

fn quantity(value: Option<&TextValue>) -> u32 {
    value
        .and_then(|v| v.value)
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// `Walk to <b>Rajiv Chowk</b>` with `0.3 km` becomes `Walk to Rajiv Chowk (0.3 km)`.
fn describe_step(step: &DirectionsStep) -> String {
    let instruction = strip_html(step.html_instructions.as_deref().unwrap_or_default());
    match step.distance.as_ref().and_then(|d| d.text.as_deref()) {
        Some(distance) if !distance.is_empty() => format!("{instruction} ({distance})"),
        _ => instruction,
    }
}

fn transit_segment(step: &DirectionsStep) -> Option<TransitSegment> {
    let is_transit = step
        .travel_mode
        .as_deref()
        .is_some_and(|m| m.eq_ignore_ascii_case("TRANSIT"));
    if !is_transit {
        return None;
    }
    let details: &TransitDetails = step.transit_details.as_ref()?;
    let line = details.line.as_ref();
    let departure_stop = details.departure_stop.as_ref();

    Some(TransitSegment {
        line_name: line.and_then(|l| l.name.clone()),
        line_short_name: line.and_then(|l| l.short_name.clone()),
        trip_short_name: line.and_then(|l| l.trip_short_name.clone()),
        vehicle: line.and_then(|l| l.vehicle.as_ref()).and_then(|v| v.kind.clone()),
        agency: line
            .and_then(|l| l.agencies.first())
            .and_then(|a| a.name.clone()),
        departure_stop: departure_stop.and_then(|s| s.name.clone()),
        arrival_stop: details.arrival_stop.as_ref().and_then(|s| s.name.clone()),
        departure_time_text: details.departure_time.as_ref().and_then(|t| t.text.clone()),
        arrival_time_text: details.arrival_time.as_ref().and_then(|t| t.text.clone()),
        headsign: details.headsign.clone(),
        num_stops: details.num_stops.unwrap_or(0),
        stops: line
            .map(|l| l.stops.iter().filter_map(|s| s.name.clone()).collect())
            .unwrap_or_default(),
        platform: departure_stop
            .and_then(|s| s.platform.clone())
            .or_else(|| details.platform.clone()),
        polyline: step.polyline.as_ref().and_then(|p| p.points.clone()),
    })
}
