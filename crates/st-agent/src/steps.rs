//! Five-step itinerary attached to every route option.

use st_core::RandomSource;

/// Line numbers for the first bus leg.
const FIRST_LINE: (u32, u32) = (1, 14);
/// Line numbers for the connecting bus leg.
const SECOND_LINE: (u32, u32) = (20, 34);

/// Build the walking / bus / transfer / bus / walking itinerary.
///
/// Draws two integers: the first bus line, then the connecting one.
pub fn itinerary(origin: &str, destination: &str, rng: &mut dyn RandomSource) -> Vec<String> {
    let first = rng.int_inclusive(FIRST_LINE.0, FIRST_LINE.1);
    let second = rng.int_inclusive(SECOND_LINE.0, SECOND_LINE.1);
    vec![
        format!("Walk to {origin} station"),
        format!("Take bus line {first} towards city center"),
        format!("Transfer at Central Station to bus line {second}"),
        format!("Get off at {destination} station"),
        "Walk to your destination".to_string(),
    ]
}
