// Fixture builders shared by unit tests.

use crate::player::{DetailedAttributes, PlayerRecord, Position, SummaryRatings, Trend};

/// A plain record with balanced 60-rated attributes and no detail block.
pub fn record(id: &str, pos: &str, overall: u8) -> PlayerRecord {
    PlayerRecord {
        id: id.into(),
        name: format!("Player {id}"),
        age: 25,
        position: Position::from_code(pos),
        nationality: "FRA".into(),
        club: "REAL_MADRID".into(),
        overall,
        ratings: ratings([60, 60, 60, 60, 60, 60]),
        detail: None,
        market_value: 50.0,
        salary: Some(10.0),
        contract_end: 2028,
        trend: Trend::Neutral,
    }
}

/// Summary ratings from an array in PAC, SHO, PAS, DRI, DEF, PHY order.
pub fn ratings(v: [u8; 6]) -> SummaryRatings {
    SummaryRatings {
        pace: v[0],
        shooting: v[1],
        passing: v[2],
        dribbling: v[3],
        defense: v[4],
        physical: v[5],
    }
}

/// A detail block with every sub-attribute set to `value`.
pub fn uniform_detail(value: u8) -> DetailedAttributes {
    let v = Some(value);
    DetailedAttributes {
        acceleration: v,
        sprint_speed: v,
        positioning: v,
        finishing: v,
        shot_power: v,
        long_shots: v,
        vision: v,
        crossing: v,
        short_pass: v,
        long_pass: v,
        agility: v,
        balance: v,
        ball_control: v,
        dribbling: v,
        interceptions: v,
        def_aware: v,
        stand_tackle: v,
        slide_tackle: v,
        jumping: v,
        stamina: v,
        strength: v,
        aggression: v,
        heading_acc: v,
    }
}

pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
