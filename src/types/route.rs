//! Route types

use serde::{Deserialize, Serialize};

/// Maneuver kind of a turn-by-turn instruction (GraphHopper sign codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionSign {
    Left,
    Right,
    Straight,
    Arrive,
    Roundabout,
    Other(i32),
}

impl From<i32> for InstructionSign {
    fn from(sign: i32) -> Self {
        match sign {
            -2 => InstructionSign::Left,
            2 => InstructionSign::Right,
            0 => InstructionSign::Straight,
            4 => InstructionSign::Arrive,
            6 => InstructionSign::Roundabout,
            other => InstructionSign::Other(other),
        }
    }
}

impl InstructionSign {
    pub const fn arrow(self) -> &'static str {
        match self {
            InstructionSign::Left => "←",
            InstructionSign::Right => "→",
            InstructionSign::Straight => "↑",
            InstructionSign::Arrive => "⚑",
            InstructionSign::Roundabout => "↻",
            InstructionSign::Other(_) => "•",
        }
    }
}

/// One turn-by-turn step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub text: String,
    /// Meters
    pub distance: f64,
    /// Milliseconds
    pub time: u64,
    pub sign: i32,
    #[serde(default, alias = "street_name")]
    pub street_name: String,
}

impl Instruction {
    pub fn maneuver(&self) -> InstructionSign {
        InstructionSign::from(self.sign)
    }
}

/// A routed path between two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePath {
    /// Travel time in seconds
    pub time_seconds: f64,
    /// Distance in meters
    pub distance_meters: f64,
    /// Decoded path as [lat, lng] pairs
    pub points: Vec<[f64; 2]>,
    pub instructions: Vec<Instruction>,
}

/// Travel time recorded for one evaluated candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTime {
    pub candidate_id: String,
    pub address: String,
    pub time_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_signs_map_to_named_maneuvers() {
        assert_eq!(InstructionSign::from(-2), InstructionSign::Left);
        assert_eq!(InstructionSign::from(2), InstructionSign::Right);
        assert_eq!(InstructionSign::from(0), InstructionSign::Straight);
        assert_eq!(InstructionSign::from(4), InstructionSign::Arrive);
        assert_eq!(InstructionSign::from(6), InstructionSign::Roundabout);
    }

    #[test]
    fn test_unknown_sign_keeps_raw_code() {
        assert_eq!(InstructionSign::from(-7), InstructionSign::Other(-7));
        assert_eq!(InstructionSign::Other(-7).arrow(), "•");
    }

    #[test]
    fn test_instruction_deserializes_graphhopper_shape() {
        let json = r#"{"distance":412.3,"sign":-2,"interval":[0,4],"text":"Turn left onto Anna Salai","time":52000,"street_name":"Anna Salai"}"#;
        let instruction: Instruction = serde_json::from_str(json).unwrap();
        assert_eq!(instruction.maneuver(), InstructionSign::Left);
        assert_eq!(instruction.time, 52000);
        assert_eq!(instruction.street_name, "Anna Salai");
    }
}
