//! Navigation events emitted on committed transitions.

use serde::Serialize;

/// Emitted once per committed stage change.
///
/// Consumed by the analytics and address-bar collaborators; never emitted
/// for snap-backs or rejected commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEvent {
    pub from_stage: String,
    pub to_stage: String,
    pub from_index: usize,
    /// Index of the destination stage
    pub index: usize,
}

impl NavigationEvent {
    /// URL fragment that deep-links to the destination stage.
    pub fn fragment(&self) -> String {
        format!("#{}", self.to_stage)
    }

    pub fn is_forward(&self) -> bool {
        self.index > self.from_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_and_direction() {
        let event = NavigationEvent {
            from_stage: "home".to_string(),
            to_stage: "shop".to_string(),
            from_index: 0,
            index: 2,
        };
        assert_eq!(event.fragment(), "#shop");
        assert!(event.is_forward());

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["to_stage"], "shop");
        assert_eq!(json["index"], 2);
    }
}
