//! Read-only scene view handed to the renderer

use serde::{Deserialize, Serialize};

use super::state::{GameState, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    /// Left edge; the paddle's top is `arena_height - height`
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub destroyed: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena_width: f32,
    pub arena_height: f32,
    pub ball: BallView,
    pub paddle: PaddleView,
    /// Column-major grid order, destroyed blocks included
    pub blocks: Vec<BlockView>,
    pub state: SessionState,
    pub frame: u64,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            arena_width: state.arena_width,
            arena_height: state.arena_height,
            ball: BallView {
                x: state.ball.pos.x,
                y: state.ball.pos.y,
                radius: state.ball.radius,
            },
            paddle: PaddleView {
                x: state.paddle.x,
                width: state.paddle.width,
                height: state.paddle.height,
            },
            blocks: state
                .blocks
                .iter()
                .map(|b| BlockView {
                    x: b.rect.x,
                    y: b.rect.y,
                    width: b.rect.width,
                    height: b.rect.height,
                    destroyed: b.destroyed,
                })
                .collect(),
            state: state.session,
            frame: state.frame,
        }
    }
}

impl Snapshot {
    /// Blocks still standing, in grid order
    pub fn live_blocks(&self) -> impl Iterator<Item = &BlockView> {
        self.blocks.iter().filter(|b| !b.destroyed)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::EngineConfig;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(&EngineConfig::default());
        state.blocks[3].destroyed = true;
        let snap = Snapshot::from(&state);

        assert_eq!(snap.ball, BallView { x: 205.0, y: 370.0, radius: 10.0 });
        assert_eq!(snap.paddle, PaddleView { x: 167.5, width: 75.0, height: 10.0 });
        assert_eq!(snap.blocks.len(), 25);
        assert!(snap.blocks[3].destroyed);
        assert_eq!(snap.live_blocks().count(), 24);
        assert_eq!(snap.state, SessionState::Playing);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let state = GameState::new(&EngineConfig::default());
        let json = Snapshot::from(&state).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ball"]["radius"], 10.0);
        assert_eq!(value["paddle"]["width"], 75.0);
        assert_eq!(value["blocks"][0]["destroyed"], false);
        assert_eq!(value["state"], "playing");
    }
}
