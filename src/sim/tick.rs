//! Per-frame simulation step
//!
//! Advances the game state by exactly one frame. The host decides the
//! cadence; nothing here knows about wall-clock time.

use super::collision::{
    VerticalHit, hits_side_wall, over_paddle, paddle_bounce, reflect_into, vertical_hit,
};
use super::config::EngineConfig;
use super::state::{GameState, SessionState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired paddle center in arena space (from pointer position)
    pub paddle_target: Option<f32>,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameEvents {
    /// Paddle moved to a new target this frame
    pub paddle_moved: bool,
    /// Ball turned around at a side wall
    pub wall_bounce: bool,
    /// Ball turned around at the ceiling
    pub ceiling_bounce: bool,
    /// Ball came off the paddle
    pub paddle_bounce: bool,
    /// Grid index of the block destroyed this frame
    pub destroyed_block: Option<usize>,
    /// Terminal state entered this frame
    pub ended: Option<SessionState>,
}

/// Advance the game state by one frame.
///
/// Does nothing once the session is Won or Lost.
pub fn tick(state: &mut GameState, input: &TickInput, config: &EngineConfig) -> FrameEvents {
    let mut events = FrameEvents::default();

    if state.session.is_terminal() {
        return events;
    }

    // Paddle follows the latest pointer target
    if let Some(target) = input.paddle_target {
        events.paddle_moved = state.paddle.track(target, state.arena_width);
    }

    let ball = &mut state.ball;
    let r = ball.radius;

    // Side walls
    if hits_side_wall(ball.pos, ball.vel, r, state.arena_width) {
        ball.vel.x = -ball.vel.x;
        events.wall_bounce = true;
    }

    // Ceiling, or floor line where the paddle decides the session
    match vertical_hit(ball.pos, ball.vel, r, state.arena_height) {
        VerticalHit::Ceiling => {
            ball.vel.y = -ball.vel.y;
            events.ceiling_bounce = true;
        }
        VerticalHit::Floor => {
            let paddle = &state.paddle;
            if over_paddle(ball.pos.x, paddle.x, paddle.width) {
                ball.vel = paddle_bounce(
                    config.bounce_policy,
                    ball.vel,
                    ball.pos.x,
                    paddle.x,
                    paddle.width,
                    config.ball_speed,
                );
                events.paddle_bounce = true;
            } else {
                state.session = SessionState::Lost;
                events.ended = Some(SessionState::Lost);
                log::info!(
                    "Ball lost at x={:.1} (paddle {:.1}..{:.1}) after {} frames",
                    ball.pos.x,
                    paddle.x,
                    paddle.x + paddle.width,
                    state.frame
                );
                return events;
            }
        }
        VerticalHit::None => {}
    }

    // At most one block per frame, first hit in grid order
    if let Some((index, block)) = state
        .blocks
        .iter_mut()
        .enumerate()
        .find(|(_, b)| !b.destroyed && b.rect.contains_point(ball.pos))
    {
        block.destroyed = true;
        ball.vel.y = -ball.vel.y;
        events.destroyed_block = Some(index);
        log::debug!("Block {} destroyed at frame {}", index, state.frame);
    }

    if events.destroyed_block.is_some() && state.all_destroyed() {
        state.session = SessionState::Won;
        events.ended = Some(SessionState::Won);
        log::info!("All blocks cleared after {} frames", state.frame);
        return events;
    }

    // Integrate, then fold back any overshoot produced by a velocity change
    // made after the wall tests (angled paddle bounce, block hit under the
    // ceiling).
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    let (x, folded_x) = reflect_into(ball.pos.x, r, state.arena_width - r);
    if folded_x {
        ball.pos.x = x;
        ball.vel.x = -ball.vel.x;
        events.wall_bounce = true;
    }
    let (y, folded_y) = reflect_into(ball.pos.y, r, f32::INFINITY);
    if folded_y {
        ball.pos.y = y;
        ball.vel.y = -ball.vel.y;
        events.ceiling_bounce = true;
    }
    debug_assert!(ball.pos.x >= r && ball.pos.x <= state.arena_width - r && ball.pos.y >= r);

    state.frame += 1;
    events
}
