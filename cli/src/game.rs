use std::io::Write;

use mazerun_core::{EngineState, GameEngine, Snapshot};

use crate::input::{InputSource, InputToken};
use crate::render::Renderer;

pub(crate) const PROMPT: &str = "Move (w/a/s/d or up/down/left/right): ";

/// Plays until the game ends or input runs out, returning the final state in the first case.
pub(crate) fn run(
    engine: &mut GameEngine,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    out: &mut dyn Write,
) -> anyhow::Result<Option<EngineState>> {
    while !engine.is_finished() {
        renderer.render(out, &Snapshot::from_engine(engine))?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let token = match input.next_token()? {
            Some(token) => token,
            None => {
                writeln!(out)?;
                log::info!("Input closed after {} turns", engine.turn());
                return Ok(None);
            }
        };

        match token {
            InputToken::Direction(direction) => {
                let report = engine.apply_move(direction)?;
                writeln!(out, "{report}")?;
            }
            InputToken::Invalid(raw) => {
                log::debug!("Ignoring invalid move {:?}", raw);
                writeln!(out, "Invalid move. Use w/a/s/d to move.")?;
            }
        }
    }

    renderer.render(out, &Snapshot::from_engine(engine))?;
    Ok(Some(engine.state()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LineInput;
    use crate::render::TextRenderer;
    use mazerun_core::GridModel;
    use std::io::Cursor;

    fn walled_goal() -> GameEngine {
        let grid =
            GridModel::from_parts((10, 15), &[(5, 6)], (5, 5), (5, 7), &[(4, 5)]).unwrap();
        GameEngine::new(grid)
    }

    fn play(engine: &mut GameEngine, script: &str) -> (Option<EngineState>, String) {
        let mut input = LineInput::new(Cursor::new(script.to_owned()));
        let mut out = Vec::new();
        let result = run(engine, &mut input, &mut TextRenderer, &mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn scripted_game_reaches_goal() {
        let mut engine = walled_goal();

        let (result, out) = play(&mut engine, "d\nnorth\ns\nd\nd\nw\n");

        assert_eq!(result, Some(EngineState::Won));
        assert_eq!(engine.turn(), 5);
        assert_eq!(engine.depth_bound(), 5);
        assert!(out.contains("Blocked by a wall, staying at (5, 5)."));
        assert!(out.contains("Invalid move. Use w/a/s/d to move."));
        assert!(out.contains("No path found within depth limit 1."));
        assert!(out.contains("Congratulations, you reached the goal!"));
        assert_eq!(out.matches(PROMPT).count(), 6);
    }

    #[test]
    fn scripted_game_hits_checkpoint() {
        let mut engine = walled_goal();

        let (result, out) = play(&mut engine, "up\nup\n");

        assert_eq!(result, Some(EngineState::Lost));
        assert!(out.contains("Caught by a checkpoint at (4, 5)! Game over."));
        // second line is never read
        assert_eq!(out.matches(PROMPT).count(), 1);
    }

    #[test]
    fn invalid_lines_never_reach_engine() {
        let mut engine = walled_goal();

        let (result, out) = play(&mut engine, "north\n\njump\n");

        assert_eq!(result, None);
        assert_eq!(engine.turn(), 0);
        assert_eq!(engine.depth_bound(), 1);
        assert_eq!(engine.player(), (5, 5));
        assert_eq!(out.matches("Invalid move. Use w/a/s/d to move.").count(), 3);
        assert_eq!(out.matches(PROMPT).count(), 4);
    }

    #[test]
    fn engine_serializes_progress() {
        let mut engine = walled_goal();
        play(&mut engine, "s\n");

        let value = serde_json::to_value(&engine).unwrap();

        assert_eq!(value["turn"], 1);
        assert_eq!(value["depth_bound"], 2);
        assert_eq!(value["state"], "Playing");
        assert_eq!(value["grid"]["player"], serde_json::json!([6, 5]));
    }

    #[test]
    fn closed_input_stops_without_result() {
        let mut engine = walled_goal();

        let (result, out) = play(&mut engine, "a\n");

        assert_eq!(result, None);
        assert_eq!(engine.state(), EngineState::Playing);
        assert_eq!(engine.player(), (5, 4));
        assert_eq!(out.matches(PROMPT).count(), 2);
    }
}
