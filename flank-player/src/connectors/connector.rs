use flank_othello::Board;
use std::io;

/// Shows the state of the game to the human player.
pub trait Renderer {
    /// Display the board. Must not change it.
    fn render(&mut self, board: &Board) -> io::Result<()>;

    /// Display a line of text: prompts answered by the computer, passes, errors, results.
    fn announce(&mut self, message: &str) -> io::Result<()>;
}

/// Supplies the human player's moves as coordinate strings ("D3").
pub trait InputSource {
    /// Show `prompt` and read one coordinate string.
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_coordinate(&mut self, prompt: &str) -> io::Result<Option<String>>;
}
