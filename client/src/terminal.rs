use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use liblife::Grid;

/// Writes one frame: a status line followed by the rendered grid.
pub fn draw_frame<W>(out: &mut W, grid: &Grid, clear_screen: bool) -> anyhow::Result<()>
where
    W: Write,
{
    if clear_screen {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }

    writeln!(
        out,
        "generation {} | {} alive",
        grid.generation(),
        grid.alive_count()
    )?;
    out.write_all(grid.render().as_bytes())?;
    out.flush()?;

    Ok(())
}
