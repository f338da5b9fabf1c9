use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use pacman_arcade::{Direction, PelletKind, Phase, Rect, WorldView};

/// Arena pixels per terminal cell.
const CELL_PX: i32 = 20;
/// Terminal columns per cell.
const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Player(Direction),
    Ghost,
    Frightened,
    Wall,
    Empty,
    Pellet,
    Power,
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    glyph: Glyph,
    color: Color,
}

const EMPTY: Cell = Cell {
    glyph: Glyph::Empty,
    color: Color::Reset,
};

pub struct Renderer {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    last: Vec<Cell>,
    last_hud: String,
    last_phase: Phase,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(view: &WorldView<'_>) -> Self {
        let width = (view.arena.0 / CELL_PX) as usize;
        let height = (view.arena.1 / CELL_PX) as usize;
        let mut walls = vec![false; width * height];
        for y in 0..height {
            for x in 0..width {
                let cell = cell_rect(x, y);
                walls[y * width + x] = view.walls.iter().any(|w| w.intersects(&cell));
            }
        }
        Self {
            width,
            height,
            walls,
            last: vec![EMPTY; width * height],
            last_hud: String::new(),
            last_phase: view.phase,
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }
}

fn cell_rect(x: usize, y: usize) -> Rect {
    Rect::square(x as i32 * CELL_PX, y as i32 * CELL_PX, CELL_PX)
}

fn cell_of(rect: &Rect) -> (usize, usize) {
    let (cx, cy) = rect.center();
    ((cx.max(0) / CELL_PX) as usize, (cy.max(0) / CELL_PX) as usize)
}

pub fn render(
    stdout: &mut Stdout,
    view: &WorldView<'_>,
    renderer: &mut Renderer,
) -> io::Result<()> {
    let needed_h = (renderer.height + 2) as u16;
    let needed_w = (renderer.width * CELL_W) as u16;

    stdout.queue(MoveTo(0, 0))?;

    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2 + 1;
    if origin_x != renderer.origin_x
        || origin_y != renderer.origin_y
        || view.phase != renderer.last_phase
    {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.last_phase = view.phase;
        renderer.needs_full = true;
        stdout.queue(Clear(ClearType::All))?;
    }

    let best = view.high_scores[0].max(view.score);
    let power = if view.power_active { "  POWER!" } else { "" };
    let hud = format!("Score: {}  High Score: {}{}  (q to quit)", view.score, best, power);
    if renderer.needs_full || hud != renderer.last_hud {
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y - 1))?;
        stdout.queue(SetForegroundColor(Color::White))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(Print(&hud))?;
        stdout.queue(ResetColor)?;
        renderer.last_hud = hud;
    }

    let frame = compose(view, renderer);
    for y in 0..renderer.height {
        for x in 0..renderer.width {
            let idx = y * renderer.width + x;
            let cell = frame[idx];
            if renderer.needs_full || cell != renderer.last[idx] {
                renderer.last[idx] = cell;
                draw_cell(stdout, renderer, x, y, cell)?;
            }
        }
    }
    renderer.needs_full = false;

    if view.phase == Phase::GameOver {
        draw_game_over(stdout, view, renderer)?;
    }

    stdout.flush()?;
    Ok(())
}

/// Rasterizes the world; later layers overwrite earlier ones.
fn compose(view: &WorldView<'_>, renderer: &Renderer) -> Vec<Cell> {
    let mut frame: Vec<Cell> = renderer
        .walls
        .iter()
        .map(|&wall| {
            if wall {
                Cell {
                    glyph: Glyph::Wall,
                    color: Color::Blue,
                }
            } else {
                EMPTY
            }
        })
        .collect();

    let mut put = |rect: &Rect, cell: Cell| {
        let (x, y) = cell_of(rect);
        if x < renderer.width && y < renderer.height {
            frame[y * renderer.width + x] = cell;
        }
    };

    for pellet in view.pellets {
        let cell = match pellet.kind {
            PelletKind::Normal => Cell {
                glyph: Glyph::Pellet,
                color: Color::White,
            },
            PelletKind::Power => Cell {
                glyph: Glyph::Power,
                color: Color::Magenta,
            },
        };
        put(&pellet.rect(), cell);
    }
    for ghost in view.ghosts {
        let cell = if ghost.vulnerable {
            Cell {
                glyph: Glyph::Frightened,
                color: Color::Blue,
            }
        } else {
            Cell {
                glyph: Glyph::Ghost,
                color: Color::Red,
            }
        };
        put(&ghost.rect(), cell);
    }
    put(
        &view.player.rect(),
        Cell {
            glyph: Glyph::Player(view.player.facing),
            color: Color::Yellow,
        },
    );
    frame
}

fn draw_cell(
    stdout: &mut Stdout,
    renderer: &Renderer,
    x: usize,
    y: usize,
    cell: Cell,
) -> io::Result<()> {
    let text = match cell.glyph {
        Glyph::Player(Direction::Right) => "ᗧ",
        Glyph::Player(Direction::Left) => "ᗤ",
        Glyph::Player(Direction::Up) => "ᗢ",
        Glyph::Player(Direction::Down) => "ᗣ",
        Glyph::Ghost => "👻",
        Glyph::Frightened => "😱",
        Glyph::Wall => "██",
        Glyph::Empty => "  ",
        Glyph::Pellet => "· ",
        Glyph::Power => "● ",
    };
    let x_pos = renderer.origin_x + (x * CELL_W) as u16;
    let y_pos = renderer.origin_y + y as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(cell.color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}

fn draw_game_over(
    stdout: &mut Stdout,
    view: &WorldView<'_>,
    renderer: &Renderer,
) -> io::Result<()> {
    let mut lines = vec![
        "GAME OVER!".to_string(),
        format!("Final Score: {}", view.score),
        "Press r to restart, q to quit".to_string(),
        String::new(),
    ];
    for (rank, score) in view.high_scores.iter().enumerate() {
        lines.push(format!("{}. {}", rank + 1, score));
    }

    let box_w = lines.iter().map(|l| UnicodeWidthStr::width(l.as_str())).max().unwrap_or(0) + 4;
    let grid_w = renderer.width * CELL_W;
    let left = renderer.origin_x + (grid_w.saturating_sub(box_w) / 2) as u16;
    let top = renderer.origin_y + (renderer.height.saturating_sub(lines.len()) / 2) as u16;

    stdout.queue(SetForegroundColor(Color::White))?;
    for (i, line) in lines.iter().enumerate() {
        let pad = box_w - UnicodeWidthStr::width(line.as_str());
        let text = format!("{}{}{}", " ".repeat(pad / 2), line, " ".repeat(pad - pad / 2));
        stdout.queue(MoveTo(left, top + i as u16))?;
        stdout.queue(Print(text))?;
    }
    stdout.queue(ResetColor)?;
    Ok(())
}
