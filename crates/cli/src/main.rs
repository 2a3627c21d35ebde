//! Terminal presenter for slide decks.

mod input;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use deck_core::{Deck, Navigator, TextRenderer};
use input::Input;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Present a slide deck in the terminal.
#[derive(Parser, Debug)]
#[command(name = "deck-present")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON deck file (default: the built-in proposal deck)
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Slide to start on, 1-based
    #[arg(short, long, conflicts_with_all = ["list", "export"])]
    start: Option<usize>,

    /// Render width in columns
    #[arg(short, long, default_value = "72")]
    width: usize,

    /// List slides and exit
    #[arg(long)]
    list: bool,

    /// Print every slide and exit
    #[arg(long, conflicts_with = "list")]
    export: bool,

    /// Print the starting slide's visual tree as JSON and exit
    #[arg(long, conflicts_with_all = ["list", "export"])]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let deck = load_deck(&args)?;
    let renderer = TextRenderer::new().with_width(args.width);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        write_listing(&deck, &mut out)?;
        return Ok(());
    }

    if args.export {
        write!(out, "{}", renderer.render_deck(&deck))?;
        return Ok(());
    }

    let mut navigator = start_navigator(deck, args.start)?;

    if args.json {
        let tree = navigator.render_current();
        writeln!(out, "{}", serde_json::to_string_pretty(&tree)?)?;
        return Ok(());
    }

    let stdin = io::stdin();
    present(&mut navigator, &renderer, stdin.lock(), &mut out)
}

/// Load the deck named on the command line, or the built-in proposal.
fn load_deck(args: &Args) -> Result<Deck> {
    match &args.deck {
        Some(path) => Deck::from_path(path)
            .with_context(|| format!("Failed to load deck {}", path.display())),
        None => deck_core::proposal::deck().context("Built-in deck is invalid"),
    }
}

/// Create the navigator, positioned on the 1-based `start` slide if given.
fn start_navigator(deck: Deck, start: Option<usize>) -> Result<Navigator> {
    let mut navigator = Navigator::new(deck);
    if let Some(start) = start {
        let index = start
            .checked_sub(1)
            .ok_or_else(|| anyhow!("Slide numbers start at 1"))?;
        navigator
            .jump_to(index)
            .with_context(|| format!("Invalid start slide {}", start))?;
    }
    Ok(navigator)
}

fn write_listing<W: Write>(deck: &Deck, out: &mut W) -> Result<()> {
    writeln!(out, "{}", deck.title())?;
    for (i, slide) in deck.iter().enumerate() {
        writeln!(out, "{:>3}. {:<20} {}", i + 1, slide.id(), slide.title())?;
    }
    Ok(())
}

/// Run the interactive loop until `quit` or end of input.
///
/// Bad input and out-of-range jumps are reported and the current slide is
/// kept; they never end the session.
fn present<R: BufRead, W: Write>(
    navigator: &mut Navigator,
    renderer: &TextRenderer,
    reader: R,
    out: &mut W,
) -> Result<()> {
    show(navigator, renderer, out)?;

    for line in reader.lines() {
        let line = line.context("Failed to read input")?;

        match line.parse::<Input>() {
            Ok(Input::Navigate(command)) => match navigator.apply(command) {
                Ok(()) => show(navigator, renderer, out)?,
                Err(deck_core::Error::OutOfRange { index, len }) => {
                    writeln!(out, "Error: no slide {} (deck has {} slides)", index + 1, len)?
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            Ok(Input::Notes) => {
                let notes = navigator.current().notes().unwrap_or("(no notes)");
                writeln!(out, "{}", notes)?;
            }
            Ok(Input::Help) => writeln!(out, "{}", input::HELP)?,
            Ok(Input::Quit) => break,
            Err(e) => {
                log::debug!("Rejected input {:?}", line);
                writeln!(out, "Error: {}", e)?;
            }
        }
        out.flush()?;
    }

    Ok(())
}

fn show<W: Write>(navigator: &Navigator, renderer: &TextRenderer, out: &mut W) -> Result<()> {
    let (position, total) = navigator.progress();
    let slide = navigator.current();
    let tree = slide.render();
    log::debug!("Showing slide '{}' ({} nodes)", slide.id(), tree.node_count());

    writeln!(out)?;
    for line in renderer.render(&tree) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "[{}/{}] {}", position, total, slide.title())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(commands: &str) -> (Navigator, String) {
        let mut navigator = Navigator::new(deck_core::proposal::deck().unwrap());
        let renderer = TextRenderer::new();
        let mut out = Vec::new();
        present(&mut navigator, &renderer, commands.as_bytes(), &mut out).unwrap();
        (navigator, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_shows_first_slide_on_start() {
        let (navigator, output) = run("");
        assert_eq!(navigator.current_index(), 0);
        assert!(output.contains("[1/2] Workforce Partnership Proposal"));
    }

    #[test]
    fn test_navigation_sequence() {
        let (navigator, output) = run("n\nn\np\n");
        assert_eq!(navigator.current_index(), 0);
        assert!(output.contains("[2/2] Work Pathways"));
    }

    #[test]
    fn test_out_of_range_jump_keeps_slide() {
        let (navigator, output) = run("g 5\n");
        assert_eq!(navigator.current_index(), 0);
        assert!(output.contains("Error: no slide 5 (deck has 2 slides)"));
    }

    #[test]
    fn test_bad_input_does_not_stop_session() {
        let (navigator, output) = run("dance\n2\n");
        assert_eq!(navigator.current_index(), 1);
        assert!(output.contains("Error: Unknown command"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (navigator, _) = run("q\nn\n");
        assert_eq!(navigator.current_index(), 0);
    }

    #[test]
    fn test_notes() {
        let (_, output) = run("s\n");
        assert!(output.contains("Introduce the team"));
    }

    #[test]
    fn test_start_navigator() {
        let deck = || deck_core::proposal::deck().unwrap();

        assert_eq!(start_navigator(deck(), None).unwrap().current_index(), 0);
        assert_eq!(start_navigator(deck(), Some(2)).unwrap().current_index(), 1);

        let err = start_navigator(deck(), Some(0)).unwrap_err();
        assert_eq!(err.to_string(), "Slide numbers start at 1");

        let err = start_navigator(deck(), Some(3)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid start slide 3");
        assert!(matches!(
            err.downcast_ref::<deck_core::Error>(),
            Some(deck_core::Error::OutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_start_conflicts_with_list_and_export() {
        assert!(Args::try_parse_from(["deck-present", "--start", "2", "--list"]).is_err());
        assert!(Args::try_parse_from(["deck-present", "--start", "2", "--export"]).is_err());

        let args = Args::try_parse_from(["deck-present", "--start", "2", "--json"]).unwrap();
        assert_eq!(args.start, Some(2));
    }

    #[test]
    fn test_listing() {
        let deck = deck_core::proposal::deck().unwrap();
        let mut out = Vec::new();
        write_listing(&deck, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  1. title"));
        assert!(text.contains("  2. work-pathways"));
    }
}
