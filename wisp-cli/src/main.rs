//! Wisp command-line renderer.
//!
//! Renders an HTML file and an optional stylesheet to a PNG, or prints the
//! intermediate trees for debugging.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use wisp_browser::{Font, FontdueFontMetrics, build_display_list, load_font, load_system_font};
use wisp_css::{ApproximateFontMetrics, FontMetrics};

/// Wisp: render a small subset of HTML and CSS to an image
#[derive(Parser, Debug)]
#[command(name = "wisp")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render a page with a stylesheet
    wisp page.html --css page.css -o page.png

    # Inline input, custom viewport
    wisp --html '<div class="a">hi</div>' --style '.a { background-color: red }' --width 200 --height 100

    # Inspect the box tree
    wisp page.html --css page.css --layout
"#)]
struct Cli {
    /// Path to the HTML file
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Path to the stylesheet
    #[arg(long, value_name = "FILE", conflicts_with = "style")]
    css: Option<PathBuf>,

    /// Stylesheet text
    #[arg(long, value_name = "CSS")]
    style: Option<String>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Where to write the PNG (default: out.png, unless a debug switch is given)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// TrueType font for measuring and drawing text (default: first system font found)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Print the document tree
    #[arg(long)]
    dom: bool,

    /// Print the box tree with geometry
    #[arg(long)]
    layout: bool,

    /// Print the display list as JSON
    #[arg(long)]
    display_list: bool,
}

impl Cli {
    const fn debugging(&self) -> bool {
        self.dom || self.layout || self.display_list
    }

    fn output_path(&self) -> Option<PathBuf> {
        self.output
            .clone()
            .or_else(|| (!self.debugging()).then(|| PathBuf::from("out.png")))
    }
}

fn main() -> ExitCode {
    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = read_html(cli)?;
    let css = read_css(cli)?;
    let font = match &cli.font {
        Some(path) => Some(load_font(path)?),
        None => load_system_font(),
    };

    if cli.dom {
        print_heading("DOM Tree");
        let document = wisp_html::parse(&html)?;
        print!("{}", wisp_html::format_tree(&document));
    }

    if cli.layout {
        print_heading("Layout Tree");
        print_layout(&html, &css, cli, font.as_ref())?;
    }

    if cli.display_list {
        print_heading("Display List");
        let metrics = font_metrics(font.as_ref());
        let list = build_display_list(&html, &css, cli.width, cli.height, metrics.as_ref())?;
        println!("{}", serde_json::to_string_pretty(&list)?);
    }

    if let Some(output) = cli.output_path() {
        let image = wisp_browser::render(&html, &css, cli.width, cli.height, font.as_ref())?;
        image
            .save(&output)
            .with_context(|| format!("failed to write '{}'", output.display()))?;
        println!("{} {}", "Saved".green().bold(), output.display());
    }

    Ok(())
}

fn read_html(cli: &Cli) -> Result<String> {
    match (&cli.html, &cli.path) {
        (Some(html), _) => Ok(html.clone()),
        (None, Some(path)) => read_file(path),
        (None, None) => bail!("no input: pass an HTML file or --html"),
    }
}

fn read_css(cli: &Cli) -> Result<String> {
    match (&cli.style, &cli.css) {
        (Some(style), _) => Ok(style.clone()),
        (None, Some(path)) => read_file(path),
        (None, None) => Ok(String::new()),
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn font_metrics(font: Option<&Font>) -> Box<dyn FontMetrics + '_> {
    match font {
        Some(font) => Box::new(FontdueFontMetrics::new(font)),
        None => Box::new(ApproximateFontMetrics::default()),
    }
}

#[allow(clippy::cast_precision_loss)]
fn print_layout(html: &str, css: &str, cli: &Cli, font: Option<&Font>) -> Result<()> {
    let document = wisp_html::parse(html)?;
    let stylesheet = wisp_css::parse(css)?;
    let styled = wisp_css::resolve(&document, &stylesheet);
    let mut root = wisp_css::build(&styled).context("document produced no boxes")?;

    let metrics = font_metrics(font);
    root.layout_root(cli.width as f32, cli.height as f32, metrics.as_ref());
    print!("{}", root.dump());
    Ok(())
}

fn print_heading(title: &str) {
    println!("{}", format!("=== {title} ===").cyan().bold());
}
