use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use logomorph::{
    Canvas, Color, CpuRasterizer, CpuRasterizerOpts, DisplayList, EdgeInsets, Fps, FrameIndex,
    FrameRange, LabelFont, LogoDecoration, LogoPainter, LogoStyle, PngSequenceSink, SequenceOpts,
    Showcase, ShowcaseConfig,
};

#[derive(Parser, Debug)]
#[command(name = "logomorph", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single logo frame as a PNG.
    Frame(FrameArgs),
    /// Print the recorded draw operations of a single frame as JSON.
    Ops(DecorationArgs),
    /// Render the cycling showcase as a numbered PNG sequence.
    Sequence(SequenceArgs),
}

#[derive(Parser, Debug)]
struct DecorationArgs {
    /// Logo style.
    #[arg(long, value_enum, default_value_t = LogoStyle::MarkOnly)]
    style: LogoStyle,

    /// Override the morph position (−1 stacked, 0 mark-only, +1 horizontal).
    #[arg(long, allow_hyphen_values = true)]
    position: Option<f64>,

    /// Overall opacity in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    opacity: f64,

    /// Mark color as #RRGGBB or #RRGGBBAA.
    #[arg(long)]
    color: Option<Color>,

    /// Label color as #RRGGBB or #RRGGBBAA.
    #[arg(long)]
    text_color: Option<Color>,

    /// Margin applied on every side, in pixels.
    #[arg(long, default_value_t = 0.0)]
    margin: f64,

    /// Target width in pixels.
    #[arg(long)]
    width: u32,

    /// Target height in pixels.
    #[arg(long)]
    height: u32,

    /// Font file used to shape the label.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    decoration: DecorationArgs,

    /// Background color; transparent when omitted.
    #[arg(long)]
    background: Option<Color>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Showcase configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame width in pixels.
    #[arg(long)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long)]
    height: u32,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Length of the sequence in seconds.
    #[arg(long)]
    seconds: f64,

    /// Output directory for the PNG files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Rasterize frames on all cores.
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Ops(args) => cmd_ops(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn load_font(path: Option<&PathBuf>) -> anyhow::Result<Option<LabelFont>> {
    path.map(|p| LabelFont::load(p).with_context(|| format!("load font '{}'", p.display())))
        .transpose()
}

fn record(args: &DecorationArgs) -> anyhow::Result<DisplayList> {
    let position = args.position.unwrap_or(args.style.position());
    anyhow::ensure!(position.is_finite(), "position must be finite");
    anyhow::ensure!(
        (0.0..=1.0).contains(&args.opacity),
        "opacity must be in [0, 1], got {}",
        args.opacity
    );
    anyhow::ensure!(
        args.margin.is_finite() && args.margin >= 0.0,
        "margin must be finite and non-negative"
    );

    let base = LogoDecoration::new(args.style);
    let color = args.color.unwrap_or(base.color());
    let text_color = args.text_color.unwrap_or(base.text_color());
    let decoration = LogoDecoration::from_parts(
        color,
        text_color,
        args.style,
        EdgeInsets::all(args.margin),
        position,
        args.opacity,
    );

    let painter = LogoPainter::new(text_color, load_font(args.font.as_ref())?);
    let canvas = Canvas {
        width: args.width,
        height: args.height,
    };
    let mut list = DisplayList::new();
    painter.paint(&decoration, canvas.rect(), &mut list);
    Ok(list)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let list = record(&args.decoration)?;
    let mut raster = CpuRasterizer::new(CpuRasterizerOpts {
        background: args.background,
    });
    let frame = raster.render(&list, args.decoration.width, args.decoration.height)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    logomorph::encode::sink::write_png(&args.out, &frame)
        .with_context(|| format!("write '{}'", args.out.display()))?;
    tracing::info!(out = %args.out.display(), "wrote frame");
    Ok(())
}

fn cmd_ops(args: DecorationArgs) -> anyhow::Result<()> {
    let list = record(&args)?;
    let json = serde_json::to_string_pretty(list.ops()).context("serialize draw ops")?;
    println!("{json}");
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => ShowcaseConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ShowcaseConfig::default(),
    };
    anyhow::ensure!(
        args.seconds.is_finite() && args.seconds >= 0.0,
        "seconds must be finite and non-negative"
    );

    let fps = Fps::new(args.fps, 1)?;
    let frames = fps.frames_in(std::time::Duration::from_secs_f64(args.seconds));
    let range = FrameRange::new(FrameIndex(0), FrameIndex(frames))?;

    let font = config.load_font().context("load label font")?;
    let mut showcase = Showcase::new(&config, font, std::time::Duration::ZERO)?;
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let opts = SequenceOpts {
        canvas: Canvas {
            width: args.width,
            height: args.height,
        },
        fps,
        range,
        parallel: args.parallel,
    };
    let stats = logomorph::render_sequence(&mut showcase, &opts, &mut sink)?;
    tracing::info!(frames = stats.frames, dir = %args.out_dir.display(), "wrote sequence");
    Ok(())
}
