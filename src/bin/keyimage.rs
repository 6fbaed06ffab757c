use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "keyimage", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generated parameters as JSON.
    Params(PlaceArgs),
    /// Print the inline CSS (or full markup) the site would emit.
    Style(StyleArgs),
    /// Render a PNG preview from the sprite frames on disk.
    Render(RenderArgs),
    /// Draw a random authoring seed, or check a typed one.
    Seed(SeedArgs),
    /// Histogram the generator's decisions over a seed range.
    Stats(StatsArgs),
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Entry seed. Values outside 0..=9999 are accepted but warned about.
    #[arg(long, allow_negative_numbers = true)]
    seed: i64,

    /// Container edge in pixels.
    #[arg(long, default_value_t = keyimage::ContainerSize::DEFAULT_PX)]
    container: f64,
}

#[derive(Parser, Debug)]
struct StyleArgs {
    #[command(flatten)]
    place: PlaceArgs,

    /// Sprite sheet JSON (url prefix, frame directory, classes).
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Emit the wrapping `<div>` and `<img>` instead of just the style.
    #[arg(long)]
    html: bool,

    /// Extra classes for the wrapper, e.g. "w-32 h-32 rounded-2xl".
    #[arg(long, default_value = "")]
    class: String,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    place: PlaceArgs,

    /// Sprite sheet JSON (url prefix, frame directory, classes).
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Directory with frame_00.png .. frame_14.png; overrides the sheet.
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Skip the hue rotation.
    #[arg(long)]
    no_hue: bool,

    /// Background as RRGGBB or RRGGBBAA hex; transparent by default.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Parser, Debug)]
struct SeedArgs {
    /// Validate this text as the seed field would instead of drawing one.
    #[arg(long)]
    check: Option<String>,
}

#[derive(Parser, Debug)]
struct StatsArgs {
    /// First seed (inclusive).
    #[arg(long, default_value_t = keyimage::SEED_MIN, allow_negative_numbers = true)]
    from: i64,

    /// Last seed (exclusive).
    #[arg(long, default_value_t = keyimage::SEED_MAX + 1, allow_negative_numbers = true)]
    to: i64,

    /// Container edge in pixels.
    #[arg(long, default_value_t = keyimage::ContainerSize::DEFAULT_PX)]
    container: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Params(args) => cmd_params(args),
        Command::Style(args) => cmd_style(args),
        Command::Render(args) => cmd_render(args),
        Command::Seed(args) => cmd_seed(args),
        Command::Stats(args) => cmd_stats(args),
    }
}

fn place(args: &PlaceArgs) -> anyhow::Result<(keyimage::ImageParams, keyimage::ContainerSize)> {
    let seed = keyimage::Seed(args.seed);
    if !seed.is_authored_range() {
        tracing::warn!(seed = args.seed, "seed is outside the authoring range 0..=9999");
    }
    let container = keyimage::ContainerSize::new(args.container)?;
    Ok((keyimage::generate(seed, container), container))
}

fn read_sheet(path: Option<&Path>) -> anyhow::Result<keyimage::SpriteSheet> {
    match path {
        Some(p) => Ok(keyimage::SpriteSheet::load(p)?),
        None => Ok(keyimage::SpriteSheet::default()),
    }
}

fn cmd_params(args: PlaceArgs) -> anyhow::Result<()> {
    let (params, _) = place(&args)?;
    let json = serde_json::to_string_pretty(&params).context("serialize params")?;
    println!("{json}");
    Ok(())
}

fn cmd_style(args: StyleArgs) -> anyhow::Result<()> {
    let (params, _) = place(&args.place)?;
    let sheet = read_sheet(args.sheet.as_deref())?;

    if args.html {
        let markup = keyimage::KeyImageMarkup::new(&params, &sheet).with_class(&args.class);
        println!("{}", markup.to_html());
    } else {
        println!("{}", keyimage::css_style(&params));
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (params, container) = place(&args.place)?;
    let mut sheet = read_sheet(args.sheet.as_deref())?;
    if let Some(dir) = args.frames {
        sheet.frames_dir = dir;
    }
    sheet.validate()?;

    let settings = keyimage::PreviewSettings {
        clear_rgba: args.background.as_deref().map(parse_hex_rgba).transpose()?,
        apply_hue: !args.no_hue,
    };

    let sprite = keyimage::load_frame(&sheet, params.frame)
        .with_context(|| format!("load frame {} for seed {}", params.frame, args.place.seed))?;
    let preview = keyimage::render_preview(&params, container, &sprite, &settings)?;
    preview.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_seed(args: SeedArgs) -> anyhow::Result<()> {
    match args.check {
        Some(text) => match keyimage::parse_seed_input(&text)? {
            Some(seed) => println!("{}", seed.0),
            None => println!("unset"),
        },
        None => println!("{}", keyimage::random_seed_thread().0),
    }
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> anyhow::Result<()> {
    if args.from > args.to {
        anyhow::bail!("--from ({}) must be <= --to ({})", args.from, args.to);
    }
    let container = keyimage::ContainerSize::new(args.container)?;
    let stats = keyimage::sweep(args.from..args.to, container);
    let fingerprint = keyimage::fingerprint_sweep(args.from..args.to, container);

    println!("seeds:       {}..{} ({} total)", args.from, args.to, stats.total);
    println!("container:   {}px", container.px());
    for kind in [
        keyimage::RotationKind::Cardinal,
        keyimage::RotationKind::Diagonal,
        keyimage::RotationKind::Free,
    ] {
        println!(
            "rotation {:<9} {:>6} ({:5.1}%)",
            format!("{kind:?}:").to_lowercase(),
            stats.rotation_count(kind),
            stats.share(kind) * 100.0
        );
    }
    for bucket in [
        keyimage::ScaleBucket::Small,
        keyimage::ScaleBucket::Medium,
        keyimage::ScaleBucket::Large,
    ] {
        println!(
            "scale x{:<4}     {:>6} ({:5.1}%)",
            bucket.factor(),
            stats.scale_count(bucket),
            stats.scale_share(bucket) * 100.0
        );
    }
    println!("jittered:    {}", stats.jittered);
    println!("frames:      {:?}", stats.frames);
    println!("hue bins:    {:?}", stats.hue_bins);
    println!("fingerprint: {fingerprint:016x}");
    Ok(())
}

fn parse_hex_rgba(s: &str) -> anyhow::Result<[u8; 4]> {
    let hex = s.trim().trim_start_matches('#');
    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("background '{s}' must be RRGGBB or RRGGBBAA hex");
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    let alpha = if hex.len() == 8 { byte(6)? } else { 255 };
    Ok([byte(0)?, byte(2)?, byte(4)?, alpha])
}
