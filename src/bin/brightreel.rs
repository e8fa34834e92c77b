use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brightreel::{
    Category, EngineConfig, FontBook, FrameIndex, Generator, RecordingLibrary, RenderSettings,
    Resolution,
};

#[derive(Parser, Debug)]
#[command(name = "brightreel", version)]
struct Cli {
    /// Engine config JSON. Environment overrides apply on top.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Produce a clip for a prompt (requires `ffmpeg` on PATH for synthesized output).
    Generate(GenerateArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print the category a prompt maps to.
    Classify(ClassifyArgs),
    /// Look up a pre-made recording for a prompt.
    Resolve(ResolveArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    prompt: String,

    /// Clip length in seconds.
    #[arg(long)]
    duration: Option<f64>,

    #[arg(long)]
    fps: Option<u32>,

    /// Directory the clip is written to.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[arg(long)]
    recordings_dir: Option<PathBuf>,

    /// Render frames on the calling thread.
    #[arg(long)]
    sequential: bool,

    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Category to draw, e.g. `brush_teeth`. Classified from the prompt when omitted.
    #[arg(long)]
    category: Option<Category>,

    /// Prompt text; the default scene prints it as a caption.
    #[arg(long, default_value = "")]
    prompt: String,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Clip length in frames that `frame` is a position in.
    #[arg(long, default_value_t = 72)]
    total: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    prompt: String,
}

#[derive(Args, Debug)]
struct ResolveArgs {
    prompt: String,

    #[arg(long)]
    recordings_dir: Option<PathBuf>,

    /// Copy the match into this directory instead of only reporting it.
    #[arg(long)]
    copy_to: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brightreel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Generate(args) => cmd_generate(config, args),
        Command::Frame(args) => cmd_frame(&config, args),
        Command::Classify(args) => cmd_classify(args),
        Command::Resolve(args) => cmd_resolve(config, args),
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<EngineConfig> {
    let cfg = match path {
        Some(p) => EngineConfig::from_path(p)?,
        None => EngineConfig::default(),
    };
    Ok(cfg.with_env_overrides())
}

fn cmd_generate(mut config: EngineConfig, args: GenerateArgs) -> anyhow::Result<()> {
    if let Some(d) = args.duration {
        config.duration_seconds = d;
    }
    if let Some(fps) = args.fps {
        config.frame_rate = fps;
    }
    if let Some(dir) = args.out_dir {
        config.output_dir = dir;
    }
    if let Some(dir) = args.recordings_dir {
        config.recordings_dir = dir;
    }
    if args.sequential {
        config.threading.parallel = false;
    }
    if args.threads.is_some() {
        config.threading.threads = args.threads;
    }

    let generator = Generator::new(config)?;
    let req = generator.request(args.prompt)?;
    let out = generator.generate(&req)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&out).with_context(|| "serialize output")?
    );
    Ok(())
}

fn cmd_frame(config: &EngineConfig, args: FrameArgs) -> anyhow::Result<()> {
    if args.total == 0 || args.frame >= args.total {
        anyhow::bail!("--frame must be < --total (and --total > 0)");
    }
    let category = args
        .category
        .unwrap_or_else(|| brightreel::classify(&args.prompt));
    let settings = RenderSettings {
        fonts: FontBook::discover(config.font_path.as_deref()),
        ..RenderSettings::default()
    };
    let mut backend = brightreel::CpuBackend::new(settings);
    let frame = brightreel::render_frame(
        category,
        &args.prompt,
        FrameIndex(args.frame),
        args.total,
        &mut backend,
    )?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    // Frames are opaque, so premultiplied bytes equal straight RGBA.
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {} ({category})", args.out.display());
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    println!("{}", brightreel::classify(&args.prompt));
    Ok(())
}

fn cmd_resolve(config: EngineConfig, args: ResolveArgs) -> anyhow::Result<()> {
    let root = args.recordings_dir.unwrap_or(config.recordings_dir);
    let library = RecordingLibrary::new(root)?;

    let Some(dest_dir) = args.copy_to else {
        match library.find(&args.prompt)? {
            Some(m) => println!("{} ({:?})", m.source.display(), m.rule),
            None => println!("miss"),
        }
        return Ok(());
    };

    match library.resolve(&args.prompt, &dest_dir, &config.filename_prefix)? {
        Resolution::Found { source, path, .. } => {
            println!("{} -> {}", source.display(), path.display());
        }
        Resolution::Miss => println!("miss"),
    }
    Ok(())
}
