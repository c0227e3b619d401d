use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use serde::de::DeserializeOwned;

use slidecast::{
    AspectFormat, BrandKit, Config, ContentClient, PinningClient, RenderRequest, RenderedVideo,
    ServiceNarrator, Slide, SlideRasterizer, SlideRenderer, TtsLine, VideoAssembler,
    VideoRenderResponse,
};

#[derive(Parser, Debug)]
#[command(name = "slidecast", version, about = "Turn a topic into a narrated slide video")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draft a slide deck for a topic.
    Generate(GenerateArgs),
    /// Rewrite one slide following an instruction.
    Update(UpdateArgs),
    /// Synthesize narration audio for a line of text.
    Tts(TtsArgs),
    /// Render a single slide as a PNG.
    Frame(FrameArgs),
    /// Assemble a video from a render request JSON (requires `ffmpeg` and `ffprobe`).
    Render(RenderArgs),
    /// Upload a file to IPFS through Pinata.
    Pin(PinArgs),
    /// Generate slides for a topic, assemble the video and optionally pin it.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[arg(long)]
    topic: String,

    /// Number of slides to request.
    #[arg(long, default_value_t = 5)]
    count: u32,

    #[arg(long, default_value = slidecast::client::content::DEFAULT_STYLE)]
    style: String,

    /// Write the slides JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct UpdateArgs {
    #[arg(long)]
    topic: String,

    #[arg(long)]
    instruction: String,

    /// Current slide JSON.
    #[arg(long)]
    slide: PathBuf,

    #[arg(long, default_value = slidecast::client::content::DEFAULT_STYLE)]
    style: String,

    /// Write the updated slide JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TtsArgs {
    /// Text to speak.
    #[arg(long)]
    text: String,

    #[arg(long, default_value = "en-US")]
    language: String,

    #[arg(long)]
    provider: Option<String>,

    #[arg(long)]
    voice: Option<String>,

    /// Output audio file.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Slide JSON.
    #[arg(long)]
    slide: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Aspect format (16:9, 4:5 or 9:16); anything else falls back to 16:9.
    #[arg(long, default_value = "16:9")]
    format: String,

    /// Brand kit JSON.
    #[arg(long)]
    brand: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Render request JSON.
    #[arg(long)]
    request: PathBuf,

    /// Directory for the finished video (defaults to SLIDECAST_OUTPUT_DIR or `outputs`).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Pin the finished video to IPFS.
    #[arg(long)]
    pin: bool,
}

#[derive(Parser, Debug)]
struct PinArgs {
    #[arg(long)]
    file: PathBuf,

    /// Name recorded by the pinning service (defaults to the file name).
    #[arg(long)]
    name: Option<String>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    #[arg(long)]
    topic: String,

    #[arg(long, default_value_t = 2)]
    count: u32,

    #[arg(long, default_value = slidecast::client::content::DEFAULT_STYLE)]
    style: String,

    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip narration synthesis; slides render with silent tracks.
    #[arg(long)]
    no_audio: bool,

    /// Pin the finished video to IPFS.
    #[arg(long)]
    pin: bool,

    /// Save the generated project under this id on the content service.
    #[arg(long)]
    save_project: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = Config::from_env();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(&cfg, args),
        Command::Update(args) => cmd_update(&cfg, args),
        Command::Tts(args) => cmd_tts(&cfg, args),
        Command::Frame(args) => cmd_frame(&cfg, args),
        Command::Render(args) => cmd_render(&cfg, args),
        Command::Pin(args) => cmd_pin(&cfg, args),
        Command::Run(args) => cmd_run(&cfg, args),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON '{}'", path.display()))
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize JSON")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_generate(cfg: &Config, args: GenerateArgs) -> anyhow::Result<()> {
    let client = ContentClient::new(cfg)?;
    let slides = client.generate_slides(&args.topic, args.count, &args.style)?;
    write_json(&slides, args.out.as_deref())
}

fn cmd_update(cfg: &Config, args: UpdateArgs) -> anyhow::Result<()> {
    let current: Slide = read_json(&args.slide, "slide")?;
    let client = ContentClient::new(cfg)?;
    let updated = client.update_slide(&args.topic, &args.instruction, &current, &args.style)?;
    write_json(&updated, args.out.as_deref())
}

fn cmd_tts(cfg: &Config, args: TtsArgs) -> anyhow::Result<()> {
    let narrator = ServiceNarrator::new(ContentClient::new(cfg)?);
    let payload = slidecast::narration::synthesize(
        &narrator,
        vec![TtsLine::new(slidecast::narration::PRESENTER, args.text)],
        &args.language,
        args.provider,
        args.voice,
    )?;
    let bytes = slidecast::narration::decode_audio_base64(&payload)?;
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write audio '{}'", args.out.display()))?;
    eprintln!("wrote {} ({} bytes)", args.out.display(), bytes.len());
    Ok(())
}

fn cmd_frame(cfg: &Config, args: FrameArgs) -> anyhow::Result<()> {
    let slide: Slide = read_json(&args.slide, "slide")?;
    let brand: Option<BrandKit> = args
        .brand
        .as_deref()
        .map(|p| read_json(p, "brand kit"))
        .transpose()?;
    let format = AspectFormat::parse_lenient(&args.format);

    let mut renderer = SlideRenderer::new(cfg)?;
    let out = renderer.render(&slide, &args.out, format, brand.as_ref())?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_render(cfg: &Config, args: RenderArgs) -> anyhow::Result<()> {
    let request: RenderRequest = read_json(&args.request, "render request")?;
    request.validate()?;
    let output_dir = args.output_dir.unwrap_or_else(|| cfg.output_dir.clone());

    let video = VideoAssembler::from_config(cfg)?.assemble(&request, &output_dir)?;
    let response = finish(cfg, video, args.pin)?;
    write_json(&response, None)
}

fn cmd_pin(cfg: &Config, args: PinArgs) -> anyhow::Result<()> {
    let pinned = PinningClient::new(cfg)?.upload_file(&args.file, args.name.as_deref())?;
    write_json(&pinned, None)
}

fn cmd_run(cfg: &Config, args: RunArgs) -> anyhow::Result<()> {
    let client = ContentClient::new(cfg)?;
    let slides = client.generate_slides(&args.topic, args.count, &args.style)?;
    for (i, s) in slides.iter().enumerate() {
        tracing::info!(
            slide = i + 1,
            title = %s.title,
            notes_chars = s.speaker_notes.chars().count(),
            "generated"
        );
    }

    let mut request = RenderRequest::new(args.topic.clone(), slides);
    request.generate_audio = !args.no_audio;
    let output_dir = args.output_dir.unwrap_or_else(|| cfg.output_dir.clone());

    let video = VideoAssembler::from_config(cfg)?.assemble(&request, &output_dir)?;
    let response = finish(cfg, video, args.pin)?;

    if let Some(project_id) = args.save_project.as_deref() {
        client.save_project(project_id, &args.topic, &request.slides, true)?;
        tracing::info!(project_id, "project saved");
    }

    write_json(&response, None)
}

/// Optionally pin the video, then describe it for the caller.
fn finish(cfg: &Config, video: RenderedVideo, pin: bool) -> anyhow::Result<VideoRenderResponse> {
    let mut response = VideoRenderResponse {
        video_path: video.path.display().to_string(),
        video_filename: video.filename.clone(),
        ipfs_url: None,
        gateway_url: None,
        ipfs_hash: None,
    };
    if pin {
        let pinned = PinningClient::new(cfg)?.upload_file(&video.path, Some(&video.filename))?;
        tracing::info!(hash = %pinned.ipfs_hash, "video pinned");
        response.ipfs_url = Some(pinned.ipfs_url);
        response.gateway_url = Some(pinned.gateway_url);
        response.ipfs_hash = Some(pinned.ipfs_hash);
    }
    Ok(response)
}
