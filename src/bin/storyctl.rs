use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use storyboard_engine::prompt::Style;
use storyboard_engine::speech::map_emotion;
use storyboard_engine::{storyboard, Config, EmotionClassifier, Segmenter, SpeechSynthesizer, TieredImageGenerator};

#[derive(Parser, Debug)]
#[command(name = "storyctl", about = "CLI for the Storyboard Engine", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Storyboard pipeline commands
    Storyboard {
        #[command(subcommand)]
        cmd: StoryboardCmd,
    },
    /// Speech pipeline commands
    Speech {
        #[command(subcommand)]
        cmd: SpeechCmd,
    },
}

#[derive(Subcommand, Debug)]
enum StoryboardCmd {
    /// Generate a storyboard from narrative text
    Generate {
        /// Narrative text to visualize
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Read the narrative from a file instead
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Art style: cinematic, anime, cyberpunk, pixar, watercolor
        #[arg(long, default_value = "cinematic")]
        style: String,
        /// Print panels as pretty JSON
        #[arg(long)]
        json: bool,
    },
    /// Segment text without generating any images
    Segment {
        #[arg(long)]
        text: String,
    },
}

#[derive(Subcommand, Debug)]
enum SpeechCmd {
    /// Detect sentiment and print the prosody triple
    Analyze {
        #[arg(long)]
        text: String,
    },
    /// Synthesize modulated speech to an audio file
    Synthesize {
        #[arg(long)]
        text: String,
        /// Output path (defaults to a fresh file in the configured audio dir)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Config::dotenv_load();
    let cfg = Config::new().expect("Failed to load config");
    let cli = Cli::parse();

    match cli.command {
        Commands::Storyboard { cmd } => match cmd {
            StoryboardCmd::Generate {
                text,
                file,
                style,
                json,
            } => {
                let narrative = match (text, file) {
                    (Some(t), _) => t,
                    (None, Some(p)) => tokio::fs::read_to_string(&p).await?,
                    (None, None) => return Err("Either --text or --file is required".into()),
                };
                std::fs::create_dir_all(&cfg.image_dir)?;
                let segmenter = Segmenter::from_config(&cfg);
                let generator = Arc::new(TieredImageGenerator::from_config(&cfg));
                let panels = storyboard::build_storyboard(
                    &segmenter,
                    generator,
                    &narrative,
                    Style::from_tag(&style),
                )
                .await?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&panels)?);
                } else {
                    for panel in &panels {
                        println!("[{}] {}", panel.panel_id, panel.original_text);
                        println!("    image: {} ({})", panel.image_url, panel.engine_used);
                    }
                }
            }
            StoryboardCmd::Segment { text } => {
                let segmenter = Segmenter::from_config(&cfg);
                for (i, segment) in segmenter.segment(&text).await.iter().enumerate() {
                    println!("{}. {}", i + 1, segment);
                }
            }
        },
        Commands::Speech { cmd } => match cmd {
            SpeechCmd::Analyze { text } => {
                let classifier =
                    EmotionClassifier::new(cfg.emotion_api_url.clone(), cfg.emotion_api_key.clone());
                let analysis = classifier.analyze(&text).await?;
                let prosody = map_emotion(&analysis.primary_emotion);
                println!("emotion: {} ({:.3})", analysis.primary_emotion, analysis.confidence);
                println!(
                    "rate: {}  pitch: {}  volume: {}",
                    prosody.rate, prosody.pitch, prosody.volume
                );
            }
            SpeechCmd::Synthesize { text, out } => {
                std::fs::create_dir_all(&cfg.audio_dir)?;
                let classifier =
                    EmotionClassifier::new(cfg.emotion_api_url.clone(), cfg.emotion_api_key.clone());
                let synthesizer = SpeechSynthesizer::new(
                    cfg.tts_url.clone(),
                    cfg.tts_voice.clone(),
                    cfg.audio_dir.clone(),
                );
                let analysis = classifier.analyze(&text).await?;
                let prosody = map_emotion(&analysis.primary_emotion);
                let path = synthesizer.synthesize(&text, &prosody).await?;
                let final_path = match out {
                    Some(out) => {
                        tokio::fs::rename(&path, &out).await?;
                        out.display().to_string()
                    }
                    None => path,
                };
                println!("emotion: {}", analysis.primary_emotion);
                println!("audio: {}", final_path);
            }
        },
    }

    Ok(())
}
