use anyhow::Context;
use clap::{Parser, Subcommand};
use scrollfolio_input::{InputAction, InputEffect, InputState, Viewport};
use scrollfolio_render::{DebugTextRenderer, RenderView, Renderer};
use scrollfolio_scene::{DemoConfig, FrameInput, FrameReport, HeaderIntro, Scene};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scrollfolio-cli", about = "Headless tools for the scrollfolio demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Demo config (YAML); built-in defaults when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and the effective config
    Info,
    /// Run the frame loop without a window and dump the final state
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "120")]
        frames: u32,
        /// Seconds per frame
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
        /// Page scroll offset in logical pixels, applied before the first frame
        #[arg(long)]
        scroll_to: Option<f32>,
        /// Pointer position in logical pixels, as `x,y`
        #[arg(long, value_parser = parse_point)]
        cursor: Option<(f32, f32)>,
        /// Viewport size in logical pixels, as `width,height`
        #[arg(long, value_parser = parse_point, default_value = "1280,720")]
        viewport: (f32, f32),
        /// Print a JSON frame report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Sample the header intro timeline
    Timeline {
        /// Sampling interval in seconds
        #[arg(short, long, default_value = "0.5")]
        step: f32,
    },
    /// Print mesh and particle counts
    Geometry,
}

fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| format!("bad number `{v}`: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

struct Simulation {
    scene: Scene,
    input: InputState,
    intro: HeaderIntro,
}

impl Simulation {
    fn new(config: &DemoConfig, viewport: (f32, f32)) -> Self {
        let scene = Scene::build(config);
        let input = InputState::new(
            Viewport::default().with_pixel_ratio_cap(config.pixel_ratio_cap),
            scene.section_count(),
        );
        let mut sim = Self {
            scene,
            input,
            intro: HeaderIntro::from_config(&config.headers),
        };
        sim.apply(InputAction::Resized {
            width: viewport.0,
            height: viewport.1,
            scale_factor: 1.0,
        });
        sim
    }

    fn apply(&mut self, action: InputAction) {
        for effect in self.input.apply(action) {
            match effect {
                InputEffect::SectionChanged(change) => {
                    self.scene.start_section_spin(change.to);
                }
                InputEffect::Resized => self.scene.set_aspect(self.input.viewport().aspect()),
                InputEffect::NormalsToggled(on) => self.scene.set_normals(on),
                InputEffect::DebugPanelToggled(_) => {}
            }
        }
    }

    fn run(&mut self, frames: u32, dt: f32) {
        for _ in 0..frames {
            let frame = FrameInput::from_input(&self.input);
            self.scene.tick(dt, &frame);
            self.intro.advance(dt);
        }
        tracing::debug!(frames, dt, frame = self.scene.frame(), "simulation finished");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("scrollfolio-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", scrollfolio_common::crate_info());
            println!("anim: {}", scrollfolio_anim::crate_info());
            println!("input: {}", scrollfolio_input::crate_info());
            println!("scene: {}", scrollfolio_scene::crate_info());
            println!("render: {}", scrollfolio_render::crate_info());
            println!();
            println!("# effective config");
            print!("{}", config.to_yaml()?);
        }
        Commands::Simulate {
            frames,
            dt,
            scroll_to,
            cursor,
            viewport,
            json,
        } => {
            let mut sim = Simulation::new(&config, viewport);
            if let Some((x, y)) = cursor {
                sim.apply(InputAction::PointerMoved { x, y });
            }
            if let Some(y) = scroll_to {
                sim.apply(InputAction::ScrollTo(y));
            }
            sim.run(frames, dt);

            if json {
                let report = FrameReport::capture(&sim.scene);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serialize frame report")?
                );
            } else {
                let renderer = DebugTextRenderer::new();
                print!(
                    "{}",
                    renderer.render(&sim.scene, &RenderView::from_scene(&sim.scene))
                );
                let scroll = sim.input.scroll();
                println!(
                    "Scroll: {:.0}px section={}/{}",
                    scroll.scroll_y(),
                    scroll.section() + 1,
                    scroll.sections()
                );
                println!(
                    "Intro: {:.2}s / {:.2}s{}",
                    sim.intro.elapsed(),
                    sim.intro.duration(),
                    if sim.intro.is_complete() { " (done)" } else { "" }
                );
            }
        }
        Commands::Timeline { step } => {
            anyhow::ensure!(step > 0.0, "step must be positive, got {step}");
            let intro = HeaderIntro::from_config(&config.headers);
            let duration = intro.duration();
            println!("Header intro: {} headers, {:.2}s", intro.len(), duration);
            for header in &config.headers {
                println!(
                    "  {:<14} {:>7.0} -> {:<7.0} {} over {:.1}s at {:.1}s",
                    header.text, header.from_x, header.to_x, header.ease, header.duration, header.at
                );
            }
            let samples = (duration / step).ceil() as u32;
            for i in 0..=samples {
                let t = (i as f32 * step).min(duration);
                let offsets: Vec<String> = intro
                    .sample(t)
                    .into_iter()
                    .map(|(_, x)| format!("{x:>8.1}"))
                    .collect();
                println!("t={t:>6.2}s {}", offsets.join(" "));
            }
        }
        Commands::Geometry => {
            let scene = Scene::build(&config);
            for section in scene.sections() {
                let mesh = section.shape.build();
                println!(
                    "{:<10} vertices={:>5} triangles={:>5} radius={:.2}",
                    section.name,
                    mesh.vertex_count(),
                    mesh.triangle_count(),
                    mesh.bounding_radius()
                );
            }
            println!("particles  count={}", scene.particles().len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> DemoConfig {
        let mut config = DemoConfig::default();
        config.particles.count = 8;
        config
    }

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("640,360"), Ok((640.0, 360.0)));
        assert_eq!(parse_point(" 1.5 , -2 "), Ok((1.5, -2.0)));
        assert!(parse_point("640").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn cli_parses_simulate_flags() {
        let cli = Cli::try_parse_from([
            "scrollfolio-cli",
            "simulate",
            "--frames",
            "10",
            "--scroll-to",
            "720",
            "--cursor",
            "0,0",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Simulate {
                frames,
                scroll_to,
                cursor,
                viewport,
                json,
                ..
            } => {
                assert_eq!(frames, 10);
                assert_eq!(scroll_to, Some(720.0));
                assert_eq!(cursor, Some((0.0, 0.0)));
                assert_eq!(viewport, (1280.0, 720.0));
                assert!(json);
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn scroll_to_spins_the_new_section() {
        let mut sim = Simulation::new(&small_config(), (1280.0, 720.0));
        sim.apply(InputAction::ScrollTo(1440.0));
        assert!(sim.scene.sections()[2].is_spinning());
        sim.run(1, 1.0 / 60.0);
        assert_eq!(sim.scene.rig().camera.position.y, -8.0);
    }

    #[test]
    fn simulation_sets_camera_aspect_from_viewport() {
        let sim = Simulation::new(&small_config(), (1000.0, 500.0));
        assert_eq!(sim.scene.rig().camera.aspect, 2.0);
    }

    #[test]
    fn corner_cursor_pulls_rig() {
        let mut sim = Simulation::new(&small_config(), (1280.0, 720.0));
        sim.apply(InputAction::PointerMoved { x: 1280.0, y: 0.0 });
        sim.run(600, 1.0 / 60.0);
        let offset = sim.scene.rig().position;
        assert!((offset.x - 0.25).abs() < 1e-3);
        assert!((offset.y - 0.25).abs() < 1e-3);
    }
}
