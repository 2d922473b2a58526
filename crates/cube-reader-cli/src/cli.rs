//! Headless commands
//!
//! Usage:
//!   cube-reader expand [STATE] [--full]          Unfolded diagram
//!   cube-reader face <FACETS> [--rotate <N>]     Single face diagram
//!   cube-reader rotate <STATE> <FACE> <N>        Turn one face of a state
//!   cube-reader classify <R,G,B> [--side <S>]    Nearest palette color
//!   cube-reader read [--layout <FILE>] <IMAGE>...  Read a state from screenshots
//!   cube-reader probe [--layout <FILE>]          Walk the pointer over a layout
//!
//! Options:
//!   --config <FILE>    Use a specific config file
//!   --json             Output in JSON format

use std::path::{Path, PathBuf};

use cube_reader_core::config::Config;
use cube_reader_core::diagram::{DiagramStyle, Renderer};
use cube_reader_core::palette::{Rgb, Side};
use cube_reader_core::rotate::rotate_str;
use cube_reader_core::state::{Face, FacetState, StateBuilder};
use cube_reader_core::vision::{
    check_positions, FileSource, ImageSource, SampleLayout, SampledFacet, Sampler, ScreenSource,
    SystemPointer,
};

/// Where one view of the cube comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSource {
    File(PathBuf),
    Screen,
}

/// One screenshot and the layout used to sample it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub source: ViewSource,
    /// `None` means the layout from the config file
    pub layout: Option<PathBuf>,
}

/// CLI command to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Expand {
        state: String,
        style: DiagramStyle,
    },
    Face {
        facets: String,
        turns: i32,
    },
    Rotate {
        state: String,
        face: Face,
        turns: i32,
    },
    Classify {
        sample: Rgb,
        side: Side,
    },
    Read {
        views: Vec<View>,
        style: DiagramStyle,
    },
    Probe {
        layout: Option<PathBuf>,
    },
}

/// CLI options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub json: bool,
    pub config: Option<PathBuf>,
}

/// Parse CLI arguments and return command + options
pub fn parse_args(args: &[String]) -> Result<(CliCommand, CliOptions), String> {
    let mut options = CliOptions::default();
    let mut style = DiagramStyle::Compact;
    let mut turns: Option<i32> = None;
    let mut side = Side::default();
    let mut layout: Option<PathBuf> = None;
    let mut views = Vec::new();
    let mut positional: Vec<&str> = Vec::new();

    let (name, rest) = args
        .split_first()
        .ok_or_else(|| "No command specified".to_string())?;

    let mut i = 0;
    while i < rest.len() {
        let arg = rest[i].as_str();
        match arg {
            "--json" => options.json = true,
            "--full" => style = DiagramStyle::Full,
            "--compact" => style = DiagramStyle::Compact,
            "--screen" => views.push(View {
                source: ViewSource::Screen,
                layout: layout.clone(),
            }),
            "--config" | "--rotate" | "--side" | "--layout" => {
                i += 1;
                let value = rest
                    .get(i)
                    .ok_or_else(|| format!("{} requires a value", arg))?;
                match arg {
                    "--config" => options.config = Some(PathBuf::from(value)),
                    "--rotate" => turns = Some(parse_turns(value)?),
                    "--side" => side = value.parse()?,
                    _ => layout = Some(PathBuf::from(value)),
                }
            }
            _ if arg.starts_with("--") => return Err(format!("Unknown option: {}", arg)),
            _ => {
                if name == "read" {
                    views.push(View {
                        source: ViewSource::File(PathBuf::from(arg)),
                        layout: layout.clone(),
                    });
                } else {
                    positional.push(arg);
                }
            }
        }
        i += 1;
    }

    let command = match (name.as_str(), positional.as_slice()) {
        ("expand", []) => CliCommand::Expand {
            state: String::new(),
            style,
        },
        ("expand", [state]) => CliCommand::Expand {
            state: state.to_string(),
            style,
        },
        ("face", [facets]) => CliCommand::Face {
            facets: facets.to_string(),
            turns: turns.unwrap_or(0),
        },
        ("rotate", [state, face, n]) => CliCommand::Rotate {
            state: state.to_string(),
            face: face.parse()?,
            turns: parse_turns(n)?,
        },
        ("classify", [sample]) => CliCommand::Classify {
            sample: sample.parse()?,
            side,
        },
        ("read", []) => {
            if views.is_empty() {
                return Err("read requires at least one image or --screen".to_string());
            }
            CliCommand::Read { views, style }
        }
        ("probe", []) => CliCommand::Probe { layout },
        ("expand" | "face" | "rotate" | "classify" | "read" | "probe", _) => {
            return Err(format!("Wrong number of arguments for {}", name))
        }
        _ => return Err(format!("Unknown command: {}", name)),
    };

    Ok((command, options))
}

fn parse_turns(s: &str) -> Result<i32, String> {
    s.parse()
        .map_err(|_| format!("Invalid number of quarter turns: {}", s))
}

/// Run CLI command
pub fn run(command: CliCommand, options: CliOptions) -> anyhow::Result<()> {
    let config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    tracing::debug!("Running {:?}", command);

    match command {
        CliCommand::Expand { state, style } => run_expand(&state, style, &options),
        CliCommand::Face { facets, turns } => run_face(&facets, turns, &options),
        CliCommand::Rotate { state, face, turns } => run_rotate(&state, face, turns, &options),
        CliCommand::Classify { sample, side } => run_classify(&config, sample, side, &options),
        CliCommand::Read { views, style } => run_read(&config, &views, style, &options),
        CliCommand::Probe { layout } => run_probe(&config, layout.as_deref()),
    }
}

fn run_expand(state: &str, style: DiagramStyle, options: &CliOptions) -> anyhow::Result<()> {
    let diagram = Renderer::builtin().expand_str(state, style)?;
    if options.json {
        println!("{}", serde_json::json!({ "diagram": diagram }));
    } else {
        println!("{}", diagram);
    }
    Ok(())
}

fn run_face(facets: &str, turns: i32, options: &CliOptions) -> anyhow::Result<()> {
    let rotated = rotate_str(facets, turns)?;
    let diagram = Renderer::builtin().expand_face(&rotated)?;
    if options.json {
        println!(
            "{}",
            serde_json::json!({ "facets": rotated, "diagram": diagram })
        );
    } else {
        println!("{}", diagram);
    }
    Ok(())
}

fn run_rotate(state: &str, face: Face, turns: i32, options: &CliOptions) -> anyhow::Result<()> {
    let state: FacetState = state.parse()?;
    let turned = state.rotate_face(face, turns);
    if options.json {
        println!(
            "{}",
            serde_json::json!({
                "face": face.to_string(),
                "turns": turns,
                "state": turned,
            })
        );
    } else {
        println!("{}", turned);
    }
    Ok(())
}

fn run_classify(
    config: &Config,
    sample: Rgb,
    side: Side,
    options: &CliOptions,
) -> anyhow::Result<()> {
    let (color, distance) = config
        .palette
        .classify_with_distance(sample, side)
        .ok_or_else(|| anyhow::anyhow!("Palette has no colors"))?;
    if options.json {
        println!(
            "{}",
            serde_json::json!({
                "sample": sample,
                "side": side,
                "color": color,
                "distance": distance,
            })
        );
    } else {
        println!("{}", color);
    }
    Ok(())
}

fn load_layout(config: &Config, path: Option<&Path>) -> anyhow::Result<SampleLayout> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config
            .layout_path()
            .ok_or_else(|| anyhow::anyhow!("No layout given and none configured"))?,
    };
    Ok(SampleLayout::load(&path)?)
}

fn run_read(
    config: &Config,
    views: &[View],
    style: DiagramStyle,
    options: &CliOptions,
) -> anyhow::Result<()> {
    let sampler = Sampler::new(&config.palette);
    let mut builder = StateBuilder::new();
    let mut sampled: Vec<SampledFacet> = Vec::new();
    let mut sources = Vec::new();

    for view in views {
        let layout = load_layout(config, view.layout.as_deref())?;
        let shot = match &view.source {
            ViewSource::File(path) => FileSource::new(path)
                .with_logical_size(config.screen_size)
                .capture()?,
            ViewSource::Screen => ScreenSource::new(config.screen_size).capture()?,
        };
        sampled.extend(sampler.sample_into(&shot.image, &layout, &mut builder)?);
        sources.push(serde_json::json!({
            "source": shot.source,
            "captured_at": shot.captured_at,
        }));
    }

    let partial = Renderer::builtin().expand_chars(&builder.partial_chars(), style);
    let state = builder.finish();

    if options.json {
        println!(
            "{}",
            serde_json::json!({
                "views": sources,
                "facets": sampled,
                "state": state.as_ref().ok(),
                "error": state.as_ref().err().map(|e| e.to_string()),
                "diagram": partial,
            })
        );
    } else {
        println!("{}", partial);
        println!();
    }

    let state = state?;
    if !options.json {
        println!("{}", state);
    }
    Ok(())
}

fn run_probe(config: &Config, layout: Option<&Path>) -> anyhow::Result<()> {
    let layout = load_layout(config, layout)?;
    let positions = layout.coordinates();
    eprintln!(
        "Moving pointer over {} sample points ({} ms apart)",
        positions.len(),
        config.settle_ms
    );
    check_positions(&mut SystemPointer, &positions, config.settle())?;
    Ok(())
}

/// Print CLI help
pub fn print_help() {
    println!("cube-reader v{}", env!("CARGO_PKG_VERSION"));
    println!("Read, expand and rotate Rubik's cube facet states");
    println!();
    println!("USAGE:");
    println!("    cube-reader <command> [options]");
    println!();
    println!("COMMANDS:");
    println!("    expand [STATE]              Print the unfolded cube (solved if no state)");
    println!("    face <FACETS>               Print a single 9-facet face");
    println!("    rotate <STATE> <FACE> <N>   Turn one face N clockwise quarter turns");
    println!("    classify <R,G,B>            Print the nearest palette color");
    println!("    read <IMAGE>...             Read a cube state from screenshots");
    println!("    probe                       Move the pointer over each sample point");
    println!();
    println!("OPTIONS:");
    println!("    --full                      Use the framed diagram layout");
    println!("    --rotate <N>                Rotate the face before printing (face)");
    println!("    --side <top|left|right>     Side the sample was taken on (classify)");
    println!("    --layout <FILE>             Sample layout for the following images");
    println!("    --screen                    Capture the screen as the next view (read)");
    println!("    --config <FILE>             Use a specific config file");
    println!("    --json                      Output in JSON format");
    println!("    --help                      Show this help message");
    println!();
    println!("STATES:");
    println!("    54 facet letters in face order U R F D L B, e.g.");
    println!("    {}", cube_reader_core::SOLVED);
    println!();
    println!("EXAMPLES:");
    println!("    cube-reader expand --full");
    println!("    cube-reader face 123456789 --rotate -1");
    println!("    cube-reader classify 250,250,250 --side left");
    println!("    cube-reader read --layout front.json front.png --layout back.json back.png");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_expand() {
        let (cmd, _) = parse_args(&args(&["expand"])).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Expand {
                state: String::new(),
                style: DiagramStyle::Compact
            }
        );

        let (cmd, opts) = parse_args(&args(&["expand", "--full", "--json"])).unwrap();
        assert!(matches!(
            cmd,
            CliCommand::Expand {
                style: DiagramStyle::Full,
                ..
            }
        ));
        assert!(opts.json);
    }

    #[test]
    fn test_parse_face_negative_turns() {
        let (cmd, _) = parse_args(&args(&["face", "123456789", "--rotate", "-1"])).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Face {
                facets: "123456789".to_string(),
                turns: -1
            }
        );
    }

    #[test]
    fn test_parse_rotate() {
        let (cmd, _) = parse_args(&args(&["rotate", "STATE", "f", "-3"])).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Rotate {
                state: "STATE".to_string(),
                face: Face::F,
                turns: -3
            }
        );
        assert!(parse_args(&args(&["rotate", "STATE", "X", "1"])).is_err());
    }

    #[test]
    fn test_parse_classify() {
        let (cmd, _) = parse_args(&args(&["classify", "1,2,3", "--side", "right"])).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Classify {
                sample: Rgb::new(1, 2, 3),
                side: Side::Right
            }
        );
        assert!(parse_args(&args(&["classify", "1,2"])).is_err());
    }

    #[test]
    fn test_parse_read_pairs_layouts() {
        let (cmd, _) = parse_args(&args(&[
            "read", "--layout", "a.json", "a.png", "--layout", "b.json", "b.png", "--screen",
        ]))
        .unwrap();
        let CliCommand::Read { views, .. } = cmd else {
            panic!("expected read command");
        };
        assert_eq!(views.len(), 3);
        assert_eq!(views[0].source, ViewSource::File(PathBuf::from("a.png")));
        assert_eq!(views[0].layout, Some(PathBuf::from("a.json")));
        assert_eq!(views[1].layout, Some(PathBuf::from("b.json")));
        assert_eq!(views[2].source, ViewSource::Screen);
        assert_eq!(views[2].layout, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["solve"])).is_err());
        assert!(parse_args(&args(&["read"])).is_err());
        assert!(parse_args(&args(&["face"])).is_err());
        assert!(parse_args(&args(&["face", "x", "--rotate"])).is_err());
        assert!(parse_args(&args(&["expand", "--bogus"])).is_err());
    }
}
