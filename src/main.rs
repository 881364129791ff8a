use star_raiders::autopilot::Autopilot;
use star_raiders::cli;
use star_raiders::io::{OutputWriter, TerminalIO};
use star_raiders::ui::presenters::{EventPresenter, StatusPresenter};
use star_raiders::{FrameInput, GameEngine, GameResult, SimConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> GameResult<()> {
    let args = cli::parse()?;
    if args.help {
        cli::print_usage();
        return Ok(());
    }

    let config = SimConfig::resolve(&args)?;
    let mut output = TerminalIO;

    output.writeln("*** STAR RAIDERS ***");
    output.writeln("");

    let mut engine = GameEngine::new(config.seed, config.difficulty);
    StatusPresenter::show_galactic_map(engine.galaxy(), &mut output);
    output.writeln("");

    let mut pilot = Autopilot::new();
    let delta = config.frame_delta();
    let snapshot_every = config.frame_rate.round().max(1.0) as u64;

    for _ in 0..config.max_frames {
        for command in pilot.decide(&engine) {
            engine.execute(command);
        }

        for event in engine.tick(delta, FrameInput::default()) {
            EventPresenter::show_event(engine.frame(), &event, &mut output);
        }

        if config.emit_snapshots && engine.frame() % snapshot_every == 0 {
            output.writeln(&engine.snapshot_json()?);
        }

        if engine.is_over() {
            break;
        }
    }

    output.writeln("");
    StatusPresenter::show_status(&engine, &mut output);
    Ok(())
}
