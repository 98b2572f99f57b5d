#![warn(clippy::all)]

use conway_term::{
    print_welcome, Arguments, Chime, Config, Grid, RawModeGuard, SimulationLoop,
    TerminalControls, TerminalView,
};
use crossterm::style::Stylize;
use std::{io::Write, process::ExitCode};

fn init_logger() {
    // raw mode needs explicit carriage returns
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{} {}] {}\r", record.level(), record.target(), record.args()))
        .init();
}

fn main() -> ExitCode {
    init_logger();
    print_welcome();

    let args = match Arguments::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            println!("{}", format!("Error: {e}").red());
            return ExitCode::FAILURE;
        }
    };
    println!("{}\n", args.to_string().green());

    let config = match args.validate() {
        Ok(config) => config,
        Err(e) => {
            println!("{}", format!("Error: {e}").red());
            println!("{}", Config::USAGE);
            println!("Fix the parameters and try again.");
            return ExitCode::FAILURE;
        }
    };

    let chime = Chime::new(!config.quiet);
    chime.start();

    let grid = Grid::new(
        config.width,
        config.height,
        config.neighborhood,
        &config.population,
        config.seed,
    );
    if config.generations == 0 {
        println!("{}", "Press space to stop the simulation.".cyan());
    }
    println!("{}", "Press Esc or Ctrl-C to interrupt.".cyan());

    let outcome = {
        let _raw_mode = match RawModeGuard::enable() {
            Ok(guard) => guard,
            Err(e) => {
                println!("{}", format!("Error: {e:#}").red());
                return ExitCode::FAILURE;
            }
        };
        let mut simulation = SimulationLoop::new(grid, config.generations, config.interval);
        simulation.run(&mut TerminalControls::new(), &mut TerminalView::stdout(chime))
    };
    log::debug!("{outcome:?}");

    chime.end();
    ExitCode::SUCCESS
}
