/* 3rd party libraries */
use crossbeam_channel as cbc;
use std::io;
use std::path::Path;
use std::thread::Builder;

/* Custom libraries */
use elevator_sim::config;
use elevator_sim::elevator::ElevatorFSM;
use elevator_sim::shared::{Call, ElevatorSnapshot};
use elevator_sim::shell;
use elevator_sim::unwrap_or_exit;

/* Main */
fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load the configuration
    let matches = config::cli().get_matches();
    let config = unwrap_or_exit!(
        config::resolve_config(&matches, Path::new(config::DEFAULT_CONFIG)),
        "Failed to load configuration"
    );

    // Initialize channels
    let (call_tx, call_rx) = cbc::unbounded::<Call>();
    let (state_tx, state_rx) = cbc::unbounded::<ElevatorSnapshot>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the elevator module
    let elevator_fsm = unwrap_or_exit!(
        ElevatorFSM::new(&config.elevator, call_rx, state_tx, terminate_rx),
        "Failed to start elevator"
    );

    let elevator_fsm_thread = Builder::new().name("elevator_fsm".into());
    let elevator_fsm_handle = elevator_fsm_thread.spawn(move || elevator_fsm.run())?;

    // Start the display
    let json = config.shell.json;
    let display_thread = Builder::new().name("shell_display".into());
    let display_handle = display_thread.spawn(move || shell::run_display(state_rx, json))?;

    // Read commands on the main thread until quit or end of input.
    // terminate_tx stays alive here so end of input lets the queue drain.
    eprintln!("{}", shell::input::HELP);
    shell::run_input(io::stdin().lock(), call_tx, &terminate_tx);

    if elevator_fsm_handle.join().is_err() {
        log::error!("Elevator thread panicked");
    }
    if display_handle.join().is_err() {
        log::error!("Display thread panicked");
    }
    drop(terminate_tx);

    Ok(())
}
