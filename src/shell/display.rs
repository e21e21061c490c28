use crate::shared::ElevatorSnapshot;
use crossbeam_channel as cbc;
use log::warn;

/// One line per snapshot, either human readable or JSON.
pub fn render(snapshot: &ElevatorSnapshot, json: bool) -> String {
    if !json {
        return snapshot.to_string();
    }

    match serde_json::to_string(snapshot) {
        Ok(line) => line,
        Err(e) => {
            warn!("Failed to serialize snapshot: {}", e);
            snapshot.to_string()
        }
    }
}

/// Prints every snapshot until the elevator drops its end of the channel.
pub fn run_display(state_rx: cbc::Receiver<ElevatorSnapshot>, json: bool) {
    for snapshot in state_rx.iter() {
        println!("{}", render(&snapshot, json));
    }
}
