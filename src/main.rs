//! standup-timesheet entrypoint.

use standup_timesheet::run;
use standup_timesheet::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
