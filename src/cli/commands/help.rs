use crate::ui::messages;

/// Handle the `help` command.
pub fn handle() {
    messages::header(format!("TASKLOG v{}", env!("CARGO_PKG_VERSION")));
    println!("Commands may be run anytime at the command prompt.\n");
    println!("  (RETURN)                Log the current task and start the next one");
    println!("  quit                    Save and stop tasklog");
    println!("  help                    Show this menu");
    println!("  show-remaining          Show the total number of hours remaining");
    println!("  update-remaining        Set a new number for total remaining hours");
    println!("  show-tracked            Show the total number of tracked hours");
    println!("  show-current-duration   Show the duration of the currently running task");
    println!("  edit-last-entry         Rewrite the duration of the last logged entry");
    println!("  daily-summary           Show today's logged tasks");
    println!("  toggle-tracked          Show/hide total tracked hours when logging a task");
    println!("  toggle-remaining        Show/hide remaining hours when logging a task");
    println!("  initialize              Reset all preferences and erase tracking data");
    println!();
    println!("Remaining hours count down from a budget you set, i.e. 40 for a");
    println!("work week. Tracked hours keep growing even when the budget is 0.");
    println!();
}
