use std::sync::Arc;

use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crisp_schedule_client::{
    FormField, RenderSurface, ScheduleController, SchedulingClient, TabGroup, TerminalSurface,
};

const HELP: &str = "\
Commands:
  start <HH:MM>       set the window start time
  end <HH:MM>         set the window end time
  companies <json>    set the companies document
  students <json>     set the students document
  generate            submit the schedule request
  clear               reset the form to defaults
  tab <id>            switch primary tab (schedule | results)
  results <id>        switch result tab (schedule | conflicts | raw)
  help                show this help
  quit                exit";

#[tokio::main]
async fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Initialize the scheduling service client
    let client = SchedulingClient::new();
    info!("Using scheduling service at {}", client.endpoint());

    let surface = Arc::new(TerminalSurface::new());
    let mut controller = ScheduleController::new(client, surface);

    // Start from the same defaults the page form carries
    controller.clear_form();
    info!("CRISP schedule client initialized");

    println!("{}", HELP);

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                eprintln!("Failed to read input: {}", err);
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (command, rest) = match trimmed.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            "start" => controller_set(&controller, FormField::StartTime, rest),
            "end" => controller_set(&controller, FormField::EndTime, rest),
            "companies" => controller_set(&controller, FormField::Companies, rest),
            "students" => controller_set(&controller, FormField::Students, rest),
            "generate" => controller.generate_schedule().await,
            "clear" => controller.clear_form(),
            "tab" => controller.switch_tab(TabGroup::Primary, rest),
            "results" => controller.switch_tab(TabGroup::Results, rest),
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'; try 'help'", other),
        }
    }

    info!("CRISP schedule client shutting down");
}

// Write a field and, for structured-text fields, run the advisory check the
// way the page runs it on every input event
fn controller_set(controller: &ScheduleController, field: FormField, value: &str) {
    controller.surface().set_field_value(field, value);
    if matches!(field, FormField::Companies | FormField::Students) {
        controller.validate_field(field);
    }
}
