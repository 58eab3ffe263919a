use log::info;
use rocket::{launch, Build, Rocket};

use marathon_pace_tracker::build_rocket;
use marathon_pace_tracker::config::Settings;
use marathon_pace_tracker::modules::helpers::logging::setup_logging;
use marathon_pace_tracker::modules::history::JsonFileStore;

#[launch]
fn rocket() -> Rocket<Build> {
    let settings = Settings::from_env();
    setup_logging(&settings).expect("Failed to setup logging");

    info!(target:"main", "storing history in {:?}", settings.history_file);

    build_rocket(Box::new(JsonFileStore::new(settings.history_file)))
}
