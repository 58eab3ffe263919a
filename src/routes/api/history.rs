use rocket::serde::json::Json;
use rocket::{get, State};

use crate::modules::history::SharedStore;
use crate::modules::models::entry::Entry;

/// # full history as json, oldest entry first
#[get("/history")]
pub fn get_all(store: &State<SharedStore>) -> Json<Vec<Entry>> {
    Json(store.load_all())
}
